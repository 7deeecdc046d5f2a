//! Magnitude pie.

use quake_map_analytics_models::PieData;
use quake_map_charts_models::{PieChart, PieSlice};
use quake_map_quake_models::PIE_BINS;

use crate::MAGNITUDE_LEGEND_TITLE;
use crate::palette::{magnitude_legend, pie_color};

/// Title of the pie.
pub const PIE_TITLE: &str = "Distribution of earthquake magnitudes in the selected country/region";

/// Shown instead of the pie when the selection is empty.
pub const NO_DATA_MESSAGE: &str = "No data for the selected year(s) and region.";

/// Builds the pie, or a "no data" marker for an empty selection.
#[must_use]
pub fn pie_chart(data: &PieData) -> PieChart {
    match data {
        PieData::NoData => PieChart::NoData {
            message: NO_DATA_MESSAGE.to_string(),
        },
        PieData::Slices { slices } => PieChart::Chart {
            title: PIE_TITLE.to_string(),
            legend_title: MAGNITUDE_LEGEND_TITLE.to_string(),
            legend: magnitude_legend(&PIE_BINS, pie_color),
            slices: slices
                .iter()
                .map(|slice| PieSlice {
                    label: slice.label.clone(),
                    count: slice.count,
                    color: pie_color(&slice.label).to_string(),
                })
                .collect(),
        },
    }
}
