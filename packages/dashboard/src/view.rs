//! One full render of the dashboard for a given selection.

use std::sync::Arc;

use quake_map_analytics::{
    filter_by_region, filter_by_year, per_year_summary, pie_data, region_counts, region_options,
    top3_by_magnitude,
};
use quake_map_charts::{bar_chart, choropleth, mini_map, pie_chart, point_map};
use quake_map_dashboard_models::{DashboardView, SelectionState};
use quake_map_quake_models::EarthquakeTable;
use quake_map_tectonics::BoundarySet;

/// State of the plate-boundary overlay for one render.
#[derive(Debug, Clone)]
pub enum Overlay {
    /// The overlay is switched off.
    Hidden,
    /// Boundary data is available.
    Loaded(Arc<BoundarySet>),
    /// Fetching failed; carries the error text.
    Failed(String),
}

/// Caption describing the selected year.
#[must_use]
pub fn caption(year: Option<i32>) -> String {
    year.map_or_else(
        || "Selected year: all years".to_string(),
        |year| format!("Selected year: {year}"),
    )
}

/// Runs the whole aggregation and chart pipeline for `state`.
///
/// `table` is never modified. The bar chart always covers every year; all
/// other charts see only the selected year, and the pie is further
/// narrowed to the selected region.
#[must_use]
pub fn render(state: &SelectionState, table: &EarthquakeTable, overlay: &Overlay) -> DashboardView {
    let year = state.current_year();
    let subset = filter_by_year(table, year);
    log::debug!(
        "Rendering year={year:?} region={} ({} of {} rows)",
        state.current_region(),
        subset.len(),
        table.len()
    );

    let mut warnings = vec![];
    let boundaries = match overlay {
        Overlay::Hidden => None,
        Overlay::Loaded(set) => Some(set.as_ref()),
        Overlay::Failed(message) => {
            warnings.push(format!("Could not load tectonic plate data: {message}"));
            None
        }
    };

    let regional = filter_by_region(&subset, state.current_region());

    DashboardView {
        selection: state.clone(),
        caption: caption(year),
        bar_chart: bar_chart(&per_year_summary(table), year),
        point_map: point_map(&subset, boundaries),
        choropleth: choropleth(&region_counts(&subset)),
        mini_map: mini_map(&top3_by_magnitude(&subset)),
        region_options: region_options(&subset),
        pie: pie_chart(&pie_data(&regional)),
        warnings,
    }
}
