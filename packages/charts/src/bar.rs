//! Yearly bar chart.

use quake_map_analytics_models::YearSummary;
use quake_map_charts_models::{BarChart, BarStyle, YearBar};

use crate::{format_magnitude, format_optional};

/// Title of the yearly chart.
pub const BAR_TITLE: &str = "Amount of earthquakes in Europe of magnitude 5 and higher";

/// Builds the yearly bar chart, marking `selected_year` if set.
#[must_use]
pub fn bar_chart(summaries: &[YearSummary], selected_year: Option<i32>) -> BarChart {
    BarChart {
        title: BAR_TITLE.to_string(),
        x_axis_title: "Year".to_string(),
        y_axis_title: "Amount".to_string(),
        style: BarStyle {
            fill_color: "rgb(150, 120, 200)".to_string(),
            line_color: "rgb(80, 50, 130)".to_string(),
            line_width: 1.5,
            opacity: 0.6,
        },
        bars: summaries
            .iter()
            .map(|summary| YearBar {
                year: summary.year,
                amount: summary.amount,
                hover: hover_lines(summary),
                selected: selected_year == Some(summary.year),
            })
            .collect(),
    }
}

fn hover_lines(summary: &YearSummary) -> Vec<String> {
    vec![
        format!("Information for {}", summary.year),
        format!("amount of earthquakes: {}", summary.amount),
        format!(
            "region with the biggest amount: {}",
            format_optional(summary.top_region.as_deref())
        ),
        format!("the strongest magnitude: {}", format_magnitude(summary.m1)),
        format!(
            "the second strongest magnitude: {}",
            format_magnitude(summary.m2)
        ),
        format!(
            "the third strongest magnitude: {}",
            format_magnitude(summary.m3)
        ),
    ]
}
