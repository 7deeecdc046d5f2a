#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Pure chart builders for the earthquake dashboard.
//!
//! Every builder takes an already-aggregated view and returns a chart
//! definition from [`quake_map_charts_models`]. Builders hold no state
//! and do no validation beyond what the aggregation pipeline guarantees.
//! An empty view yields an empty chart, except for the pie, which reports
//! [`quake_map_charts_models::PieChart::NoData`].

pub mod bar;
pub mod choropleth;
pub mod maps;
pub mod palette;
pub mod pie;

pub use bar::bar_chart;
pub use choropleth::choropleth;
pub use maps::{mini_map, point_map};
pub use pie::pie_chart;

/// Legend title shared by the magnitude-colored charts.
pub const MAGNITUDE_LEGEND_TITLE: &str = "Magnitude Category";

/// Formats an optional magnitude with one decimal, or `n/a`.
#[must_use]
pub fn format_magnitude(magnitude: Option<f64>) -> String {
    magnitude.map_or_else(|| "n/a".to_string(), |m| format!("{m:.1}"))
}

/// Formats any optional value, or `n/a`.
#[must_use]
pub fn format_optional<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| v.to_string())
}
