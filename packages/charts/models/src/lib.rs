#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Serializable chart definitions for the earthquake dashboard.
//!
//! Each type fully describes one chart: data points, category ordering,
//! colors and pre-rendered hover text. A frontend only has to draw them.

use quake_map_quake_models::CountBucket;
use serde::{Deserialize, Serialize};

/// A geographic position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatLon {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

/// Initial viewport of a map chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapViewport {
    /// Map center.
    pub center: LatLon,
    /// Zoom level.
    pub zoom: f64,
    /// Height in pixels.
    pub height: u32,
}

/// Styling shared by every bar of the yearly chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarStyle {
    /// Bar fill color.
    pub fill_color: String,
    /// Bar outline color.
    pub line_color: String,
    /// Bar outline width.
    pub line_width: f64,
    /// Bar opacity.
    pub opacity: f64,
}

/// One bar of the yearly chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearBar {
    /// Year, drawn on a category axis.
    pub year: i32,
    /// Number of events.
    pub amount: u64,
    /// Hover text lines.
    pub hover: Vec<String>,
    /// Whether this bar is the current selection.
    pub selected: bool,
}

/// Yearly event counts; clicking a bar selects that year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarChart {
    /// Chart title.
    pub title: String,
    /// X axis title.
    pub x_axis_title: String,
    /// Y axis title.
    pub y_axis_title: String,
    /// Bar styling.
    pub style: BarStyle,
    /// Bars in ascending year order.
    pub bars: Vec<YearBar>,
}

/// A single plotted earthquake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapPoint {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lon: f64,
    /// Magnitude.
    pub magnitude: f64,
    /// Magnitude bucket label.
    pub category: String,
    /// Marker color for `category`.
    pub color: String,
    /// Hover text lines.
    pub hover: Vec<String>,
}

/// A line layer drawn over a map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineOverlay {
    /// Layer name.
    pub name: String,
    /// Line color.
    pub color: String,
    /// Line width.
    pub width: f64,
    /// Whether the layer appears in the legend.
    pub show_legend: bool,
    /// Ordered `[lon, lat]` pairs.
    pub coordinates: Vec<[f64; 2]>,
}

/// Legend entry of a categorical color scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendEntry {
    /// Category label.
    pub label: String,
    /// Color.
    pub color: String,
}

/// Epicenter scatter map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointMap {
    /// Initial viewport.
    pub viewport: MapViewport,
    /// Legend title.
    pub legend_title: String,
    /// Legend in display order.
    pub legend: Vec<LegendEntry>,
    /// Marker size in pixels.
    pub marker_size: u32,
    /// Plotted events.
    pub points: Vec<MapPoint>,
    /// Line layers (plate boundaries when enabled).
    pub overlays: Vec<LineOverlay>,
}

/// One region of the choropleth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoroplethRegion {
    /// Region name used as the location key.
    pub region: String,
    /// Number of events.
    pub count: u64,
    /// Count bucket.
    pub bucket: CountBucket,
    /// Fill color for `bucket`.
    pub color: String,
}

/// Regions colored by event count bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Choropleth {
    /// Chart title.
    pub title: String,
    /// How `region` values are resolved to shapes.
    pub location_mode: String,
    /// Map projection.
    pub projection: String,
    /// Legend title.
    pub legend_title: String,
    /// Legend in display order.
    pub legend: Vec<LegendEntry>,
    /// Regions sorted by name.
    pub regions: Vec<ChoroplethRegion>,
}

/// One slice of the magnitude pie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieSlice {
    /// Bucket label.
    pub label: String,
    /// Number of events.
    pub count: u64,
    /// Slice color.
    pub color: String,
}

/// Magnitude distribution of the selected year(s) and region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PieChart {
    /// Nothing to draw for the current filters.
    NoData {
        /// Message to show instead of the chart.
        message: String,
    },
    /// A drawable pie.
    Chart {
        /// Chart title.
        title: String,
        /// Legend title.
        legend_title: String,
        /// Legend in display order.
        legend: Vec<LegendEntry>,
        /// Non-empty slices in bucket order.
        slices: Vec<PieSlice>,
    },
}

/// Small map of the strongest events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiniMap {
    /// Section heading.
    pub title: String,
    /// Initial viewport.
    pub viewport: MapViewport,
    /// Legend title.
    pub legend_title: String,
    /// Marker size in pixels.
    pub marker_size: u32,
    /// Plotted events, weakest category first.
    pub points: Vec<MapPoint>,
}
