#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Derived aggregate types for the earthquake dashboard.
//!
//! These are recomputed from the (filtered) earthquake table on every
//! render and never persisted.

use quake_map_quake_models::CountBucket;
use serde::{Deserialize, Serialize};

/// Summary of one calendar year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearSummary {
    /// Calendar year.
    pub year: i32,
    /// Number of events recorded that year.
    pub amount: u64,
    /// Region with the most events that year, if any row has a region.
    pub top_region: Option<String>,
    /// Strongest magnitude.
    pub m1: Option<f64>,
    /// Second strongest magnitude.
    pub m2: Option<f64>,
    /// Third strongest magnitude.
    pub m3: Option<f64>,
}

impl YearSummary {
    /// The three strongest magnitudes in descending order.
    #[must_use]
    pub const fn top_magnitudes(&self) -> [Option<f64>; 3] {
        [self.m1, self.m2, self.m3]
    }
}

/// Number of events in one normalized region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionCount {
    /// Title-cased, trimmed region name.
    pub region: String,
    /// Number of events.
    pub count: u64,
    /// Ordinal bucket for `count`.
    pub bucket: CountBucket,
}

/// Number of events falling in one magnitude bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MagnitudeSlice {
    /// Bucket label.
    pub label: String,
    /// Number of events.
    pub count: u64,
}

/// Magnitude distribution for the pie view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PieData {
    /// The selected year/region combination has no events.
    NoData,
    /// Non-empty buckets in bin-set order.
    Slices {
        /// The slices.
        slices: Vec<MagnitudeSlice>,
    },
}

/// One of the strongest events of the current selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrongQuake {
    /// Calendar year.
    pub year: i32,
    /// Magnitude.
    pub magnitude: f64,
    /// Epicenter latitude.
    pub latitude: f64,
    /// Epicenter longitude.
    pub longitude: f64,
    /// Depth in kilometres.
    pub depth: Option<f64>,
    /// Number of stations used.
    pub stations_used: Option<u32>,
    /// Region as recorded.
    pub region: Option<String>,
    /// Map-bin label for `magnitude` (`None` below the first bin).
    pub category: Option<String>,
}
