#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Earthquake record types, magnitude bin sets, and region count buckets.
//!
//! This crate defines the canonical row type of the earthquake dataset and
//! the fixed discretizations used across the dashboard: two magnitude bin
//! sets (one per display context) and the six ordinal region-count buckets.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Region filter value meaning "every region".
pub const ALL_REGIONS: &str = "All";

/// One row of the earthquake dataset.
///
/// Only `year` is mandatory. Rows missing coordinates or magnitude are kept
/// in the table and dropped from the individual aggregates that need them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarthquakeRecord {
    /// Calendar year of the event.
    pub year: i32,
    /// Moment magnitude (the dataset only contains events >= 5.0).
    pub magnitude: Option<f64>,
    /// Epicenter latitude in degrees.
    pub latitude: Option<f64>,
    /// Epicenter longitude in degrees.
    pub longitude: Option<f64>,
    /// Hypocenter depth in kilometres.
    pub depth: Option<f64>,
    /// Number of seismic stations used for the solution.
    pub stations_used: Option<u32>,
    /// Country or region name as it appears in the source file.
    pub region: Option<String>,
}

impl EarthquakeRecord {
    /// Returns `(latitude, longitude, magnitude)` if all three are present.
    #[must_use]
    pub fn located_magnitude(&self) -> Option<(f64, f64, f64)> {
        Some((self.latitude?, self.longitude?, self.magnitude?))
    }
}

/// An immutable, in-memory earthquake table.
///
/// Filtering always produces a new table; the loaded base table is shared
/// behind an `Arc` and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EarthquakeTable {
    rows: Vec<EarthquakeRecord>,
}

impl EarthquakeTable {
    /// Creates a table from rows, preserving their order.
    #[must_use]
    pub const fn new(rows: Vec<EarthquakeRecord>) -> Self {
        Self { rows }
    }

    /// Returns the rows in source order.
    #[must_use]
    pub fn rows(&self) -> &[EarthquakeRecord] {
        &self.rows
    }

    /// Iterates over the rows in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, EarthquakeRecord> {
        self.rows.iter()
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns a new table containing the rows matching `predicate`.
    #[must_use]
    pub fn filter(&self, predicate: impl Fn(&EarthquakeRecord) -> bool) -> Self {
        Self {
            rows: self.rows.iter().filter(|r| predicate(r)).cloned().collect(),
        }
    }
}

impl FromIterator<EarthquakeRecord> for EarthquakeTable {
    fn from_iter<T: IntoIterator<Item = EarthquakeRecord>>(iter: T) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a EarthquakeTable {
    type Item = &'a EarthquakeRecord;
    type IntoIter = std::slice::Iter<'a, EarthquakeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// A fixed, ordered set of half-open magnitude intervals.
///
/// Bucket `i` covers `[lower_bounds[i], lower_bounds[i + 1])`; the last
/// bucket is unbounded above. A value exactly on a boundary belongs to the
/// upper bucket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagnitudeBinSet {
    lower_bounds: &'static [f64],
    labels: &'static [&'static str],
}

/// Bins for the epicenter map: finer granularity above 7.0.
pub const MAP_BINS: MagnitudeBinSet = MagnitudeBinSet {
    lower_bounds: &[
        5.0, 5.15, 5.35, 5.55, 5.75, 6.0, 6.15, 6.35, 6.55, 6.75, 7.0, 7.5,
    ],
    labels: &[
        "5.0–5.1", "5.2–5.3", "5.4–5.5", "5.6–5.7", "5.8–5.9", "6.0–6.1", "6.2–6.3", "6.4–6.5",
        "6.6-6.7", "6.8-6.9", "7.0-7.5", "7.5+",
    ],
};

/// Bins for the magnitude pie: everything from 6.55 up collapses into `6.6+`.
pub const PIE_BINS: MagnitudeBinSet = MagnitudeBinSet {
    lower_bounds: &[5.0, 5.15, 5.35, 5.55, 5.75, 6.0, 6.15, 6.35, 6.55],
    labels: &[
        "5.0–5.1", "5.2–5.3", "5.4–5.5", "5.6–5.7", "5.8–5.9", "6.0–6.1", "6.2–6.3", "6.4–6.5",
        "6.6+",
    ],
};

impl MagnitudeBinSet {
    /// Bucket labels in ascending magnitude order.
    #[must_use]
    pub const fn labels(&self) -> &'static [&'static str] {
        self.labels
    }

    /// Number of buckets.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always `false`; both bin sets are non-empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Index of the bucket containing `magnitude`.
    ///
    /// Returns `None` for values below the first bound and for `NaN`.
    #[must_use]
    pub fn bucket_index(&self, magnitude: f64) -> Option<usize> {
        if magnitude.is_nan() {
            return None;
        }
        self.lower_bounds
            .partition_point(|bound| *bound <= magnitude)
            .checked_sub(1)
    }

    /// Label of the bucket containing `magnitude`.
    #[must_use]
    pub fn label(&self, magnitude: f64) -> Option<&'static str> {
        self.bucket_index(magnitude).map(|i| self.labels[i])
    }

    /// Position of `label` in this set's ordering.
    #[must_use]
    pub fn position(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| *l == label)
    }
}

/// Ordinal bucket for the number of events recorded in a region.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum CountBucket {
    /// At most one event.
    #[serde(rename = "1")]
    #[strum(serialize = "1")]
    One,
    /// Two or three events.
    #[serde(rename = "2–3")]
    #[strum(serialize = "2–3")]
    TwoToThree,
    /// Four to six events.
    #[serde(rename = "4–6")]
    #[strum(serialize = "4–6")]
    FourToSix,
    /// Seven to ten events.
    #[serde(rename = "7–10")]
    #[strum(serialize = "7–10")]
    SevenToTen,
    /// Eleven to twenty events.
    #[serde(rename = "11–20")]
    #[strum(serialize = "11–20")]
    ElevenToTwenty,
    /// More than twenty events.
    #[serde(rename = "21+")]
    #[strum(serialize = "21+")]
    TwentyOnePlus,
}

impl CountBucket {
    /// Maps an event count onto its bucket.
    ///
    /// Bins are right-closed: `(-1, 1]`, `(1, 3]`, `(3, 6]`, `(6, 10]`,
    /// `(10, 20]`, `(20, ∞)`. Zero falls into the first bucket.
    #[must_use]
    pub const fn from_count(count: u64) -> Self {
        match count {
            0..=1 => Self::One,
            2..=3 => Self::TwoToThree,
            4..=6 => Self::FourToSix,
            7..=10 => Self::SevenToTen,
            11..=20 => Self::ElevenToTwenty,
            _ => Self::TwentyOnePlus,
        }
    }

    /// Returns all variants in ascending order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::One,
            Self::TwoToThree,
            Self::FourToSix,
            Self::SevenToTen,
            Self::ElevenToTwenty,
            Self::TwentyOnePlus,
        ]
    }
}

/// Normalizes a region name: title-cases every word and trims whitespace.
///
/// A letter is upper-cased when it follows a non-letter (or starts the
/// string) and lower-cased otherwise, so `"bosnia and herzegovina"` becomes
/// `"Bosnia And Herzegovina"`. The result is a fixed point of this function.
#[must_use]
pub fn normalize_region(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_is_letter = false;

    for ch in raw.trim().chars() {
        if ch.is_alphabetic() {
            if prev_is_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(ch);
            prev_is_letter = false;
        }
    }

    out
}
