#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Aggregation pipeline over the earthquake table.
//!
//! The dashboard first narrows the base table with [`filters`], then
//! derives every view from that subset. The only exception is the yearly
//! bar chart, whose [`summary::per_year_summary`] always runs over the
//! unfiltered table because it represents every year.

pub mod filters;
pub mod magnitudes;
pub mod regions;
pub mod summary;

pub use filters::{filter_by_region, filter_by_year};
pub use magnitudes::{magnitude_histogram, pie_data, top3_by_magnitude};
pub use regions::{region_counts, region_options};
pub use summary::per_year_summary;
