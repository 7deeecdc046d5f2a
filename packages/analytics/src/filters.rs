//! Row filters driven by the current selection.
//!
//! Both filters return a new table and leave the input untouched.

use quake_map_quake_models::{ALL_REGIONS, EarthquakeTable};

/// Keeps the rows of `year`, or every row when no year is selected.
#[must_use]
pub fn filter_by_year(table: &EarthquakeTable, year: Option<i32>) -> EarthquakeTable {
    match year {
        None => table.clone(),
        Some(year) => table.filter(|r| r.year == year),
    }
}

/// Keeps the rows whose recorded region equals `region` exactly.
///
/// [`ALL_REGIONS`] keeps every row, including those without a region.
#[must_use]
pub fn filter_by_region(table: &EarthquakeTable, region: &str) -> EarthquakeTable {
    if region == ALL_REGIONS {
        return table.clone();
    }
    table.filter(|r| r.region.as_deref() == Some(region))
}
