//! Region-level aggregates for the choropleth and the region dropdown.

use std::collections::{BTreeMap, BTreeSet};

use quake_map_analytics_models::RegionCount;
use quake_map_quake_models::{ALL_REGIONS, CountBucket, EarthquakeTable, normalize_region};

/// Counts events per normalized region, sorted by region name.
///
/// Rows without a region are dropped. Names differing only in case or
/// surrounding whitespace are merged.
#[must_use]
pub fn region_counts(table: &EarthquakeTable) -> Vec<RegionCount> {
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for region in table.iter().filter_map(|r| r.region.as_deref()) {
        *counts.entry(normalize_region(region)).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(region, count)| RegionCount {
            region,
            count,
            bucket: CountBucket::from_count(count),
        })
        .collect()
}

/// Dropdown options: [`ALL_REGIONS`] followed by every distinct recorded
/// region in ascending order.
#[must_use]
pub fn region_options(table: &EarthquakeTable) -> Vec<String> {
    let distinct: BTreeSet<&str> = table.iter().filter_map(|r| r.region.as_deref()).collect();

    std::iter::once(ALL_REGIONS)
        .chain(distinct)
        .map(str::to_string)
        .collect()
}
