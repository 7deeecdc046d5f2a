//! Per-year summaries for the bar chart.

use std::collections::BTreeMap;

use quake_map_analytics_models::YearSummary;
use quake_map_quake_models::EarthquakeTable;

#[derive(Default)]
struct YearAccumulator<'a> {
    amount: u64,
    magnitudes: Vec<f64>,
    regions: BTreeMap<&'a str, u64>,
}

/// Builds one [`YearSummary`] per year, in ascending year order.
///
/// The dominant region is the one with the most rows that year; rows
/// without a region are ignored for it. Ties go to the region that sorts
/// first by name, which is the order the grouped counts are visited in.
/// Magnitudes are the three largest present values, padded with `None`.
#[must_use]
pub fn per_year_summary(table: &EarthquakeTable) -> Vec<YearSummary> {
    let mut years: BTreeMap<i32, YearAccumulator<'_>> = BTreeMap::new();

    for record in table {
        let acc = years.entry(record.year).or_default();
        acc.amount += 1;
        if let Some(magnitude) = record.magnitude {
            acc.magnitudes.push(magnitude);
        }
        if let Some(region) = record.region.as_deref() {
            *acc.regions.entry(region).or_insert(0) += 1;
        }
    }

    years
        .into_iter()
        .map(|(year, mut acc)| {
            acc.magnitudes.sort_by(|a, b| b.total_cmp(a));
            let top = |i: usize| acc.magnitudes.get(i).copied();

            YearSummary {
                year,
                amount: acc.amount,
                top_region: dominant_region(&acc.regions).map(str::to_string),
                m1: top(0),
                m2: top(1),
                m3: top(2),
            }
        })
        .collect()
}

/// First region with the highest count, in map order.
fn dominant_region<'a>(counts: &BTreeMap<&'a str, u64>) -> Option<&'a str> {
    let mut best: Option<(&'a str, u64)> = None;
    for (region, count) in counts {
        if best.is_none_or(|(_, best_count)| *count > best_count) {
            best = Some((*region, *count));
        }
    }
    best.map(|(region, _)| region)
}
