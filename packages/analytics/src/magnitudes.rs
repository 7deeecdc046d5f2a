//! Magnitude distributions and the strongest events of a selection.

use quake_map_analytics_models::{MagnitudeSlice, PieData, StrongQuake};
use quake_map_quake_models::{EarthquakeTable, MAP_BINS, MagnitudeBinSet, PIE_BINS};

/// Number of events shown on the "strongest earthquakes" mini-map.
pub const STRONGEST_COUNT: usize = 3;

/// Counts events per bucket of `bins`, in bin order, omitting empty buckets.
///
/// Rows without a magnitude or below the first bin are not counted.
#[must_use]
pub fn magnitude_histogram(table: &EarthquakeTable, bins: &MagnitudeBinSet) -> Vec<MagnitudeSlice> {
    let mut counts = vec![0_u64; bins.len()];
    for idx in table
        .iter()
        .filter_map(|r| r.magnitude)
        .filter_map(|m| bins.bucket_index(m))
    {
        counts[idx] += 1;
    }

    bins.labels()
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(label, count)| MagnitudeSlice {
            label: (*label).to_string(),
            count,
        })
        .collect()
}

/// Pie distribution over [`PIE_BINS`], or [`PieData::NoData`] when nothing
/// in the selection can be bucketed.
#[must_use]
pub fn pie_data(table: &EarthquakeTable) -> PieData {
    if table.is_empty() {
        return PieData::NoData;
    }
    let slices = magnitude_histogram(table, &PIE_BINS);
    if slices.is_empty() {
        log::debug!("{} rows selected but none has a usable magnitude", table.len());
        return PieData::NoData;
    }
    PieData::Slices { slices }
}

/// The [`STRONGEST_COUNT`] strongest located events.
///
/// Rows missing latitude, longitude or magnitude are skipped. Equal
/// magnitudes keep their table order. The result is then ordered by map
/// bucket so that the legend reads from weakest to strongest category.
#[must_use]
pub fn top3_by_magnitude(table: &EarthquakeTable) -> Vec<StrongQuake> {
    let mut located: Vec<_> = table
        .iter()
        .filter_map(|r| r.located_magnitude().map(|loc| (r, loc)))
        .collect();

    located.sort_by(|(_, (_, _, a)), (_, (_, _, b))| b.total_cmp(a));
    located.truncate(STRONGEST_COUNT);
    located.sort_by_key(|(_, (_, _, m))| MAP_BINS.bucket_index(*m).unwrap_or(usize::MAX));

    located
        .into_iter()
        .map(|(record, (latitude, longitude, magnitude))| StrongQuake {
            year: record.year,
            magnitude,
            latitude,
            longitude,
            depth: record.depth,
            stations_used: record.stations_used,
            region: record.region.clone(),
            category: MAP_BINS.label(magnitude).map(str::to_string),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{filter_by_region, filter_by_year};
    use crate::fixtures::{quake, table};
    use quake_map_quake_models::EarthquakeRecord;

    #[test]
    fn histogram_follows_bin_order() {
        let base = table(vec![
            quake(2015, 6.9, None),
            quake(2015, 5.0, None),
            quake(2015, 5.16, None),
            quake(2015, 5.05, None),
        ]);
        let slices = magnitude_histogram(&base, &MAP_BINS);
        let labels: Vec<(&str, u64)> = slices.iter().map(|s| (s.label.as_str(), s.count)).collect();
        assert_eq!(labels, vec![("5.0–5.1", 2), ("5.2–5.3", 1), ("6.8-6.9", 1)]);
    }

    #[test]
    fn pie_collapses_strong_events() {
        let base = table(vec![quake(2015, 6.6, None), quake(2015, 7.8, None)]);
        assert_eq!(
            pie_data(&base),
            PieData::Slices {
                slices: vec![MagnitudeSlice {
                    label: "6.6+".to_string(),
                    count: 2,
                }],
            }
        );
    }

    #[test]
    fn pie_signals_no_data_for_empty_selection() {
        let base = table(vec![
            quake(2015, 5.5, Some("Greece")),
            quake(2016, 5.5, Some("Italy")),
        ]);
        let year = filter_by_year(&base, Some(2015));
        let selection = filter_by_region(&year, "Italy");
        assert_eq!(pie_data(&selection), PieData::NoData);
        assert!(matches!(
            pie_data(&filter_by_region(&year, "All")),
            PieData::Slices { .. }
        ));
    }

    #[test]
    fn pie_without_usable_magnitudes_has_no_data() {
        let mut record = quake(2015, 5.5, None);
        record.magnitude = None;
        assert_eq!(pie_data(&table(vec![record])), PieData::NoData);
    }

    #[test]
    fn picks_three_strongest_located_events() {
        let unlocated = EarthquakeRecord {
            latitude: None,
            ..quake(2015, 7.9, Some("Nowhere"))
        };
        let base = table(vec![
            quake(2015, 5.2, Some("A")),
            unlocated,
            quake(2015, 6.4, Some("B")),
            quake(2015, 7.1, Some("C")),
            quake(2015, 5.9, Some("D")),
        ]);

        let top = top3_by_magnitude(&base);
        let regions: Vec<&str> = top.iter().filter_map(|q| q.region.as_deref()).collect();

        // Ordered by map bucket, weakest category first.
        assert_eq!(regions, vec!["D", "B", "C"]);
        assert_eq!(top[2].category.as_deref(), Some("7.0-7.5"));
    }

    #[test]
    fn equal_magnitudes_keep_table_order() {
        let base = table(vec![
            quake(2015, 6.0, Some("first")),
            quake(2015, 6.0, Some("second")),
            quake(2015, 6.0, Some("third")),
            quake(2015, 6.0, Some("fourth")),
        ]);
        let regions: Vec<String> = top3_by_magnitude(&base)
            .into_iter()
            .filter_map(|q| q.region)
            .collect();
        assert_eq!(regions, vec!["first", "second", "third"]);
    }

    #[test]
    fn fewer_than_three_events() {
        let base = table(vec![quake(2015, 5.0, None)]);
        assert_eq!(top3_by_magnitude(&base).len(), 1);
        assert!(top3_by_magnitude(&table(Vec::new())).is_empty());
    }
}
