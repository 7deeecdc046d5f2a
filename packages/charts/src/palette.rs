//! Fixed color palettes keyed by bucket label.

use quake_map_quake_models::{CountBucket, MagnitudeBinSet};
use quake_map_charts_models::LegendEntry;

/// Map magnitude palette, green through red to black.
pub const MAP_COLORS: [(&str, &str); 12] = [
    ("5.0–5.1", "#0B7C38"),
    ("5.2–5.3", "#0FAE3A"),
    ("5.4–5.5", "#00FF2A"),
    ("5.6–5.7", "#B6FF00"),
    ("5.8–5.9", "#FFF200"),
    ("6.0–6.1", "#FFC300"),
    ("6.2–6.3", "#FF8A00"),
    ("6.4–6.5", "#FF4D00"),
    ("6.6-6.7", "#FF0000"),
    ("6.8-6.9", "#BD0202"),
    ("7.0-7.5", "#740C0C"),
    ("7.5+", "#000000"),
];

/// Map label whose color the pie's collapsed top bucket reuses.
const PIE_TOP_SOURCE: &str = "6.8-6.9";

/// Pie label that collapses every magnitude from 6.55 up.
const PIE_TOP_LABEL: &str = "6.6+";

/// Neutral color for labels outside a palette.
pub const FALLBACK_COLOR: &str = "#888888";

/// Color for a map magnitude bucket.
#[must_use]
pub fn map_color(label: &str) -> &'static str {
    MAP_COLORS
        .iter()
        .find(|(l, _)| *l == label)
        .map_or(FALLBACK_COLOR, |(_, color)| *color)
}

/// Color for a pie magnitude bucket.
#[must_use]
pub fn pie_color(label: &str) -> &'static str {
    if label == PIE_TOP_LABEL {
        map_color(PIE_TOP_SOURCE)
    } else {
        map_color(label)
    }
}

/// Color for a region count bucket, light to dark blue.
#[must_use]
pub const fn count_color(bucket: CountBucket) -> &'static str {
    match bucket {
        CountBucket::One => "#4ae1f5",
        CountBucket::TwoToThree => "#3bbcd9",
        CountBucket::FourToSix => "#2b88b8",
        CountBucket::SevenToTen => "#1c5f9a",
        CountBucket::ElevenToTwenty => "#123a73",
        CountBucket::TwentyOnePlus => "#061849",
    }
}

/// Legend for every bucket of `bins`, in bin order.
#[must_use]
pub fn magnitude_legend(bins: &MagnitudeBinSet, color: fn(&str) -> &'static str) -> Vec<LegendEntry> {
    bins.labels()
        .iter()
        .map(|label| LegendEntry {
            label: (*label).to_string(),
            color: color(label).to_string(),
        })
        .collect()
}

/// Legend for every count bucket, in ascending order.
#[must_use]
pub fn count_legend() -> Vec<LegendEntry> {
    CountBucket::all()
        .iter()
        .map(|bucket| LegendEntry {
            label: bucket.to_string(),
            color: count_color(*bucket).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quake_map_quake_models::{MAP_BINS, PIE_BINS};

    #[test]
    fn every_map_label_has_its_own_color() {
        for label in MAP_BINS.labels() {
            assert_ne!(map_color(label), FALLBACK_COLOR, "{label}");
        }
        let labels: Vec<&str> = MAP_COLORS.iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, MAP_BINS.labels());
    }

    #[test]
    fn pie_top_bucket_reuses_map_color() {
        assert_eq!(pie_color("6.6+"), "#BD0202");
        assert_eq!(pie_color("5.0–5.1"), map_color("5.0–5.1"));
        for label in PIE_BINS.labels() {
            assert_ne!(pie_color(label), FALLBACK_COLOR, "{label}");
        }
    }

    #[test]
    fn count_legend_is_ordered() {
        let labels: Vec<String> = count_legend().into_iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["1", "2–3", "4–6", "7–10", "11–20", "21+"]);
    }
}
