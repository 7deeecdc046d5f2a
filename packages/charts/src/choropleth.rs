//! Region choropleth.

use quake_map_analytics_models::RegionCount;
use quake_map_charts_models::{Choropleth, ChoroplethRegion};

use crate::palette::{count_color, count_legend};

/// Title of the choropleth.
pub const CHOROPLETH_TITLE: &str =
    "Amount of earthquakes in European countries/regions in the selected year";

/// Builds the choropleth from per-region counts.
#[must_use]
pub fn choropleth(counts: &[RegionCount]) -> Choropleth {
    Choropleth {
        title: CHOROPLETH_TITLE.to_string(),
        location_mode: "country names".to_string(),
        projection: "natural earth".to_string(),
        legend_title: "Number of Events".to_string(),
        legend: count_legend(),
        regions: counts
            .iter()
            .map(|rc| ChoroplethRegion {
                region: rc.region.clone(),
                count: rc.count,
                bucket: rc.bucket,
                color: count_color(rc.bucket).to_string(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quake_map_quake_models::CountBucket;

    #[test]
    fn colors_regions_by_bucket() {
        let chart = choropleth(&[
            RegionCount {
                region: "Greece".to_string(),
                count: 25,
                bucket: CountBucket::TwentyOnePlus,
            },
            RegionCount {
                region: "Italy".to_string(),
                count: 1,
                bucket: CountBucket::One,
            },
        ]);
        assert_eq!(chart.regions[0].color, "#061849");
        assert_eq!(chart.regions[1].color, "#4ae1f5");
        assert_eq!(chart.legend.len(), 6);
    }

    #[test]
    fn empty_counts_give_empty_map() {
        let chart = choropleth(&[]);
        assert!(chart.regions.is_empty());
        assert_eq!(chart.legend.len(), 6);
    }
}
