//! Epicenter map and the strongest-events mini-map.

use geo::{Centroid, MultiPoint, Point};
use quake_map_analytics_models::StrongQuake;
use quake_map_charts_models::{LatLon, LineOverlay, MapPoint, MapViewport, MiniMap, PointMap};
use quake_map_quake_models::{EarthquakeTable, MAP_BINS};
use quake_map_tectonics::BoundarySet;

use crate::palette::{FALLBACK_COLOR, magnitude_legend, map_color};
use crate::{MAGNITUDE_LEGEND_TITLE, format_magnitude, format_optional};

/// Center of the European view.
pub const EUROPE_CENTER: LatLon = LatLon {
    lat: 50.0,
    lon: 15.0,
};

/// Name of the plate-boundary line layers.
pub const BOUNDARY_LAYER_NAME: &str = "Tectonic Boundaries";

/// Builds the epicenter map for the filtered table.
///
/// Rows without coordinates or with a magnitude outside every bucket are
/// not plotted. `boundaries`, when given, adds one red line layer per
/// boundary segment.
#[must_use]
pub fn point_map(table: &EarthquakeTable, boundaries: Option<&BoundarySet>) -> PointMap {
    let points = table
        .iter()
        .filter_map(|record| {
            let (lat, lon, magnitude) = record.located_magnitude()?;
            let category = MAP_BINS.label(magnitude)?;
            Some(MapPoint {
                lat,
                lon,
                magnitude,
                category: category.to_string(),
                color: map_color(category).to_string(),
                hover: vec![format!("magnitude: {magnitude}")],
            })
        })
        .collect();

    PointMap {
        viewport: MapViewport {
            center: EUROPE_CENTER,
            zoom: 2.6,
            height: 600,
        },
        legend_title: MAGNITUDE_LEGEND_TITLE.to_string(),
        legend: magnitude_legend(&MAP_BINS, map_color),
        marker_size: 8,
        points,
        overlays: boundaries.map(boundary_overlays).unwrap_or_default(),
    }
}

fn boundary_overlays(set: &BoundarySet) -> Vec<LineOverlay> {
    set.lines
        .iter()
        .map(|boundary| LineOverlay {
            name: BOUNDARY_LAYER_NAME.to_string(),
            color: "red".to_string(),
            width: 2.0,
            show_legend: false,
            coordinates: boundary.line.coords().map(|c| [c.x, c.y]).collect(),
        })
        .collect()
}

/// Builds the mini-map of the strongest events, centered on their centroid.
#[must_use]
pub fn mini_map(strongest: &[StrongQuake]) -> MiniMap {
    let center = MultiPoint::from(
        strongest
            .iter()
            .map(|q| Point::new(q.longitude, q.latitude))
            .collect::<Vec<_>>(),
    )
    .centroid()
    .map_or(EUROPE_CENTER, |c| LatLon {
        lat: c.y(),
        lon: c.x(),
    });

    MiniMap {
        title: "Top 3 strongest earthquakes".to_string(),
        viewport: MapViewport {
            center,
            zoom: 3.0,
            height: 400,
        },
        legend_title: MAGNITUDE_LEGEND_TITLE.to_string(),
        marker_size: 14,
        points: strongest.iter().map(strong_point).collect(),
    }
}

fn strong_point(quake: &StrongQuake) -> MapPoint {
    let category = quake.category.clone().unwrap_or_default();
    let color = quake
        .category
        .as_deref()
        .map_or(FALLBACK_COLOR, map_color)
        .to_string();

    MapPoint {
        lat: quake.latitude,
        lon: quake.longitude,
        magnitude: quake.magnitude,
        category,
        color,
        hover: vec![
            format!("magnitude: {}", format_magnitude(Some(quake.magnitude))),
            format!("depth: {}", format_optional(quake.depth)),
            format!("stations_used: {}", format_optional(quake.stations_used)),
            format!("region: {}", format_optional(quake.region.as_deref())),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::LineString;
    use quake_map_quake_models::EarthquakeRecord;
    use quake_map_tectonics::BoundaryLine;

    fn record(magnitude: Option<f64>, lat: Option<f64>) -> EarthquakeRecord {
        EarthquakeRecord {
            year: 2020,
            magnitude,
            latitude: lat,
            longitude: Some(21.0),
            depth: Some(12.0),
            stations_used: Some(40),
            region: Some("Greece".to_string()),
        }
    }

    fn strong(magnitude: f64, lat: f64, lon: f64) -> StrongQuake {
        StrongQuake {
            year: 2020,
            magnitude,
            latitude: lat,
            longitude: lon,
            depth: None,
            stations_used: Some(99),
            region: Some("Turkey".to_string()),
            category: MAP_BINS.label(magnitude).map(str::to_string),
        }
    }

    #[test]
    fn plots_only_located_events() {
        let table = EarthquakeTable::new(vec![
            record(Some(5.4), Some(38.0)),
            record(None, Some(38.0)),
            record(Some(6.0), None),
        ]);
        let map = point_map(&table, None);
        assert_eq!(map.points.len(), 1);
        assert_eq!(map.points[0].category, "5.4–5.5");
        assert_eq!(map.points[0].color, "#00FF2A");
        assert!(map.overlays.is_empty());
    }

    #[test]
    fn legend_follows_map_bins() {
        let map = point_map(&EarthquakeTable::default(), None);
        let labels: Vec<&str> = map.legend.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, MAP_BINS.labels());
        assert!(map.points.is_empty());
    }

    #[test]
    fn adds_one_layer_per_boundary() {
        let set = BoundarySet {
            lines: vec![
                BoundaryLine {
                    name: Some("AF-EU".to_string()),
                    line: LineString::from(vec![(10.0, 36.0), (12.0, 37.0)]),
                },
                BoundaryLine {
                    name: None,
                    line: LineString::from(vec![(20.0, 38.0), (21.0, 39.0), (22.0, 40.0)]),
                },
            ],
        };
        let map = point_map(&EarthquakeTable::default(), Some(&set));
        assert_eq!(map.overlays.len(), 2);
        assert_eq!(map.overlays[0].coordinates, vec![[10.0, 36.0], [12.0, 37.0]]);
        assert!(!map.overlays[1].show_legend);
    }

    #[test]
    fn mini_map_centers_on_points() {
        let map = mini_map(&[strong(6.0, 38.0, 20.0), strong(7.0, 40.0, 24.0)]);
        assert!((map.viewport.center.lat - 39.0).abs() < 1e-9);
        assert!((map.viewport.center.lon - 22.0).abs() < 1e-9);
        assert_eq!(map.points.len(), 2);
        assert_eq!(
            map.points[0].hover,
            vec![
                "magnitude: 6.0",
                "depth: n/a",
                "stations_used: 99",
                "region: Turkey"
            ]
        );
    }

    #[test]
    fn empty_mini_map_uses_default_center() {
        let map = mini_map(&[]);
        assert_eq!(map.viewport.center, EUROPE_CENTER);
        assert!(map.points.is_empty());
    }
}
