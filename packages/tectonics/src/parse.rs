//! Converts a plate-boundary `GeoJSON` document into [`BoundarySet`] values.
//!
//! Only `LineString` geometries are kept. Features of any other geometry
//! type, or with no geometry at all, are skipped.

use geo::LineString;
use geojson::GeoJson;

use crate::{BoundaryLine, BoundarySet, TectonicsError};

/// Property holding the boundary's plate-pair name (e.g. `"AF-AN"`).
const NAME_PROPERTY: &str = "Name";

/// Parses a `GeoJSON` `FeatureCollection` body.
///
/// # Errors
///
/// Returns [`TectonicsError::Parse`] if the body is not valid `GeoJSON`,
/// or [`TectonicsError::Format`] if it is not a `FeatureCollection`.
pub fn parse_boundaries(body: &str) -> Result<BoundarySet, TectonicsError> {
    let GeoJson::FeatureCollection(collection) = body.parse::<GeoJson>()? else {
        return Err(TectonicsError::Format {
            message: "expected a FeatureCollection".to_string(),
        });
    };

    let total = collection.features.len();
    let lines: Vec<BoundaryLine> = collection
        .features
        .iter()
        .filter_map(line_from_feature)
        .collect();

    if lines.len() < total {
        log::debug!(
            "Skipped {} of {total} boundary features without LineString geometry",
            total - lines.len()
        );
    }

    Ok(BoundarySet { lines })
}

fn line_from_feature(feature: &geojson::Feature) -> Option<BoundaryLine> {
    let geometry = feature.geometry.as_ref()?;
    let geojson::Value::LineString(positions) = &geometry.value else {
        return None;
    };

    let coords: Vec<(f64, f64)> = positions
        .iter()
        .filter_map(|position| match position.as_slice() {
            [lon, lat, ..] => Some((*lon, *lat)),
            _ => None,
        })
        .collect();

    if coords.is_empty() {
        return None;
    }

    let name = feature
        .property(NAME_PROPERTY)
        .and_then(serde_json::Value::as_str)
        .map(str::to_string);

    Some(BoundaryLine {
        name,
        line: LineString::from(coords),
    })
}
