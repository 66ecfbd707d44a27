//! Feature extractor: converts a map payload into typed point features.
//!
//! The backend sends either a bare JSON array of feature objects or an object
//! wrapping that array under `features`. Each element carries GeoJSON-style
//! geometry plus display attributes; elements that do not decode to at least
//! a coordinate are skipped silently.

use serde_json::Value;

use crate::error::DecodeError;
use crate::json;
use crate::models::{Coordinate, PointFeature};

/// Key under which the backend wraps the feature array.
const FEATURES_KEY: &str = "features";

/// Extract the ordered point features from a map payload.
///
/// Fails only when the top-level shape is neither a bare array nor an object
/// with a `features` array. Individual undecodable elements are dropped, so
/// the result may be empty; callers treat an empty result as advisory and
/// keep their previous feature set.
pub fn extract(payload: &Value) -> Result<Vec<PointFeature>, DecodeError> {
    let elements = json::normalize_array(payload, FEATURES_KEY)?;

    Ok(elements.iter().filter_map(decode_feature).collect())
}

/// Decode one feature-like object, or `None` when it has no usable coordinate.
fn decode_feature(element: &Value) -> Option<PointFeature> {
    let coordinate = decode_coordinate(element)?;

    // Display attributes may sit under GeoJSON `properties` or directly on
    // the element.
    let attrs = element.get("properties").unwrap_or(element);

    Some(PointFeature {
        coordinate,
        title: json::optional_str(attrs, "title").map(str::to_string),
        image_url: json::optional_str(attrs, "image_url").map(str::to_string),
        wikipedia_url: json::optional_str(attrs, "wikipedia_url").map(str::to_string),
    })
}

/// Read a coordinate from GeoJSON geometry or flat latitude/longitude fields.
fn decode_coordinate(element: &Value) -> Option<Coordinate> {
    if let Some(coords) = element
        .get("geometry")
        .and_then(|g| g.get("coordinates"))
        .and_then(Value::as_array)
    {
        // GeoJSON order is [longitude, latitude].
        let longitude = coords.first().and_then(Value::as_f64)?;
        let latitude = coords.get(1).and_then(Value::as_f64)?;
        return Some(Coordinate {
            latitude,
            longitude,
        });
    }

    let latitude = json::optional_f64(element, "latitude")?;
    let longitude = json::optional_f64(element, "longitude")?;
    Some(Coordinate {
        latitude,
        longitude,
    })
}
