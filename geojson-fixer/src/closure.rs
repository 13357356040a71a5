//! Ring closure check.

use geojson::{LineStringType, Value};
use geojson_fixer_types::Ring;

use crate::error::ValidationError;

/// Checks that the first and the last positions of every ring of the polygon are exactly equal.
pub fn check_polygon(rings: &[LineStringType]) -> Result<(), ValidationError> {
    for ring in rings {
        if !Ring::from_positions(ring)?.is_closed() {
            return Err(ValidationError::PolygonNotClosed);
        }
    }

    Ok(())
}

/// Checks closure of all rings of a `Polygon` or `MultiPolygon`. Other geometries have no rings and always pass.
pub fn check(value: &Value) -> Result<(), ValidationError> {
    match value {
        Value::Polygon(rings) => check_polygon(rings),
        Value::MultiPolygon(polygons) => polygons.iter().try_for_each(|rings| check_polygon(rings)),
        _ => Ok(()),
    }
}
