//! Right-hand rule check of polygon winding.
//!
//! Under the right-hand rule the exterior ring of a polygon winds counterclockwise and every hole winds clockwise. The
//! direction of a ring is taken from [`Ring::winding`], which treats a ring with zero excess as clockwise. This makes
//! a flat exterior ring fail the check in both directions.

use geojson::{LineStringType, Position, Value};
use geojson_fixer_types::{Ring, Winding};

use crate::error::ValidationError;

/// Winding of a ring given as GeoJSON positions.
pub fn ring_winding(ring: &[Position]) -> Result<Winding, ValidationError> {
    Ok(Ring::from_positions(ring)?.winding())
}

/// Whether the polygon follows the right-hand rule. A polygon without rings does.
pub fn is_polygon_rhr(rings: &[LineStringType]) -> Result<bool, ValidationError> {
    let Some((exterior, interiors)) = rings.split_first() else {
        return Ok(true);
    };

    if ring_winding(exterior)? == Winding::Clockwise {
        return Ok(false);
    }

    for interior in interiors {
        if ring_winding(interior)? != Winding::Clockwise {
            return Ok(false);
        }
    }

    Ok(true)
}

/// Whether a `Polygon` or every polygon of a `MultiPolygon` follows the right-hand rule. Other geometries always do.
pub fn is_rhr(value: &Value) -> Result<bool, ValidationError> {
    match value {
        Value::Polygon(rings) => is_polygon_rhr(rings),
        Value::MultiPolygon(polygons) => {
            for rings in polygons {
                if !is_polygon_rhr(rings)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        _ => Ok(true),
    }
}
