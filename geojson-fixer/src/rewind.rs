//! Winding normalization of polygons.

use geojson::{LineStringType, PolygonType, Value};
use geojson_fixer_types::{Ring, Winding};

/// Forces rings of polygons into a canonical winding without changing the area they enclose.
pub trait Rewind {
    /// Rewinds rings of a `Polygon` or of every polygon of a `MultiPolygon`. Other geometries are returned as is.
    fn rewind(&self, value: Value) -> Value;
}

impl<T: Rewind + ?Sized> Rewind for Box<T> {
    fn rewind(&self, value: Value) -> Value {
        (**self).rewind(value)
    }
}

/// Rewinds polygons to the right-hand rule: exterior rings counterclockwise, holes clockwise.
///
/// A ring is reversed only if its current winding is known to be wrong. Rings with positions that have less than
/// 2 axes are left untouched.
#[derive(Debug, Default, Copy, Clone)]
pub struct RightHandRewind;

impl RightHandRewind {
    fn wind(mut ring: LineStringType, target: Winding) -> LineStringType {
        let winding = Ring::from_positions(&ring).map(|view| view.winding());
        if matches!(winding, Ok(winding) if winding != target) {
            ring.reverse();
        }

        ring
    }

    fn rewind_polygon(rings: PolygonType) -> PolygonType {
        rings
            .into_iter()
            .enumerate()
            .map(|(index, ring)| {
                let target = if index == 0 {
                    Winding::CounterClockwise
                } else {
                    Winding::Clockwise
                };
                Self::wind(ring, target)
            })
            .collect()
    }
}

impl Rewind for RightHandRewind {
    fn rewind(&self, value: Value) -> Value {
        match value {
            Value::Polygon(rings) => Value::Polygon(Self::rewind_polygon(rings)),
            Value::MultiPolygon(polygons) => Value::MultiPolygon(
                polygons.into_iter().map(Self::rewind_polygon).collect(),
            ),
            other => other,
        }
    }
}
