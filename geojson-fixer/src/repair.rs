//! Repair of polygon rings that are too short to be valid.

use geojson::{PolygonType, Position, Value};

/// Number of decimal digits interpolated coordinates are rounded to by default.
pub const DEFAULT_MIDPOINT_PRECISION: u32 = 6;

/// Largest supported rounding precision. `f64` carries about 17 significant decimal digits, higher precisions are
/// clamped to this value.
pub const MAX_MIDPOINT_PRECISION: u32 = 17;

/// Repairs degenerate rings by inserting an interpolated point.
///
/// A ring of 3 positions `[P0, P1, P2]` is read as two control points and an explicit closing point. It is turned into
/// the minimal valid ring `[P0, Pm, P1, P2]`, where `Pm` is the midpoint of `P0` and `P1`. Rings with less than
/// 3 positions cannot be salvaged, and make the whole geometry unfixable.
#[derive(Debug, Copy, Clone)]
pub struct RingRepair {
    precision: u32,
}

impl Default for RingRepair {
    fn default() -> Self {
        Self::new(DEFAULT_MIDPOINT_PRECISION)
    }
}

impl RingRepair {
    /// Creates a repair that rounds interpolated coordinates to `precision` decimal digits.
    ///
    /// Precision is clamped to [`MAX_MIDPOINT_PRECISION`].
    pub fn new(precision: u32) -> Self {
        Self {
            precision: precision.min(MAX_MIDPOINT_PRECISION),
        }
    }

    /// Number of decimal digits interpolated coordinates are rounded to.
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Repairs all rings of a polygon. Returns `None` if any ring has less than 3 positions.
    pub fn repair(&self, rings: PolygonType) -> Option<PolygonType> {
        if rings.iter().any(|ring| ring.len() < 3) {
            log::trace!("Polygon has a ring with less than 3 positions");
            return None;
        }

        Some(
            rings
                .into_iter()
                .map(|mut ring| {
                    if ring.len() == 3 {
                        let pm = self.midpoint(&ring[0], &ring[1]);
                        ring.insert(1, pm);
                    }
                    ring
                })
                .collect(),
        )
    }

    /// Repairs rings of a `Polygon` or every polygon of a `MultiPolygon`. Other geometries are returned as is.
    ///
    /// A `MultiPolygon` is unfixable if any of its polygons is.
    pub fn repair_value(&self, value: Value) -> Option<Value> {
        match value {
            Value::Polygon(rings) => self.repair(rings).map(Value::Polygon),
            Value::MultiPolygon(polygons) => polygons
                .into_iter()
                .map(|rings| self.repair(rings))
                .collect::<Option<Vec<_>>>()
                .map(Value::MultiPolygon),
            other => Some(other),
        }
    }

    /// Midpoint of the two positions, interpolated over every axis they share.
    pub fn midpoint(&self, a: &Position, b: &Position) -> Position {
        a.iter()
            .zip(b)
            .map(|(a, b)| self.round((a + b) / 2.0))
            .collect()
    }

    /// Rounds the exact binary value to the nearest decimal with `precision` digits, ties to even.
    fn round(&self, value: f64) -> f64 {
        format!("{:.*}", self.precision as usize, value)
            .parse()
            .unwrap_or(value)
    }
}
