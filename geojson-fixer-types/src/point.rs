//! Geographic points and the borrowed view over GeoJSON positions.

use crate::error::FixerTypesError;

/// Point with geographic coordinates in degrees.
pub trait GeoPoint {
    /// Latitude.
    fn lat(&self) -> f64;
    /// Longitude.
    fn lon(&self) -> f64;
}

/// Borrowed view over a GeoJSON position: `[longitude, latitude, elevation?, ...]`.
///
/// Equality compares every axis of the position exactly, elevation included.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeoJsonPoint<'a>(&'a [f64]);

impl<'a> GeoJsonPoint<'a> {
    /// All axes of the position.
    pub fn axes(&self) -> &'a [f64] {
        self.0
    }

    /// Elevation, if the position carries one.
    pub fn elevation(&self) -> Option<f64> {
        self.0.get(2).copied()
    }
}

impl<'a> TryFrom<&'a [f64]> for GeoJsonPoint<'a> {
    type Error = FixerTypesError;

    fn try_from(value: &'a [f64]) -> Result<Self, Self::Error> {
        if value.len() < 2 {
            Err(FixerTypesError::Conversion(
                "point must contain at least 2 dimensions".to_string(),
            ))
        } else {
            Ok(GeoJsonPoint(value))
        }
    }
}

impl<'a> TryFrom<&'a Vec<f64>> for GeoJsonPoint<'a> {
    type Error = FixerTypesError;

    fn try_from(value: &'a Vec<f64>) -> Result<Self, Self::Error> {
        Self::try_from(value.as_slice())
    }
}

impl GeoPoint for GeoJsonPoint<'_> {
    fn lat(&self) -> f64 {
        self.0[1]
    }

    fn lon(&self) -> f64 {
        self.0[0]
    }
}

impl GeoPoint for (f64, f64) {
    fn lat(&self) -> f64 {
        self.1
    }

    fn lon(&self) -> f64 {
        self.0
    }
}
