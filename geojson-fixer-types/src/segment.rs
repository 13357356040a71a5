use crate::orient::rad;
use crate::point::GeoPoint;

/// A straight line segment between two consecutive points of a ring.
#[derive(Debug, PartialEq)]
pub struct Segment<'a, Point>(pub &'a Point, pub &'a Point);

impl<P: GeoPoint> Segment<'_, P> {
    /// Contribution of the segment to the spherical excess sum of a ring:
    ///
    /// `rad(lon2 - lon1) * (2 + sin(rad(lat1)) + sin(rad(lat2)))`
    ///
    /// Only the sign of the total is meaningful, the value is not scaled to any area unit.
    pub fn excess_term(&self) -> f64 {
        rad(self.1.lon() - self.0.lon()) * (2.0 + rad(self.0.lat()).sin() + rad(self.1.lat()).sin())
    }
}
