//! Ring orientation on the sphere.
//!
//! Orientation is derived from the sign of the spherical excess sum of the ring (see
//! [`Segment::excess_term`](crate::Segment::excess_term)). Only the sign is used, so the sum is never scaled into an
//! area.

use serde::{Deserialize, Serialize};

use crate::contour::Ring;
use crate::point::GeoPoint;

/// Converts degrees to radians as `d * π / 180`.
pub fn rad(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Winding direction of a ring.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winding {
    /// Clockwise. Rings with zero excess are classified as clockwise too.
    Clockwise,
    /// Counterclockwise
    CounterClockwise,
}

impl Winding {
    /// Opposite direction.
    pub fn reverse(self) -> Self {
        match self {
            Winding::Clockwise => Winding::CounterClockwise,
            Winding::CounterClockwise => Winding::Clockwise,
        }
    }
}

impl<P: GeoPoint> Ring<P> {
    /// Signed spherical excess sum of the ring. Rings with 2 points or less have zero excess.
    pub fn signed_excess(&self) -> f64 {
        if self.len() <= 2 {
            return 0.0;
        }

        self.iter_segments().map(|s| s.excess_term()).sum()
    }

    /// Winding of the ring. The boundary is inclusive: a ring with exactly zero excess is [`Winding::Clockwise`].
    pub fn winding(&self) -> Winding {
        if self.signed_excess() >= 0.0 {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }

    /// Shorthand for `winding() == Winding::Clockwise`.
    pub fn is_clockwise(&self) -> bool {
        self.winding() == Winding::Clockwise
    }
}
