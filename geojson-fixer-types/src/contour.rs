//! Rings are sequences of points bounding a polygon face or hole.
//!
//! Unlike a contour that knows whether it is closed, a GeoJSON ring closes itself explicitly: the first and the last
//! positions must be exactly the same. [`Ring::is_closed`] checks this, and [`Ring::iter_segments`] only yields the
//! segments between consecutive stored points, so a closed ring already includes its closing segment.

use crate::error::FixerTypesError;
use crate::point::GeoJsonPoint;
use crate::segment::Segment;

/// Sequence of points. See module level documentation for details.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring<P> {
    points: Vec<P>,
}

impl<P> Ring<P> {
    /// Creates a new ring.
    pub fn new(points: Vec<P>) -> Self {
        Self { points }
    }

    /// Points of the ring, the closing point included.
    pub fn points(&self) -> &[P] {
        &self.points
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the ring has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over segments between consecutive points.
    pub fn iter_segments(&self) -> impl Iterator<Item = Segment<'_, P>> {
        self.points.windows(2).map(|w| Segment(&w[0], &w[1]))
    }

    /// Same ring traversed in the opposite direction.
    pub fn reversed(mut self) -> Self {
        self.points.reverse();
        self
    }
}

impl<P: PartialEq> Ring<P> {
    /// Whether the first and the last points are exactly equal. Empty rings are not closed.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }
}

impl<'a> Ring<GeoJsonPoint<'a>> {
    /// Borrows a sequence of GeoJSON positions as a ring.
    ///
    /// Fails if any of the positions has less than 2 axes.
    pub fn from_positions(positions: &'a [Vec<f64>]) -> Result<Self, FixerTypesError> {
        Ok(Self::new(
            positions
                .iter()
                .map(GeoJsonPoint::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        ))
    }
}

impl<P> From<Vec<P>> for Ring<P> {
    fn from(value: Vec<P>) -> Self {
        Self::new(value)
    }
}
