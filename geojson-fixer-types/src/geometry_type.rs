//! See documentation for [`GeometryType`] enum.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FixerTypesError;

/// One of the nine kinds of GeoJSON objects, identified by the `type` member.
///
/// Simple geometries map to a [`Shape`] describing what structurally valid coordinates of that kind look like.
/// Unknown type tags are rejected when parsing with [`FromStr`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GeometryType {
    /// `Point`
    Point,
    /// `MultiPoint`
    MultiPoint,
    /// `LineString`
    LineString,
    /// `MultiLineString`
    MultiLineString,
    /// `Polygon`
    Polygon,
    /// `MultiPolygon`
    MultiPolygon,
    /// `GeometryCollection`
    GeometryCollection,
    /// `Feature`
    Feature,
    /// `FeatureCollection`
    FeatureCollection,
}

/// Shape of the `coordinates` member of a simple geometry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    /// Nesting depth above a single position: 0 for `Point`, 1 for `LineString`, 3 for `MultiPolygon`.
    pub depth: usize,
    /// Minimum number of positions in every innermost position sequence.
    pub min_positions: usize,
    /// Whether the innermost sequences are polygon rings.
    pub rings: bool,
}

/// Minimum number of positions in a valid polygon ring, including the closing position.
pub const MIN_RING_POSITIONS: usize = 4;

/// Minimum number of positions in a valid line string.
pub const MIN_LINE_POSITIONS: usize = 2;

impl GeometryType {
    /// All GeoJSON kinds.
    pub const ALL: [GeometryType; 9] = [
        GeometryType::Point,
        GeometryType::MultiPoint,
        GeometryType::LineString,
        GeometryType::MultiLineString,
        GeometryType::Polygon,
        GeometryType::MultiPolygon,
        GeometryType::GeometryCollection,
        GeometryType::Feature,
        GeometryType::FeatureCollection,
    ];

    /// Type tag as it appears in the `type` member.
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryType::Point => "Point",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::LineString => "LineString",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPolygon => "MultiPolygon",
            GeometryType::GeometryCollection => "GeometryCollection",
            GeometryType::Feature => "Feature",
            GeometryType::FeatureCollection => "FeatureCollection",
        }
    }

    /// Expected shape of the coordinates of a simple geometry.
    ///
    /// Containers (`Feature`, `FeatureCollection` and `GeometryCollection`) hold other GeoJSON objects instead of
    /// coordinates, so they have no shape.
    pub fn shape(&self) -> Option<Shape> {
        let coordinates = |depth, min_positions, rings| {
            Some(Shape {
                depth,
                min_positions,
                rings,
            })
        };

        match self {
            GeometryType::Point => coordinates(0, 0, false),
            GeometryType::MultiPoint => coordinates(1, 0, false),
            GeometryType::LineString => coordinates(1, MIN_LINE_POSITIONS, false),
            GeometryType::MultiLineString => coordinates(2, MIN_LINE_POSITIONS, false),
            GeometryType::Polygon => coordinates(2, MIN_RING_POSITIONS, true),
            GeometryType::MultiPolygon => coordinates(3, MIN_RING_POSITIONS, true),
            GeometryType::GeometryCollection
            | GeometryType::Feature
            | GeometryType::FeatureCollection => None,
        }
    }
}

impl FromStr for GeometryType {
    type Err = FixerTypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GeometryType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| FixerTypesError::UnknownType(s.to_string()))
    }
}

impl Display for GeometryType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
