//! Vocabulary shared by the GeoJSON repair engine: the nine GeoJSON kinds with their expected shapes, borrowed
//! views over positions and rings, and the orientation algorithms used to check ring winding.

pub mod contour;
pub use contour::Ring;

pub mod error;

pub mod geometry_type;
pub use geometry_type::{GeometryType, Shape};

pub mod orient;
pub use orient::Winding;

pub mod point;
pub use point::{GeoJsonPoint, GeoPoint};

pub mod segment;
pub use segment::Segment;
