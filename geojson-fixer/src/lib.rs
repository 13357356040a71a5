//! Repair engine for malformed GeoJSON.
//!
//! Third-party geographic data often comes with geometries that do not follow the GeoJSON rules: polygon rings that
//! are too short, rings wound in the wrong direction, features with broken geometries inside otherwise good
//! collections. [`GeometryFixer`] takes one GeoJSON object and either returns a corrected copy of it, reports that it
//! cannot be corrected, or returns a [`ValidationError`] when the input is malformed beyond guessing.
//!
//! ```
//! use geojson_fixer::{FixOutcome, GeometryFixer};
//! use serde_json::json;
//!
//! let fixer = GeometryFixer::default();
//! let outcome = fixer.fix(json!({
//!     "type": "Polygon",
//!     "coordinates": [[[0, 0], [0, 10], [10, 10], [10, 0], [0, 0]]],
//! }))?;
//!
//! assert_eq!(
//!     outcome,
//!     FixOutcome::Fixed(json!({
//!         "type": "Polygon",
//!         "coordinates": [[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0], [0.0, 0.0]]],
//!     }))
//! );
//! # Ok::<(), geojson_fixer::ValidationError>(())
//! ```
//!
//! # What gets repaired
//!
//! * Polygon rings of 3 positions get a point interpolated between the first two positions.
//! * Polygon rings are rewound to the right-hand rule: exterior rings counterclockwise, holes clockwise.
//! * A `Feature` with an unfixable geometry keeps its properties, but its geometry is replaced with `{}`.
//! * Features with unfixable geometries are dropped from a `FeatureCollection`.
//! * Unfixable geometries and `null` entries are dropped from a `GeometryCollection`.
//!
//! Everything else that does not match the structure of its type is reported as a [`ValidationError`].

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod closure;
mod composite;
pub mod error;
mod fixer;
pub mod repair;
pub mod rewind;
pub mod schema;
pub mod winding;

pub use error::{ValidationError, ValidationErrorKind};
pub use fixer::{FixOutcome, GeometryFixer, GeometryFixerBuilder, UnfixableReason};
pub use geojson_fixer_types;

/// Fixes the value with a [`GeometryFixer`] using the default configuration.
pub fn fix_geojson(value: geojson::JsonValue) -> Result<FixOutcome, ValidationError> {
    GeometryFixer::default().fix(value)
}
