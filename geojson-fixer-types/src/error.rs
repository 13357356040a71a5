//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixerTypesError {
    /// Geometry conversion error.
    #[error("invalid input geometry: {0}")]
    Conversion(String),
    /// Type tag is not one of the GeoJSON kinds.
    #[error("\"{0}\" is not a valid GeoJSON type")]
    UnknownType(String),
}
