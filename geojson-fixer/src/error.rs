//! Error types used by the crate.

use geojson_fixer_types::error::FixerTypesError;
use thiserror::Error;

/// Input that the engine refuses to repair because it is malformed in a way that cannot be guessed at.
///
/// This is different from [`FixOutcome::Unfixable`](crate::FixOutcome::Unfixable), which means that the value is
/// well-formed but could not be corrected geometrically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The `type` member is missing or is not one of the nine GeoJSON kinds.
    #[error("{0}")]
    InvalidType(String),
    /// FeatureCollection without `features`.
    #[error("A FeatureCollection must have a \"features\" property.")]
    MissingFeatures,
    /// FeatureCollection with `features` that is not an array.
    #[error("A FeatureCollection's \"features\" property must be an array.")]
    FeaturesNotArray,
    /// GeometryCollection without `geometries`.
    #[error("A GeometryCollection must have a \"geometries\" property.")]
    MissingGeometries,
    /// GeometryCollection with `geometries` that is not an array.
    #[error("A GeometryCollection's \"geometries\" property must be an array.")]
    GeometriesNotArray,
    /// Feature without `geometry`.
    #[error("A Feature must have a \"geometry\" property.")]
    MissingGeometry,
    /// Feature without `properties`.
    #[error("A Feature must have a \"properties\" property.")]
    MissingProperties,
    /// Feature without `type`.
    #[error("A Feature must have a \"type\" property.")]
    MissingType,
    /// First and last positions of a ring differ.
    #[error("A Polygon's first and last points must be equivalent.")]
    PolygonNotClosed,
    /// Coordinates of a simple geometry do not have the structure of its type.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
}

/// Kind of a [`ValidationError`], without the message.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// See [`ValidationError::InvalidType`].
    InvalidType,
    /// See [`ValidationError::MissingFeatures`].
    MissingFeatures,
    /// See [`ValidationError::FeaturesNotArray`].
    FeaturesNotArray,
    /// See [`ValidationError::MissingGeometries`].
    MissingGeometries,
    /// See [`ValidationError::GeometriesNotArray`].
    GeometriesNotArray,
    /// See [`ValidationError::MissingGeometry`].
    MissingGeometry,
    /// See [`ValidationError::MissingProperties`].
    MissingProperties,
    /// See [`ValidationError::MissingType`].
    MissingType,
    /// See [`ValidationError::PolygonNotClosed`].
    PolygonNotClosed,
    /// See [`ValidationError::InvalidGeometry`].
    InvalidGeometry,
}

impl ValidationErrorKind {
    /// Stable machine readable code of the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationErrorKind::InvalidType => "not_valid_type",
            ValidationErrorKind::MissingFeatures => "missing_features",
            ValidationErrorKind::FeaturesNotArray => "features_not_array",
            ValidationErrorKind::MissingGeometries => "missing_geometries",
            ValidationErrorKind::GeometriesNotArray => "geometries_not_array",
            ValidationErrorKind::MissingGeometry => "missing_geometry",
            ValidationErrorKind::MissingProperties => "missing_properties",
            ValidationErrorKind::MissingType => "missing_type",
            ValidationErrorKind::PolygonNotClosed => "polygon_not_closed",
            ValidationErrorKind::InvalidGeometry => "invalid_geometry",
        }
    }
}

impl ValidationError {
    /// Kind of the error.
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            ValidationError::InvalidType(_) => ValidationErrorKind::InvalidType,
            ValidationError::MissingFeatures => ValidationErrorKind::MissingFeatures,
            ValidationError::FeaturesNotArray => ValidationErrorKind::FeaturesNotArray,
            ValidationError::MissingGeometries => ValidationErrorKind::MissingGeometries,
            ValidationError::GeometriesNotArray => ValidationErrorKind::GeometriesNotArray,
            ValidationError::MissingGeometry => ValidationErrorKind::MissingGeometry,
            ValidationError::MissingProperties => ValidationErrorKind::MissingProperties,
            ValidationError::MissingType => ValidationErrorKind::MissingType,
            ValidationError::PolygonNotClosed => ValidationErrorKind::PolygonNotClosed,
            ValidationError::InvalidGeometry(_) => ValidationErrorKind::InvalidGeometry,
        }
    }

    /// Shorthand for `self.kind().code()`.
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}

impl From<FixerTypesError> for ValidationError {
    fn from(value: FixerTypesError) -> Self {
        match value {
            FixerTypesError::UnknownType(_) => Self::InvalidType(value.to_string()),
            FixerTypesError::Conversion(_) => Self::InvalidGeometry(value.to_string()),
        }
    }
}

impl From<geojson::Error> for ValidationError {
    fn from(value: geojson::Error) -> Self {
        Self::InvalidGeometry(value.to_string())
    }
}
