//! Validation and repair of `Feature`, `FeatureCollection` and `GeometryCollection` objects.
//!
//! Generic schema checks do not model the recursive structure of these containers, so they are validated here member
//! by member, and their nested geometries go back through [`GeometryFixer::fix`].
//!
//! The containers treat unfixable geometries differently:
//! * a `Feature` is never dropped, its geometry is replaced with an empty object;
//! * a `FeatureCollection` drops the features whose geometry could not be fixed;
//! * a `GeometryCollection` drops unfixable geometries and skips `null` entries.

use geojson::{JsonObject, JsonValue};
use geojson_fixer_types::GeometryType;

use crate::error::ValidationError;
use crate::fixer::{FixOutcome, GeometryFixer};

/// Result of fixing a single feature.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum FeatureFix {
    /// The geometry is valid, was repaired, or is `null`.
    Kept(JsonObject),
    /// The geometry could not be fixed and was replaced with an empty object.
    Blanked(JsonObject),
}

impl FeatureFix {
    fn into_object(self) -> JsonObject {
        match self {
            FeatureFix::Kept(feature) | FeatureFix::Blanked(feature) => feature,
        }
    }
}

/// Fixes a container object of the given type.
pub(crate) fn fix_container(
    fixer: &GeometryFixer,
    object: JsonObject,
    geometry_type: GeometryType,
) -> Result<JsonObject, ValidationError> {
    match geometry_type {
        GeometryType::Feature => fix_standalone_feature(fixer, object),
        GeometryType::FeatureCollection => fix_feature_collection(fixer, object),
        GeometryType::GeometryCollection => fix_geometry_collection(fixer, object),
        other => Err(ValidationError::InvalidType(format!(
            "{other} is not a container type"
        ))),
    }
}

pub(crate) fn fix_feature(
    fixer: &GeometryFixer,
    mut feature: JsonObject,
) -> Result<FeatureFix, ValidationError> {
    if !feature.contains_key("geometry") {
        return Err(ValidationError::MissingGeometry);
    }
    if !feature.contains_key("properties") {
        return Err(ValidationError::MissingProperties);
    }
    if !feature.contains_key("type") {
        return Err(ValidationError::MissingType);
    }

    let geometry = match feature.remove("geometry") {
        Some(JsonValue::Null) | None => {
            feature.insert("geometry".into(), JsonValue::Null);
            return Ok(FeatureFix::Kept(feature));
        }
        Some(geometry) => geometry,
    };

    match fixer.fix(geometry)? {
        FixOutcome::Fixed(geometry) => {
            feature.insert("geometry".into(), geometry);
            Ok(FeatureFix::Kept(feature))
        }
        FixOutcome::Unfixable(reason) => {
            log::debug!(
                "Feature geometry cannot be fixed ({reason}), replacing it with an empty object"
            );
            feature.insert("geometry".into(), JsonValue::Object(JsonObject::new()));
            Ok(FeatureFix::Blanked(feature))
        }
    }
}

pub(crate) fn fix_standalone_feature(
    fixer: &GeometryFixer,
    feature: JsonObject,
) -> Result<JsonObject, ValidationError> {
    Ok(fix_feature(fixer, feature)?.into_object())
}

pub(crate) fn fix_feature_collection(
    fixer: &GeometryFixer,
    mut collection: JsonObject,
) -> Result<JsonObject, ValidationError> {
    let features = match collection.remove("features") {
        None => return Err(ValidationError::MissingFeatures),
        Some(JsonValue::Array(features)) => features,
        Some(_) => return Err(ValidationError::FeaturesNotArray),
    };

    let mut fixed = Vec::with_capacity(features.len());
    for (index, feature) in features.into_iter().enumerate() {
        let JsonValue::Object(feature) = feature else {
            return Err(ValidationError::InvalidType(format!(
                "feature {index} of a FeatureCollection is not an object"
            )));
        };

        match fix_feature(fixer, feature)? {
            FeatureFix::Kept(feature) => fixed.push(JsonValue::Object(feature)),
            FeatureFix::Blanked(_) => {
                log::debug!(
                    "Dropping feature {index} from FeatureCollection: geometry cannot be fixed"
                );
            }
        }
    }

    collection.insert("features".into(), JsonValue::Array(fixed));
    Ok(collection)
}

pub(crate) fn fix_geometry_collection(
    fixer: &GeometryFixer,
    mut collection: JsonObject,
) -> Result<JsonObject, ValidationError> {
    let geometries = match collection.remove("geometries") {
        None => return Err(ValidationError::MissingGeometries),
        Some(JsonValue::Array(geometries)) => geometries,
        Some(_) => return Err(ValidationError::GeometriesNotArray),
    };

    let mut fixed = Vec::with_capacity(geometries.len());
    for (index, geometry) in geometries.into_iter().enumerate() {
        if geometry.is_null() {
            continue;
        }

        match fixer.fix(geometry)? {
            FixOutcome::Fixed(geometry) => fixed.push(geometry),
            FixOutcome::Unfixable(reason) => {
                log::debug!("Dropping geometry {index} from GeometryCollection ({reason})");
            }
        }
    }

    collection.insert("geometries".into(), JsonValue::Array(fixed));
    Ok(collection)
}
