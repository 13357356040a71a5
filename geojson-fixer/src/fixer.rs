//! See [`GeometryFixer`].

use std::fmt::{Display, Formatter};

use geojson::{Geometry, JsonObject, JsonValue, Value};
use geojson_fixer_types::{GeometryType, Shape};

use crate::composite;
use crate::error::ValidationError;
use crate::repair::{RingRepair, DEFAULT_MIDPOINT_PRECISION};
use crate::rewind::{Rewind, RightHandRewind};
use crate::schema::{SchemaValidator, SchemaViolation, StructuralSchema};
use crate::{closure, winding};

/// Result of a successful [`GeometryFixer::fix`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum FixOutcome {
    /// The value is valid. It is either the input itself or its repaired copy.
    Fixed(JsonValue),
    /// The value is well-formed, but its geometry cannot be corrected.
    Unfixable(UnfixableReason),
}

impl FixOutcome {
    /// Fixed value, or `None` if it is unfixable.
    pub fn into_value(self) -> Option<JsonValue> {
        match self {
            FixOutcome::Fixed(value) => Some(value),
            FixOutcome::Unfixable(_) => None,
        }
    }

    /// Whether the value could not be fixed.
    pub fn is_unfixable(&self) -> bool {
        matches!(self, FixOutcome::Unfixable(_))
    }
}

/// Why a geometry cannot be fixed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnfixableReason {
    /// A polygon ring has less than 3 positions, so no point can be interpolated.
    DegenerateRing,
    /// A line string has less positions than its type requires.
    TooFewPoints,
    /// Rings still violate the right-hand rule after rewinding.
    WindingViolation,
}

impl Display for UnfixableReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let description = match self {
            UnfixableReason::DegenerateRing => "ring with less than 3 positions",
            UnfixableReason::TooFewPoints => "too few positions",
            UnfixableReason::WindingViolation => "winding violates the right-hand rule",
        };
        f.write_str(description)
    }
}

/// Validates GeoJSON objects and repairs them where possible.
///
/// The fixer dispatches on the `type` member of the object:
/// * `Feature`, `FeatureCollection` and `GeometryCollection` are checked member by member, and their nested
///   geometries are fixed recursively;
/// * other geometries are checked with the [`SchemaValidator`]. Polygons with rings that are too short are repaired by
///   interpolating a point into the ring;
/// * `Polygon` and `MultiPolygon` are then checked for ring closure, rewound with the [`Rewind`] normalizer and
///   checked against the right-hand rule.
///
/// ```
/// use geojson_fixer::GeometryFixer;
/// use serde_json::json;
///
/// let fixer = GeometryFixer::default();
/// let outcome = fixer.fix(json!({
///     "type": "LineString",
///     "coordinates": [[0.0, 0.0]],
/// }))?;
/// assert!(outcome.is_unfixable());
/// # Ok::<(), geojson_fixer::ValidationError>(())
/// ```
pub struct GeometryFixer {
    schema: Box<dyn SchemaValidator + Send + Sync>,
    rewind: Box<dyn Rewind + Send + Sync>,
    repair: RingRepair,
}

impl Default for GeometryFixer {
    fn default() -> Self {
        GeometryFixerBuilder::new().build()
    }
}

impl GeometryFixer {
    /// Creates a builder for a fixer with custom collaborators.
    pub fn builder() -> GeometryFixerBuilder {
        GeometryFixerBuilder::new()
    }

    /// Validates and repairs one GeoJSON object.
    ///
    /// Returns an error if the value is malformed in a way that cannot be repaired by guessing, for example a
    /// `FeatureCollection` without `features`, or a polygon ring that is not closed.
    pub fn fix(&self, value: JsonValue) -> Result<FixOutcome, ValidationError> {
        let object = match value {
            JsonValue::Object(object) => object,
            other => {
                return Err(ValidationError::InvalidType(format!(
                    "GeoJSON value must be an object, found {other}"
                )));
            }
        };

        let geometry_type = type_of(&object)?;
        log::trace!("Fixing {geometry_type} object");

        match geometry_type.shape() {
            Some(shape) => self.fix_simple(object, geometry_type, shape),
            None => {
                let fixed = composite::fix_container(self, object, geometry_type)?;
                Ok(FixOutcome::Fixed(JsonValue::Object(fixed)))
            }
        }
    }

    fn fix_simple(
        &self,
        object: JsonObject,
        geometry_type: GeometryType,
        shape: Shape,
    ) -> Result<FixOutcome, ValidationError> {
        let needs_repair = match self.schema.validate(&object, shape) {
            Ok(()) => false,
            Err(SchemaViolation::TooFewRingPoints { found }) => {
                log::trace!("{geometry_type} has a ring with {found} positions, repairing");
                true
            }
            Err(SchemaViolation::TooFewPoints { found, min }) => {
                log::debug!("{geometry_type} has {found} positions where {min} are required");
                return Ok(FixOutcome::Unfixable(UnfixableReason::TooFewPoints));
            }
            Err(SchemaViolation::Malformed(message)) => {
                return Err(ValidationError::InvalidGeometry(message));
            }
        };

        if !needs_repair && !shape.rings {
            return Ok(FixOutcome::Fixed(JsonValue::Object(object)));
        }

        let mut geometry = Geometry::from_json_object(object)?;

        if needs_repair {
            geometry.value = match self.repair.repair_value(geometry.value) {
                Some(value) => value,
                None => {
                    log::debug!("{geometry_type} cannot be repaired by interpolation");
                    return Ok(FixOutcome::Unfixable(UnfixableReason::DegenerateRing));
                }
            };
        }

        if matches!(geometry.value, Value::Polygon(_) | Value::MultiPolygon(_)) {
            closure::check(&geometry.value)?;

            geometry.value = self.rewind.rewind(geometry.value);
            if !winding::is_rhr(&geometry.value)? {
                log::debug!("{geometry_type} violates the right-hand rule after rewinding");
                return Ok(FixOutcome::Unfixable(UnfixableReason::WindingViolation));
            }
        }

        Ok(FixOutcome::Fixed(JsonValue::Object(JsonObject::from(&geometry))))
    }
}

fn type_of(object: &JsonObject) -> Result<GeometryType, ValidationError> {
    let tag = object
        .get("type")
        .and_then(JsonValue::as_str)
        .ok_or_else(|| {
            ValidationError::InvalidType("GeoJSON object must have a string \"type\" member".into())
        })?;

    Ok(tag.parse::<GeometryType>()?)
}

/// Constructor for a [`GeometryFixer`].
///
/// ```
/// use geojson_fixer::GeometryFixerBuilder;
/// use geojson_fixer::rewind::RightHandRewind;
/// use geojson_fixer::schema::StructuralSchema;
///
/// let fixer = GeometryFixerBuilder::new()
///     .with_schema(StructuralSchema)
///     .with_rewind(RightHandRewind)
///     .with_midpoint_precision(8)
///     .build();
/// ```
pub struct GeometryFixerBuilder {
    schema: Option<Box<dyn SchemaValidator + Send + Sync>>,
    rewind: Option<Box<dyn Rewind + Send + Sync>>,
    midpoint_precision: u32,
}

impl Default for GeometryFixerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GeometryFixerBuilder {
    /// Initializes a builder with [`StructuralSchema`], [`RightHandRewind`] and interpolated coordinates rounded to
    /// 6 decimal digits.
    pub fn new() -> Self {
        Self {
            schema: None,
            rewind: None,
            midpoint_precision: DEFAULT_MIDPOINT_PRECISION,
        }
    }

    /// Sets the schema validator used for simple geometries.
    pub fn with_schema(mut self, schema: impl SchemaValidator + Send + Sync + 'static) -> Self {
        self.schema = Some(Box::new(schema));
        self
    }

    /// Sets the winding normalizer applied to polygons before the right-hand rule check.
    pub fn with_rewind(mut self, rewind: impl Rewind + Send + Sync + 'static) -> Self {
        self.rewind = Some(Box::new(rewind));
        self
    }

    /// Sets the number of decimal digits coordinates of interpolated points are rounded to. Values above
    /// [`MAX_MIDPOINT_PRECISION`](crate::repair::MAX_MIDPOINT_PRECISION) are clamped.
    pub fn with_midpoint_precision(mut self, precision: u32) -> Self {
        self.midpoint_precision = precision;
        self
    }

    /// Consumes the builder and creates the fixer.
    pub fn build(self) -> GeometryFixer {
        GeometryFixer {
            schema: self.schema.unwrap_or_else(|| Box::new(StructuralSchema)),
            rewind: self.rewind.unwrap_or_else(|| Box::new(RightHandRewind)),
            repair: RingRepair::new(self.midpoint_precision),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn fix(value: JsonValue) -> Result<FixOutcome, ValidationError> {
        init_logger();
        GeometryFixer::default().fix(value)
    }

    fn fixed(value: JsonValue) -> JsonValue {
        match fix(value) {
            Ok(FixOutcome::Fixed(value)) => value,
            other => panic!("expected a fixed value, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_types() {
        assert_eq!(
            fix(json!({"type": "Circle", "coordinates": [0, 0]})),
            Err(ValidationError::InvalidType(
                "\"Circle\" is not a valid GeoJSON type".into()
            ))
        );
        assert_matches!(
            fix(json!({"coordinates": [0, 0]})),
            Err(ValidationError::InvalidType(_))
        );
        assert_matches!(fix(json!([0, 0])), Err(ValidationError::InvalidType(_)));
    }

    #[test]
    fn valid_simple_geometries_are_unchanged() {
        for value in [
            json!({"type": "Point", "coordinates": [30, 10]}),
            json!({"type": "MultiPoint", "coordinates": [[10, 40], [40, 30, 5]]}),
            json!({"type": "LineString", "coordinates": [[30, 10], [10, 30], [40, 40]]}),
            json!({
                "type": "MultiLineString",
                "coordinates": [[[10, 10], [20, 20]], [[40, 40], [30, 30]]]
            }),
        ] {
            assert_eq!(fix(value.clone()), Ok(FixOutcome::Fixed(value)));
        }
    }

    #[test]
    fn malformed_geometry_is_an_error() {
        assert_matches!(
            fix(json!({"type": "LineString", "coordinates": [[0, 0], [1, "x"]]})),
            Err(ValidationError::InvalidGeometry(_))
        );
        assert_matches!(
            fix(json!({"type": "Polygon"})),
            Err(ValidationError::InvalidGeometry(_))
        );
    }

    #[test]
    fn short_line_string_is_unfixable() {
        assert_eq!(
            fix(json!({"type": "LineString", "coordinates": [[0, 0]]})),
            Ok(FixOutcome::Unfixable(UnfixableReason::TooFewPoints))
        );
    }

    #[test]
    fn rhr_polygon_passes() {
        let polygon = json!({
            "type": "Polygon",
            "coordinates": [
                [[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0], [0.0, 0.0]],
                [[2.0, 2.0], [2.0, 4.0], [4.0, 4.0], [4.0, 2.0], [2.0, 2.0]]
            ]
        });
        assert_eq!(fixed(polygon.clone()), polygon);
    }

    #[test]
    fn clockwise_exterior_is_rewound() {
        let polygon = json!({
            "type": "Polygon",
            "coordinates": [[[0.0, 0.0], [0.0, 10.0], [10.0, 10.0], [10.0, 0.0], [0.0, 0.0]]]
        });
        assert_eq!(
            fixed(polygon),
            json!({
                "type": "Polygon",
                "coordinates": [[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0], [0.0, 0.0]]]
            })
        );
    }

    #[test]
    fn foreign_members_are_preserved() {
        let polygon = json!({
            "type": "Polygon",
            "bbox": [0.0, 0.0, 10.0, 10.0],
            "name": "square",
            "coordinates": [[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0], [0.0, 0.0]]]
        });
        assert_eq!(fixed(polygon.clone()), polygon);
    }

    #[test]
    fn degenerate_ring_is_interpolated_and_rewound() {
        let polygon = json!({
            "type": "Polygon",
            "coordinates": [[[0, 0], [2, 2], [0, 0]]]
        });
        assert_eq!(
            fixed(polygon),
            json!({
                "type": "Polygon",
                "coordinates": [[[0.0, 0.0], [2.0, 2.0], [1.0, 1.0], [0.0, 0.0]]]
            })
        );
    }

    #[test]
    fn flat_degenerate_ring_fails_winding_check() {
        // The interpolated ring [[0, 0], [0.5, 0], [1, 0], [0, 0]] has zero excess in both directions.
        assert_eq!(
            fix(json!({"type": "Polygon", "coordinates": [[[0, 0], [1, 0], [0, 0]]]})),
            Ok(FixOutcome::Unfixable(UnfixableReason::WindingViolation))
        );
    }

    #[test]
    fn two_point_ring_is_unfixable() {
        assert_eq!(
            fix(json!({"type": "Polygon", "coordinates": [[[0, 0], [1, 1]]]})),
            Ok(FixOutcome::Unfixable(UnfixableReason::DegenerateRing))
        );
    }

    #[test]
    fn open_polygon_is_an_error() {
        assert_eq!(
            fix(json!({
                "type": "Polygon",
                "coordinates": [[[0, 0], [1, 0], [0, 1], [1, 1]]]
            })),
            Err(ValidationError::PolygonNotClosed)
        );
    }

    #[test]
    fn open_degenerate_ring_is_an_error() {
        assert_eq!(
            fix(json!({"type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1]]]})),
            Err(ValidationError::PolygonNotClosed)
        );
    }

    #[test]
    fn multi_polygon_is_checked() {
        assert_eq!(
            fix(json!({
                "type": "MultiPolygon",
                "coordinates": [
                    [[[0, 0], [1, 0], [1, 1], [0, 0]]],
                    [[[5, 5], [6, 5], [6, 6], [5, 6]]]
                ]
            })),
            Err(ValidationError::PolygonNotClosed)
        );

        assert_eq!(
            fixed(json!({
                "type": "MultiPolygon",
                "coordinates": [
                    [[[0, 0], [1, 1], [1, 0], [0, 0]]],
                    [[[5, 5], [7, 7], [5, 5]]]
                ]
            })),
            json!({
                "type": "MultiPolygon",
                "coordinates": [
                    [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]],
                    [[[5.0, 5.0], [7.0, 7.0], [6.0, 6.0], [5.0, 5.0]]]
                ]
            })
        );
    }

    #[test]
    fn feature_with_unfixable_geometry_is_blanked() {
        let feature = json!({
            "type": "Feature",
            "properties": {"name": "road"},
            "geometry": {"type": "LineString", "coordinates": [[0, 0]]}
        });
        assert_eq!(
            fixed(feature),
            json!({
                "type": "Feature",
                "properties": {"name": "road"},
                "geometry": {}
            })
        );
    }

    #[test]
    fn feature_geometry_is_repaired() {
        let feature = json!({
            "type": "Feature",
            "id": 7,
            "properties": null,
            "geometry": {"type": "Polygon", "coordinates": [[[0, 0], [2, 2], [0, 0]]]}
        });
        assert_eq!(
            fixed(feature)["geometry"]["coordinates"],
            json!([[[0.0, 0.0], [2.0, 2.0], [1.0, 1.0], [0.0, 0.0]]])
        );
    }

    #[test]
    fn feature_errors_propagate() {
        assert_eq!(
            fix(json!({
                "type": "Feature",
                "properties": {},
                "geometry": {"type": "Polygon", "coordinates": [[[0, 0], [1, 0], [0, 1], [1, 1]]]}
            })),
            Err(ValidationError::PolygonNotClosed)
        );
    }

    #[test]
    fn feature_collection_drops_unfixable_feature() {
        let valid = json!({
            "type": "Feature",
            "properties": {"id": 1},
            "geometry": {"type": "Point", "coordinates": [1, 2]}
        });
        let collection = json!({
            "type": "FeatureCollection",
            "features": [
                valid.clone(),
                {
                    "type": "Feature",
                    "properties": {"id": 2},
                    "geometry": {"type": "Polygon", "coordinates": [[[0, 0], [1, 1]]]}
                }
            ]
        });

        let fixed = fixed(collection);
        assert_eq!(fixed["features"], json!([valid]));
    }

    #[test]
    fn feature_collection_keeps_order() {
        let feature = |id: u32, geometry: JsonValue| {
            json!({"type": "Feature", "properties": {"id": id}, "geometry": geometry})
        };
        let collection = json!({
            "type": "FeatureCollection",
            "features": [
                feature(1, json!({"type": "Point", "coordinates": [0, 0]})),
                feature(2, json!({"type": "LineString", "coordinates": []})),
                feature(3, JsonValue::Null),
                feature(4, json!({"type": "MultiPoint", "coordinates": [[1, 1]]})),
                feature(5, json!({"type": "Polygon", "coordinates": [[[0, 0], [1, 0], [0, 0]]]})),
            ]
        });

        let fixed = fixed(collection);
        let ids: Vec<_> = fixed["features"]
            .as_array()
            .expect("features")
            .iter()
            .map(|f| f["properties"]["id"].as_u64().expect("id"))
            .collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn feature_collection_structure_errors() {
        assert_eq!(
            fix(json!({"type": "FeatureCollection"})),
            Err(ValidationError::MissingFeatures)
        );
        assert_eq!(
            fix(json!({"type": "FeatureCollection", "features": null})),
            Err(ValidationError::FeaturesNotArray)
        );
    }

    #[test]
    fn nested_geometry_collections() {
        let collection = json!({
            "type": "GeometryCollection",
            "geometries": [
                {
                    "type": "GeometryCollection",
                    "geometries": [
                        null,
                        {"type": "Polygon", "coordinates": [[[0, 0], [1, 1]]]},
                        {"type": "Point", "coordinates": [3, 3]}
                    ]
                },
                {"type": "LineString", "coordinates": [[0, 0]]}
            ]
        });

        assert_eq!(
            fixed(collection),
            json!({
                "type": "GeometryCollection",
                "geometries": [
                    {
                        "type": "GeometryCollection",
                        "geometries": [{"type": "Point", "coordinates": [3, 3]}]
                    }
                ]
            })
        );
    }

    #[test]
    fn geometry_collection_structure_errors() {
        assert_eq!(
            fix(json!({"type": "GeometryCollection"})),
            Err(ValidationError::MissingGeometries)
        );
        assert_eq!(
            fix(json!({"type": "GeometryCollection", "geometries": {"type": "Point"}})),
            Err(ValidationError::GeometriesNotArray)
        );
    }

    #[test]
    fn fixer_is_shareable_between_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GeometryFixer>();
    }

    struct AcceptAll;

    impl SchemaValidator for AcceptAll {
        fn validate(&self, _geometry: &JsonObject, _shape: Shape) -> Result<(), SchemaViolation> {
            Ok(())
        }
    }

    struct KeepWinding;

    impl Rewind for KeepWinding {
        fn rewind(&self, value: Value) -> Value {
            value
        }
    }

    #[test]
    fn custom_rewind() {
        init_logger();
        let fixer = GeometryFixer::builder().with_rewind(KeepWinding).build();
        let clockwise = json!({
            "type": "Polygon",
            "coordinates": [[[0, 0], [0, 10], [10, 10], [10, 0], [0, 0]]]
        });

        assert_eq!(
            fixer.fix(clockwise),
            Ok(FixOutcome::Unfixable(UnfixableReason::WindingViolation))
        );
    }

    #[test]
    fn custom_schema() {
        init_logger();
        let fixer = GeometryFixer::builder().with_schema(AcceptAll).build();
        let line = json!({"type": "LineString", "coordinates": [[0, 0]]});

        assert_eq!(fixer.fix(line.clone()), Ok(FixOutcome::Fixed(line)));
    }

    #[test]
    fn custom_precision() {
        init_logger();
        let fixer = GeometryFixer::builder().with_midpoint_precision(1).build();
        let outcome = fixer.fix(json!({
            "type": "Polygon",
            "coordinates": [[[0, 0], [0.5, 0.5], [0, 0]]]
        }));

        assert_eq!(
            outcome.map(FixOutcome::into_value),
            Ok(Some(json!({
                "type": "Polygon",
                "coordinates": [[[0.0, 0.0], [0.5, 0.5], [0.2, 0.2], [0.0, 0.0]]]
            })))
        );
    }

    #[test]
    fn oversized_precision_is_clamped() {
        init_logger();
        let fixer = GeometryFixer::builder().with_midpoint_precision(400).build();
        let outcome = fixer.fix(json!({
            "type": "Polygon",
            "coordinates": [[[1, 1], [2, 2], [1, 1]]]
        }));

        assert_eq!(
            outcome.map(FixOutcome::into_value),
            Ok(Some(json!({
                "type": "Polygon",
                "coordinates": [[[1.0, 1.0], [2.0, 2.0], [1.5, 1.5], [1.0, 1.0]]]
            })))
        );
    }
}
