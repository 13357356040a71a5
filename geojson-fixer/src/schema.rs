//! Structural schema check of simple geometries.
//!
//! The engine does not interpret schema failures by their text. A [`SchemaValidator`] classifies every failure into a
//! [`SchemaViolation`], and the fixer dispatches on that classification.

use geojson::{JsonObject, JsonValue};
use geojson_fixer_types::Shape;
use thiserror::Error;

/// Reason a geometry does not match the shape of its type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaViolation {
    /// A polygon ring has less positions than a valid closed ring needs.
    #[error("ring must have length greater than or equal to 4, found {found}")]
    TooFewRingPoints {
        /// Length of the first ring that is too short.
        found: usize,
    },
    /// A line string has less positions than its type requires.
    #[error("must have length greater than or equal to {min}, found {found}")]
    TooFewPoints {
        /// Length of the first sequence that is too short.
        found: usize,
        /// Required length.
        min: usize,
    },
    /// The value does not have the structure of its type at all.
    #[error("{0}")]
    Malformed(String),
}

/// Checks a simple geometry object against the shape of its type.
pub trait SchemaValidator {
    /// Validates the `coordinates` of the `geometry` object against `shape`.
    fn validate(&self, geometry: &JsonObject, shape: Shape) -> Result<(), SchemaViolation>;
}

impl<T: SchemaValidator + ?Sized> SchemaValidator for Box<T> {
    fn validate(&self, geometry: &JsonObject, shape: Shape) -> Result<(), SchemaViolation> {
        (**self).validate(geometry, shape)
    }
}

/// Default schema validator.
///
/// Checks that `coordinates` are nested arrays of the right depth, that every position is an array of at least two
/// numbers, and that every innermost sequence has the minimum length required by the type. Structural problems are
/// reported before length problems, so a length violation means the value can be parsed.
#[derive(Debug, Default, Copy, Clone)]
pub struct StructuralSchema;

impl SchemaValidator for StructuralSchema {
    fn validate(&self, geometry: &JsonObject, shape: Shape) -> Result<(), SchemaViolation> {
        let Shape {
            depth,
            min_positions,
            rings,
        } = shape;

        let coordinates = geometry
            .get("coordinates")
            .ok_or_else(|| SchemaViolation::Malformed("missing \"coordinates\" member".into()))?;

        check_structure(coordinates, depth)?;

        let mut sequences = vec![];
        innermost_sequences(coordinates, depth, &mut sequences);

        match sequences.into_iter().find(|len| *len < min_positions) {
            None => Ok(()),
            Some(found) if rings => Err(SchemaViolation::TooFewRingPoints { found }),
            Some(found) => Err(SchemaViolation::TooFewPoints {
                found,
                min: min_positions,
            }),
        }
    }
}

fn check_structure(value: &JsonValue, depth: usize) -> Result<(), SchemaViolation> {
    if depth == 0 {
        return check_position(value);
    }

    let JsonValue::Array(items) = value else {
        return Err(SchemaViolation::Malformed(format!(
            "expected an array of nesting depth {depth}, found {value}"
        )));
    };

    items
        .iter()
        .try_for_each(|item| check_structure(item, depth - 1))
}

fn check_position(value: &JsonValue) -> Result<(), SchemaViolation> {
    match value {
        JsonValue::Array(axes) if axes.len() >= 2 && axes.iter().all(JsonValue::is_number) => {
            Ok(())
        }
        _ => Err(SchemaViolation::Malformed(format!(
            "position must be an array of at least 2 numbers, found {value}"
        ))),
    }
}

fn innermost_sequences(value: &JsonValue, depth: usize, out: &mut Vec<usize>) {
    let JsonValue::Array(items) = value else {
        return;
    };

    match depth {
        0 => {}
        1 => out.push(items.len()),
        _ => items
            .iter()
            .for_each(|item| innermost_sequences(item, depth - 1, out)),
    }
}
