//! Error types for parsing and transforming point sets.
//!
//! All failures are local input-validation errors. They are raised where they
//! are detected and never carry partial results.

use thiserror::Error;

use crate::settings::TransformMode;
use crate::types::Shape;

/// Errors raised while turning text or raw rows into a matrix.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A token could not be read as a number.
    #[error("non-numeric value {token:?} in row {row}")]
    NonNumeric { row: usize, token: String },

    /// A row does not have the width of the first row.
    #[error("inconsistent row length: row {row} has {found} values, expected {expected}")]
    InconsistentRowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Errors raised by the linear algebra and transform operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Inner dimensions of a matrix product do not agree.
    #[error("dimension mismatch: ({lhs}) * ({rhs})")]
    DimensionMismatch { lhs: Shape, rhs: Shape },

    /// Points in a set do not all share the same dimension.
    #[error("all points must have the same dimension: point {index} has {found}, expected {expected}")]
    Dimension {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// Transform matrix size does not match the mode and point dimension.
    #[error("for {mode} mode, transform must be {required}x{required} (got {found})")]
    Shape {
        mode: TransformMode,
        required: usize,
        found: Shape,
    },
}

pub type Result<T> = std::result::Result<T, TransformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_errors_name_their_cause() {
        let err = ParseError::NonNumeric {
            row: 1,
            token: "abc".to_string(),
        };
        assert!(err.to_string().starts_with("non-numeric value"));

        let err = ParseError::InconsistentRowLength {
            row: 1,
            expected: 2,
            found: 3,
        };
        assert!(err.to_string().starts_with("inconsistent row length"));
    }

    #[test]
    fn shape_error_names_required_size() {
        let err = TransformError::Shape {
            mode: TransformMode::Homogeneous,
            required: 3,
            found: Shape::new(2, 2),
        };
        assert_eq!(
            err.to_string(),
            "for homogeneous mode, transform must be 3x3 (got 2x2)"
        );
    }

    #[test]
    fn parse_error_converts_transparently() {
        let parse = ParseError::InconsistentRowLength {
            row: 1,
            expected: 2,
            found: 3,
        };
        let err: TransformError = parse.clone().into();
        assert_eq!(err.to_string(), parse.to_string());
    }
}
