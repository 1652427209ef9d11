//! High-level entry point for presentation layers.
//!
//! A visualizer hands over the contents of its two text fields (or arrays it
//! already holds) plus the homogeneous-mode flag, and gets back the original
//! and transformed point sets or a single error to display.

use tracing::{debug, warn};

use crate::engine::{TransformEngine, point_set_from_rows};
use crate::error::{Result, TransformError};
use crate::parser::{matrix_from_rows, parse_matrix};
use crate::settings::TransformSettings;
use crate::types::{Matrix, PointSet, Shape, empty_matrix};

/// Where a matrix argument comes from.
#[derive(Debug, Clone, Copy)]
pub enum MatrixSource<'a> {
    /// Free-form delimited text, see [`parse_matrix`].
    Text(&'a str),
    /// Numeric rows that may still be ragged.
    Rows(&'a [Vec<f64>]),
    /// An already rectangular matrix.
    Matrix(&'a Matrix),
}

impl<'a> From<&'a str> for MatrixSource<'a> {
    fn from(text: &'a str) -> Self {
        MatrixSource::Text(text)
    }
}

impl<'a> From<&'a String> for MatrixSource<'a> {
    fn from(text: &'a String) -> Self {
        MatrixSource::Text(text.as_str())
    }
}

impl<'a> From<&'a [Vec<f64>]> for MatrixSource<'a> {
    fn from(rows: &'a [Vec<f64>]) -> Self {
        MatrixSource::Rows(rows)
    }
}

impl<'a> From<&'a Vec<Vec<f64>>> for MatrixSource<'a> {
    fn from(rows: &'a Vec<Vec<f64>>) -> Self {
        MatrixSource::Rows(rows.as_slice())
    }
}

impl<'a> From<&'a Matrix> for MatrixSource<'a> {
    fn from(matrix: &'a Matrix) -> Self {
        MatrixSource::Matrix(matrix)
    }
}

impl MatrixSource<'_> {
    /// Resolve into a point set. Ragged rows are reported as a dimension error.
    fn into_points(self) -> Result<PointSet> {
        match self {
            MatrixSource::Text(text) => Ok(parse_matrix(text)?),
            MatrixSource::Rows(rows) => point_set_from_rows(rows),
            MatrixSource::Matrix(m) => Ok(m.clone()),
        }
    }

    /// Resolve into a transform matrix. Ragged rows are reported as a parse error.
    fn into_transform(self) -> Result<Matrix> {
        match self {
            MatrixSource::Text(text) => Ok(parse_matrix(text)?),
            MatrixSource::Rows(rows) => Ok(matrix_from_rows(rows)?),
            MatrixSource::Matrix(m) => Ok(m.clone()),
        }
    }
}

/// Original and transformed point sets, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformOutput {
    pub points: PointSet,
    pub transformed: PointSet,
}

impl TransformOutput {
    /// The output a presentation layer shows after an error.
    pub fn empty() -> Self {
        Self {
            points: empty_matrix(),
            transformed: empty_matrix(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.nrows() == 0
    }
}

/// Parse or accept the points and transform, then apply the transform.
///
/// # Arguments
/// * `points` - Point set as text, raw rows or a matrix (N x d)
/// * `transform` - Transform as text, raw rows or a matrix
/// * `use_homogeneous` - Homogeneous mode, needing a `(d+1) x (d+1)` transform
///   instead of `d x d`
///
/// # Returns
/// `TransformOutput` with the parsed points and the transformed points (N x d),
/// or the first parse, dimension or shape error.
///
/// ```
/// use xform::apply_transform;
///
/// let out = apply_transform("1 1", "1 0 2; 0 1 3; 0 0 1", true).unwrap();
/// assert_eq!(out.transformed[(0, 0)], 3.0);
/// assert_eq!(out.transformed[(0, 1)], 4.0);
/// ```
pub fn apply_transform<'p, 't>(
    points: impl Into<MatrixSource<'p>>,
    transform: impl Into<MatrixSource<'t>>,
    use_homogeneous: bool,
) -> Result<TransformOutput> {
    let settings = TransformSettings::default().with_mode(use_homogeneous);
    apply_transform_with_settings(points, transform, &settings)
}

/// [`apply_transform`] with explicit settings.
///
/// # Arguments
/// * `points` - Point set as text, raw rows or a matrix (N x d)
/// * `transform` - Transform as text, raw rows or a matrix
/// * `settings` - Mode and weight tolerance to apply with
///
/// # Returns
/// `TransformOutput` with the parsed points and the transformed points (N x d).
pub fn apply_transform_with_settings<'p, 't>(
    points: impl Into<MatrixSource<'p>>,
    transform: impl Into<MatrixSource<'t>>,
    settings: &TransformSettings,
) -> Result<TransformOutput> {
    let points = points.into().into_points()?;
    let transform = transform.into().into_transform()?;
    debug!(
        points = %Shape::of(&points),
        transform = %Shape::of(&transform),
        mode = %settings.mode,
        "applying transform"
    );

    let transformed = TransformEngine::new(*settings).apply(&points, &transform)?;
    Ok(TransformOutput {
        points,
        transformed,
    })
}

/// Apply a transform, substituting empty results on failure.
///
/// This is the policy a visualizer uses to keep rendering in a valid state:
/// the error is handed back for display alongside an empty output.
pub fn apply_transform_or_empty<'p, 't>(
    points: impl Into<MatrixSource<'p>>,
    transform: impl Into<MatrixSource<'t>>,
    use_homogeneous: bool,
) -> (TransformOutput, Option<TransformError>) {
    match apply_transform(points, transform, use_homogeneous) {
        Ok(output) => (output, None),
        Err(err) => {
            warn!(error = %err, "transform failed, showing empty result");
            (TransformOutput::empty(), Some(err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;

    #[test]
    fn text_inputs_are_parsed() {
        let out = apply_transform("1 0", "0 -1\n1 0", false).unwrap();
        assert_eq!(out.points, Matrix::from_row_slice(1, 2, &[1.0, 0.0]));
        assert_eq!(out.transformed, Matrix::from_row_slice(1, 2, &[0.0, 1.0]));
    }

    #[test]
    fn row_inputs_are_accepted() {
        let points = vec![vec![1.0, 1.0]];
        let transform = vec![
            vec![1.0, 0.0, 2.0],
            vec![0.0, 1.0, 3.0],
            vec![0.0, 0.0, 1.0],
        ];
        let out = apply_transform(&points, &transform, true).unwrap();
        assert_eq!(out.transformed, Matrix::from_row_slice(1, 2, &[3.0, 4.0]));
    }

    #[test]
    fn ragged_point_rows_are_a_dimension_error() {
        let points = vec![vec![1.0, 1.0], vec![1.0]];
        let identity = Matrix::identity(2, 2);
        let err = apply_transform(&points, &identity, false).unwrap_err();
        assert!(matches!(err, TransformError::Dimension { index: 1, .. }));
    }

    #[test]
    fn ragged_transform_rows_are_a_parse_error() {
        let transform = vec![vec![1.0, 0.0], vec![0.0]];
        let err = apply_transform("1 1", &transform, false).unwrap_err();
        assert!(matches!(
            err,
            TransformError::Parse(ParseError::InconsistentRowLength { .. })
        ));
    }

    #[test]
    fn transform_parse_errors_surface_even_with_empty_points() {
        let err = apply_transform("", "1 x", false).unwrap_err();
        assert!(matches!(
            err,
            TransformError::Parse(ParseError::NonNumeric { .. })
        ));
    }

    #[test]
    fn empty_points_give_empty_output() {
        let out = apply_transform("", "1 0\n0 1", true).unwrap();
        assert!(out.is_empty());
        assert_eq!(out.transformed.nrows(), 0);
    }

    #[test]
    fn separator_only_rows_are_zero_width_points() {
        let out = apply_transform(",", "", false).unwrap();
        assert_eq!(out.points.shape(), (1, 0));
        assert_eq!(out.transformed.shape(), (1, 0));

        let out = apply_transform(",\n,", "2", true).unwrap();
        assert_eq!(out.transformed.shape(), (2, 0));
    }

    #[test]
    fn failures_fall_back_to_empty_output() {
        let (out, err) = apply_transform_or_empty("1 2\n3 4 5", "1 0\n0 1", false);
        assert_eq!(out, TransformOutput::empty());
        assert!(err.unwrap().to_string().contains("inconsistent row length"));

        let (out, err) = apply_transform_or_empty("1 2", "1 0\n0 1", false);
        assert!(err.is_none());
        assert_eq!(out.transformed, Matrix::from_row_slice(1, 2, &[1.0, 2.0]));
    }

    #[test]
    fn settings_tolerance_is_honoured() {
        let settings = TransformSettings::default()
            .with_mode(true)
            .with_weight_tolerance(0.5);
        // Weight becomes 1.25, inside the widened band around 1.
        let out =
            apply_transform_with_settings("4 8", "1 0 0\n0 1 0\n0 0 1.25", &settings).unwrap();
        assert_eq!(out.transformed, Matrix::from_row_slice(1, 2, &[4.0, 8.0]));
    }
}
