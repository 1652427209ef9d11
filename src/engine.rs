//! Applying a transform matrix to a point set.
//!
//! Points are row vectors, so a transform `T` is applied to every point at once
//! as `(T · Pᵗ)ᵗ`. In homogeneous mode the points are lifted before the product
//! and projected back afterwards.

use crate::error::{Result, TransformError};
use crate::homogeneous::{from_homogeneous_with_tolerance, to_homogeneous};
use crate::linalg::{multiply, transpose};
use crate::parser::matrix_from_rows;
use crate::settings::{TransformMode, TransformSettings};
use crate::types::{Matrix, PointSet, Shape, empty_matrix};

/// Applies transform matrices to point sets according to its settings.
///
/// The engine holds no state besides its settings and can be shared freely
/// between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransformEngine {
    settings: TransformSettings,
}

impl TransformEngine {
    pub fn new(settings: TransformSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &TransformSettings {
        &self.settings
    }

    pub fn mode(&self) -> TransformMode {
        self.settings.mode
    }

    /// Check that `transform` is the square size this engine's mode needs for
    /// points of dimension `d`.
    pub fn validate_transform(&self, d: usize, transform: &Matrix) -> Result<()> {
        let required = self.settings.required_transform_size(d);
        let found = Shape::of(transform);
        if !found.is_square(required) {
            return Err(TransformError::Shape {
                mode: self.settings.mode,
                required,
                found,
            });
        }
        Ok(())
    }

    /// Apply `transform` to every point in `points`.
    ///
    /// An empty point set is returned as-is without looking at the transform.
    /// The result has the same number of points, in the same order, and the
    /// same dimension as the input.
    pub fn apply(&self, points: &PointSet, transform: &Matrix) -> Result<PointSet> {
        if points.nrows() == 0 {
            return Ok(empty_matrix());
        }

        let d = points.ncols();
        self.validate_transform(d, transform)?;
        if d == 0 {
            return Ok(Matrix::zeros(points.nrows(), 0));
        }

        match self.settings.mode {
            TransformMode::Linear => {
                let columns = transpose(points);
                Ok(transpose(&multiply(transform, &columns)?))
            }
            TransformMode::Homogeneous => {
                let columns = transpose(&to_homogeneous(points));
                let lifted = transpose(&multiply(transform, &columns)?);
                Ok(from_homogeneous_with_tolerance(
                    &lifted,
                    self.settings.weight_tolerance,
                ))
            }
        }
    }

    /// Apply `transform` to points given as raw rows.
    pub fn apply_rows(&self, points: &[Vec<f64>], transform: &Matrix) -> Result<PointSet> {
        self.apply(&point_set_from_rows(points)?, transform)
    }
}

/// Build a point set from raw rows, checking that every point has the
/// dimension of the first one.
pub fn point_set_from_rows(points: &[Vec<f64>]) -> Result<PointSet> {
    if let Some(first) = points.first() {
        let expected = first.len();
        if let Some((index, p)) = points.iter().enumerate().find(|(_, p)| p.len() != expected) {
            return Err(TransformError::Dimension {
                index,
                expected,
                found: p.len(),
            });
        }
    }
    Ok(matrix_from_rows(points)?)
}

/// Apply `transform` to `points` with default settings in the given mode.
pub fn apply(points: &PointSet, transform: &Matrix, use_homogeneous: bool) -> Result<PointSet> {
    TransformEngine::new(TransformSettings::default().with_mode(use_homogeneous))
        .apply(points, transform)
}
