//! Core shared types.
//!
//! Every matrix handled by the crate is a dynamically sized `nalgebra` matrix
//! of `f64`. Points are stored one per row, so a point set of `n` points in
//! `d` dimensions is an `n x d` matrix.

use std::fmt;

use nalgebra::DMatrix;

/// Dynamic row-oriented matrix of `f64`.
///
/// A matrix with zero rows is the empty matrix. It is a valid value, distinct
/// from a parse failure.
pub type Matrix = DMatrix<f64>;

/// Ordered set of points, one point per row.
pub type PointSet = Matrix;

/// Build the canonical empty matrix (`0 x 0`).
pub fn empty_matrix() -> Matrix {
    Matrix::zeros(0, 0)
}

/// Dimensions of a matrix, used as error context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn of(matrix: &Matrix) -> Self {
        Self::new(matrix.nrows(), matrix.ncols())
    }

    pub fn is_square(&self, size: usize) -> bool {
        self.rows == size && self.cols == size
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
