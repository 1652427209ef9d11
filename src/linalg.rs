//! Transpose and matrix multiplication.

use crate::error::{Result, TransformError};
use crate::types::{Matrix, Shape, empty_matrix};

/// Transpose an `m x n` matrix into an `n x m` matrix.
///
/// A matrix with no rows transposes to the empty `0 x 0` matrix.
pub fn transpose(a: &Matrix) -> Matrix {
    if a.nrows() == 0 {
        return empty_matrix();
    }
    a.transpose()
}

/// Multiply `a` (`m x n`) by `b` (`n x k`).
///
/// Entries are plain sums of products accumulated in index order, with no
/// compensated summation.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    let (m, n) = a.shape();
    let (p, k) = b.shape();
    if n != p {
        return Err(TransformError::DimensionMismatch {
            lhs: Shape::of(a),
            rhs: Shape::of(b),
        });
    }

    let mut c = Matrix::zeros(m, k);
    for i in 0..m {
        for j in 0..k {
            let mut sum = 0.0;
            for t in 0..n {
                sum += a[(i, t)] * b[(t, j)];
            }
            c[(i, j)] = sum;
        }
    }
    Ok(c)
}
