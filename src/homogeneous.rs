//! Conversion between Cartesian and homogeneous coordinates.
//!
//! A point of dimension `d` is lifted to `d + 1` by appending a weight of
//! exactly `1`. Projecting back divides the leading coordinates by the weight,
//! except when the weight is within [`WEIGHT_TOLERANCE`] of `0` or `1`. In
//! both of those cases the leading coordinates are returned as they are, so a
//! point at infinity (`w ≈ 0`) is not projected.

use crate::types::Matrix;

/// Tolerance for treating a homogeneous weight as `0` or `1`.
pub const WEIGHT_TOLERANCE: f64 = 1e-12;

/// Append a trailing weight of `1` to every point.
pub fn to_homogeneous(points: &Matrix) -> Matrix {
    let n = points.nrows();
    if n == 0 {
        return Matrix::zeros(0, 0);
    }
    let d = points.ncols();
    Matrix::from_fn(n, d + 1, |i, j| if j < d { points[(i, j)] } else { 1.0 })
}

/// Project homogeneous points back to Cartesian form using [`WEIGHT_TOLERANCE`].
pub fn from_homogeneous(points: &Matrix) -> Matrix {
    from_homogeneous_with_tolerance(points, WEIGHT_TOLERANCE)
}

/// Project homogeneous points back to Cartesian form.
///
/// The last column of `points` is the weight `w`. Leading coordinates are
/// divided by `w` only when `|w| > tolerance` and `|w - 1| > tolerance`.
pub fn from_homogeneous_with_tolerance(points: &Matrix, tolerance: f64) -> Matrix {
    let n = points.nrows();
    if n == 0 {
        return Matrix::zeros(0, 0);
    }
    let Some(d) = points.ncols().checked_sub(1) else {
        return Matrix::zeros(n, 0);
    };

    let mut out = points.columns(0, d).into_owned();
    for i in 0..n {
        let w = points[(i, d)];
        if needs_divide(w, tolerance) {
            for j in 0..d {
                out[(i, j)] /= w;
            }
        }
    }
    out
}

fn needs_divide(w: f64, tolerance: f64) -> bool {
    w.abs() > tolerance && (w - 1.0).abs() > tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Matrix {
        Matrix::from_row_slice(3, 2, &[-1.0, -1.0, 0.5, 2.0, 1e9, -3.25])
    }

    #[test]
    fn lifting_appends_unit_weight() {
        let h = to_homogeneous(&sample_points());
        assert_eq!(h.shape(), (3, 3));
        assert!(h.column(2).iter().all(|&w| w == 1.0));
        assert_eq!(h.columns(0, 2).into_owned(), sample_points());
    }

    #[test]
    fn round_trip_is_exact() {
        let p = sample_points();
        assert_eq!(from_homogeneous(&to_homogeneous(&p)), p);
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(to_homogeneous(&Matrix::zeros(0, 2)).nrows(), 0);
        assert_eq!(from_homogeneous(&Matrix::zeros(0, 3)).nrows(), 0);
    }

    #[test]
    fn perspective_divide_applies_for_general_weight() {
        let h = Matrix::from_row_slice(1, 3, &[4.0, -6.0, 2.0]);
        assert_eq!(from_homogeneous(&h), Matrix::from_row_slice(1, 2, &[2.0, -3.0]));
    }

    #[test]
    fn weight_near_zero_is_not_divided() {
        let below = Matrix::from_row_slice(1, 3, &[4.0, 6.0, 1e-13]);
        assert_eq!(from_homogeneous(&below), Matrix::from_row_slice(1, 2, &[4.0, 6.0]));

        let above = Matrix::from_row_slice(1, 3, &[4.0, 6.0, 1e-11]);
        let projected = from_homogeneous(&above);
        assert!((projected[(0, 0)] - 4e11).abs() < 1.0);
        assert!((projected[(0, 1)] - 6e11).abs() < 1.0);
    }

    #[test]
    fn weight_near_one_is_not_divided() {
        let h = Matrix::from_row_slice(1, 3, &[4.0, 6.0, 1.0 + 1e-13]);
        assert_eq!(from_homogeneous(&h), Matrix::from_row_slice(1, 2, &[4.0, 6.0]));
    }

    #[test]
    fn negative_weight_flips_sign() {
        let h = Matrix::from_row_slice(1, 4, &[1.0, 2.0, 3.0, -1.0]);
        assert_eq!(
            from_homogeneous(&h),
            Matrix::from_row_slice(1, 3, &[-1.0, -2.0, -3.0])
        );
    }

    #[test]
    fn custom_tolerance_widens_the_skip_band() {
        let h = Matrix::from_row_slice(1, 2, &[5.0, 1.001]);
        assert_eq!(from_homogeneous_with_tolerance(&h, 1e-2)[(0, 0)], 5.0);
        assert!(from_homogeneous(&h)[(0, 0)] < 5.0);
    }
}
