//! Ready-made transforms and default inputs.
//!
//! Angles are in degrees. Linear presets are `d x d`; [`lift_linear`] embeds
//! them into the `(d+1) x (d+1)` form homogeneous mode needs. Translation only
//! exists in homogeneous form.

use nalgebra::DVector;

use crate::settings::{Dimension, TransformMode};
use crate::types::Matrix;

/// Coordinate axis for 3D rotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    X,
    Y,
    #[default]
    Z,
}

/// 2D rotation by `degrees` counter-clockwise.
pub fn rotation_2d(degrees: f64) -> Matrix {
    let (s, c) = degrees.to_radians().sin_cos();
    Matrix::from_row_slice(2, 2, &[c, -s, s, c])
}

/// 3D rotation by `degrees` about `axis`.
pub fn rotation_3d(axis: Axis, degrees: f64) -> Matrix {
    let (s, c) = degrees.to_radians().sin_cos();
    #[rustfmt::skip]
    let m = match axis {
        Axis::X => [
            1.0, 0.0, 0.0,
            0.0, c, -s,
            0.0, s, c,
        ],
        Axis::Y => [
            c, 0.0, s,
            0.0, 1.0, 0.0,
            -s, 0.0, c,
        ],
        Axis::Z => [
            c, -s, 0.0,
            s, c, 0.0,
            0.0, 0.0, 1.0,
        ],
    };
    Matrix::from_row_slice(3, 3, &m)
}

pub fn scale_2d(sx: f64, sy: f64) -> Matrix {
    Matrix::from_diagonal(&DVector::from_vec(vec![sx, sy]))
}

pub fn scale_3d(sx: f64, sy: f64, sz: f64) -> Matrix {
    Matrix::from_diagonal(&DVector::from_vec(vec![sx, sy, sz]))
}

/// Shear where `x += shx * y` and `y += shy * x`.
pub fn shear_2d(shx: f64, shy: f64) -> Matrix {
    Matrix::from_row_slice(2, 2, &[1.0, shx, shy, 1.0])
}

/// [`shear_2d`] applied to the XY plane, leaving Z untouched.
pub fn shear_3d(shx: f64, shy: f64) -> Matrix {
    lift_linear(&shear_2d(shx, shy))
}

/// Homogeneous 2D translation (`3 x 3`).
pub fn translation_2d(tx: f64, ty: f64) -> Matrix {
    translation(&[tx, ty])
}

/// Homogeneous 3D translation (`4 x 4`).
pub fn translation_3d(tx: f64, ty: f64, tz: f64) -> Matrix {
    translation(&[tx, ty, tz])
}

fn translation(offsets: &[f64]) -> Matrix {
    let d = offsets.len();
    let mut m = Matrix::identity(d + 1, d + 1);
    for (i, &t) in offsets.iter().enumerate() {
        m[(i, d)] = t;
    }
    m
}

/// Embed a `d x d` linear map into a `(d+1) x (d+1)` homogeneous transform.
///
/// The map occupies the top-left block; the last row and column are those of
/// the identity.
pub fn lift_linear(linear: &Matrix) -> Matrix {
    let d = linear.nrows().max(linear.ncols());
    let mut m = Matrix::identity(d + 1, d + 1);
    m.view_mut((0, 0), linear.shape()).copy_from(linear);
    m
}

/// A preset transform as offered by the visualizer's preset buttons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Preset {
    /// Rotation in degrees. `axis` is ignored in 2D.
    Rotation { axis: Axis, degrees: f64 },
    /// Per-axis scale. `sz` is ignored in 2D.
    Scale { sx: f64, sy: f64, sz: f64 },
    /// Per-axis offset. `tz` is ignored in 2D.
    Translation { tx: f64, ty: f64, tz: f64 },
    /// Shear of the XY plane.
    Shear { shx: f64, shy: f64 },
}

impl Preset {
    /// Build the transform matrix sized for `dimension` and `mode`.
    ///
    /// Translation cannot be expressed in linear mode and yields the identity
    /// there.
    pub fn matrix(&self, dimension: Dimension, mode: TransformMode) -> Matrix {
        let d = dimension.size();
        let linear = match (*self, dimension) {
            (Preset::Rotation { degrees, .. }, Dimension::Two) => rotation_2d(degrees),
            (Preset::Rotation { axis, degrees }, Dimension::Three) => rotation_3d(axis, degrees),
            (Preset::Scale { sx, sy, .. }, Dimension::Two) => scale_2d(sx, sy),
            (Preset::Scale { sx, sy, sz }, Dimension::Three) => scale_3d(sx, sy, sz),
            (Preset::Shear { shx, shy }, Dimension::Two) => shear_2d(shx, shy),
            (Preset::Shear { shx, shy }, Dimension::Three) => shear_3d(shx, shy),
            (Preset::Translation { tx, ty, tz }, _) => {
                return match (mode, dimension) {
                    (TransformMode::Linear, _) => Matrix::identity(d, d),
                    (TransformMode::Homogeneous, Dimension::Two) => translation_2d(tx, ty),
                    (TransformMode::Homogeneous, Dimension::Three) => {
                        translation_3d(tx, ty, tz)
                    }
                };
            }
        };

        match mode {
            TransformMode::Linear => linear,
            TransformMode::Homogeneous => lift_linear(&linear),
        }
    }
}

/// Default point set: the unit square in 2D, the unit cube in 3D.
pub fn default_points(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Two => "-1 -1\n1 -1\n1 1\n-1 1",
        Dimension::Three => {
            "-1 -1 -1\n1 -1 -1\n1 1 -1\n-1 1 -1\n-1 -1 1\n1 -1 1\n1 1 1\n-1 1 1"
        }
    }
}

/// Default transform: the identity in linear mode, a small translation in
/// homogeneous mode.
pub fn default_transform(dimension: Dimension, mode: TransformMode) -> &'static str {
    match (dimension, mode) {
        (Dimension::Two, TransformMode::Linear) => "1 0\n0 1",
        (Dimension::Two, TransformMode::Homogeneous) => "1 0 1.2\n0 1 0.4\n0 0 1",
        (Dimension::Three, TransformMode::Linear) => "1 0 0\n0 1 0\n0 0 1",
        (Dimension::Three, TransformMode::Homogeneous) => {
            "1 0 0 0.8\n0 1 0 0.4\n0 0 1 0.2\n0 0 0 1"
        }
    }
}
