//! Configuration types for applying transforms.
//!
//! These mirror the toggles a visualizer exposes to its user:
//! - whether the transform is applied in linear or homogeneous mode
//! - whether points are 2D or 3D
//! - the weight tolerance used when projecting out of homogeneous form

use std::fmt;

use crate::homogeneous::WEIGHT_TOLERANCE;

/// How a transform matrix is applied to a point set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransformMode {
    /// `d x d` transform applied directly; rotation, scale and shear only.
    #[default]
    Linear,
    /// `(d+1) x (d+1)` transform applied to lifted points, followed by the
    /// perspective divide.
    Homogeneous,
}

impl TransformMode {
    pub fn is_homogeneous(self) -> bool {
        matches!(self, TransformMode::Homogeneous)
    }
}

impl From<bool> for TransformMode {
    fn from(use_homogeneous: bool) -> Self {
        if use_homogeneous {
            TransformMode::Homogeneous
        } else {
            TransformMode::Linear
        }
    }
}

impl fmt::Display for TransformMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformMode::Linear => write!(f, "linear"),
            TransformMode::Homogeneous => write!(f, "homogeneous"),
        }
    }
}

/// Dimensionality of the points being visualized.
///
/// The engine itself is dimension-agnostic; this is only used to pick presets
/// and default inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dimension {
    #[default]
    Two,
    Three,
}

impl Dimension {
    pub fn size(self) -> usize {
        match self {
            Dimension::Two => 2,
            Dimension::Three => 3,
        }
    }
}

/// Settings for a [`TransformEngine`](crate::engine::TransformEngine).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformSettings {
    pub mode: TransformMode,
    /// Tolerance for treating a homogeneous weight as 0 or 1.
    pub weight_tolerance: f64,
}

impl Default for TransformSettings {
    fn default() -> Self {
        Self {
            mode: TransformMode::Linear,
            weight_tolerance: WEIGHT_TOLERANCE,
        }
    }
}

impl TransformSettings {
    pub fn with_mode(mut self, mode: impl Into<TransformMode>) -> Self {
        self.mode = mode.into();
        self
    }

    pub fn with_weight_tolerance(mut self, weight_tolerance: f64) -> Self {
        self.weight_tolerance = weight_tolerance;
        self
    }

    /// Side length of the square transform required for points of dimension `d`.
    pub fn required_transform_size(&self, d: usize) -> usize {
        match self.mode {
            TransformMode::Linear => d,
            TransformMode::Homogeneous => d + 1,
        }
    }
}
