//! # xform - point transforms with homogeneous coordinates
//!
//! `xform` is the numeric core of a transform visualizer: it turns free-form
//! text into matrices, applies a transform matrix to a set of points in linear
//! or homogeneous mode, and hands back the transformed points. Rendering, UI
//! state and scene management live with the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use xform::apply_transform;
//!
//! // Rotate the point (1, 0) by 90 degrees.
//! let out = apply_transform("1 0", "0 -1\n1 0", false).unwrap();
//! assert!((out.transformed[(0, 0)] - 0.0).abs() < 1e-9);
//! assert!((out.transformed[(0, 1)] - 1.0).abs() < 1e-9);
//!
//! // Translate (1, 1) by (2, 3) with a homogeneous 3x3 transform.
//! let out = apply_transform("1 1", "1 0 2; 0 1 3; 0 0 1", true).unwrap();
//! assert_eq!(out.transformed[(0, 0)], 3.0);
//! assert_eq!(out.transformed[(0, 1)], 4.0);
//! ```
//!
//! ## Conventions
//!
//! Points are row vectors: a set of `n` points in `d` dimensions is an
//! `n x d` [`Matrix`](types::Matrix). A transform `T` is applied to every
//! point at once as `(T · Pᵗ)ᵗ`, which is the same as `T · p` for each column
//! vector `p`.
//!
//! In homogeneous mode points are lifted by appending a weight of `1`, the
//! `(d+1) x (d+1)` transform is applied, and the result is projected back by
//! dividing by the weight. Weights within
//! [`WEIGHT_TOLERANCE`](homogeneous::WEIGHT_TOLERANCE) of `0` or `1` are not
//! divided by.
//!
//! ## Building blocks
//!
//! ```rust
//! use xform::{homogeneous, linalg, parser};
//!
//! let points = parser::parse_matrix("1 2\n3 4").unwrap();
//! let lifted = homogeneous::to_homogeneous(&points);
//! assert_eq!(lifted.ncols(), 3);
//! assert_eq!(homogeneous::from_homogeneous(&lifted), points);
//!
//! let product = linalg::multiply(&points, &linalg::transpose(&points)).unwrap();
//! assert_eq!(product[(0, 1)], 11.0);
//! ```
//!
//! ## Modules
//!
//! - **[`api`](api)**: the single entry point used by presentation layers
//! - **[`engine`](engine)**: shape validation and transform application
//! - **[`parser`](parser)**: text to matrix conversion and back
//! - **[`linalg`](linalg)**: transpose and multiplication
//! - **[`homogeneous`](homogeneous)**: lifting and projecting points
//! - **[`presets`](presets)**: rotation, scale, translation and shear matrices
//! - **[`settings`](settings)**: mode, dimension and tolerance configuration

pub mod api;
pub mod engine;
pub mod error;
pub mod homogeneous;
pub mod linalg;
pub mod parser;
pub mod presets;
pub mod settings;
pub mod types;

#[cfg(feature = "python")]
pub mod python;

// Re-export high-level API
pub use api::{
    MatrixSource, TransformOutput, apply_transform, apply_transform_or_empty,
    apply_transform_with_settings,
};

pub use engine::TransformEngine;
pub use error::{ParseError, TransformError};
pub use settings::{Dimension, TransformMode, TransformSettings};
pub use types::{Matrix, PointSet, Shape};
