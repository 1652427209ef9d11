#![allow(clippy::useless_conversion)]

use pyo3::{
    exceptions::PyValueError,
    prelude::*,
    types::{PyDict, PyList},
    wrap_pyfunction,
};

use crate::{
    api::apply_transform_with_settings,
    engine::point_set_from_rows,
    homogeneous,
    parser,
    presets::{Axis, Preset},
    settings::{Dimension, TransformMode, TransformSettings},
    types::Matrix,
};

fn value_error(err: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn matrix_from_python(obj: &Bound<'_, PyAny>) -> PyResult<Matrix> {
    if let Ok(text) = obj.extract::<String>() {
        return parser::parse_matrix(&text).map_err(value_error);
    }
    let rows: Vec<Vec<f64>> = obj.extract()?;
    parser::matrix_from_rows(&rows).map_err(value_error)
}

fn points_from_python(obj: &Bound<'_, PyAny>) -> PyResult<Matrix> {
    if let Ok(text) = obj.extract::<String>() {
        return parser::parse_matrix(&text).map_err(value_error);
    }
    let rows: Vec<Vec<f64>> = obj.extract()?;
    point_set_from_rows(&rows).map_err(value_error)
}

fn matrix_to_python<'py>(py: Python<'py>, matrix: &Matrix) -> Bound<'py, PyList> {
    let rows: Vec<Vec<f64>> = matrix
        .row_iter()
        .map(|row| row.iter().copied().collect::<Vec<f64>>())
        .collect();
    PyList::new_bound(py, rows)
}

fn parse_axis(axis: &str) -> PyResult<Axis> {
    match axis {
        "x" | "X" => Ok(Axis::X),
        "y" | "Y" => Ok(Axis::Y),
        "z" | "Z" => Ok(Axis::Z),
        other => Err(PyValueError::new_err(format!("unknown axis {other:?}"))),
    }
}

fn parse_dimension(dimension: usize) -> PyResult<Dimension> {
    match dimension {
        2 => Ok(Dimension::Two),
        3 => Ok(Dimension::Three),
        other => Err(PyValueError::new_err(format!(
            "dimension must be 2 or 3, got {other}"
        ))),
    }
}

#[pyfunction]
pub fn parse_matrix<'py>(py: Python<'py>, text: &str) -> PyResult<Bound<'py, PyList>> {
    let matrix = parser::parse_matrix(text).map_err(value_error)?;
    Ok(matrix_to_python(py, &matrix))
}

/// Apply a transform; `points` and `transform` may be text or lists of rows.
#[pyfunction(signature = (points, transform, use_homogeneous=false, weight_tolerance=None))]
pub fn apply_transform(
    points: Bound<'_, PyAny>,
    transform: Bound<'_, PyAny>,
    use_homogeneous: bool,
    weight_tolerance: Option<f64>,
) -> PyResult<Py<PyDict>> {
    let py = points.py();
    let points = points_from_python(&points)?;
    let transform = matrix_from_python(&transform)?;

    let mut settings = TransformSettings::default().with_mode(use_homogeneous);
    if let Some(tolerance) = weight_tolerance {
        settings = settings.with_weight_tolerance(tolerance);
    }
    let output =
        apply_transform_with_settings(&points, &transform, &settings).map_err(value_error)?;

    let out = PyDict::new_bound(py);
    out.set_item("points", matrix_to_python(py, &output.points))?;
    out.set_item("transformed", matrix_to_python(py, &output.transformed))?;
    Ok(out.unbind())
}

#[pyfunction]
pub fn to_homogeneous<'py>(
    points: Bound<'py, PyAny>,
) -> PyResult<Bound<'py, PyList>> {
    let matrix = points_from_python(&points)?;
    Ok(matrix_to_python(points.py(), &homogeneous::to_homogeneous(&matrix)))
}

#[pyfunction]
pub fn from_homogeneous<'py>(
    points: Bound<'py, PyAny>,
) -> PyResult<Bound<'py, PyList>> {
    let matrix = points_from_python(&points)?;
    Ok(matrix_to_python(points.py(), &homogeneous::from_homogeneous(&matrix)))
}

/// Build a preset transform by name: `rotation`, `scale`, `translation` or `shear`.
#[allow(clippy::too_many_arguments)]
#[pyfunction(signature = (
    kind,
    dimension=2,
    use_homogeneous=false,
    degrees=0.0,
    axis="z",
    x=1.0,
    y=1.0,
    z=1.0,
))]
pub fn preset<'py>(
    py: Python<'py>,
    kind: &str,
    dimension: usize,
    use_homogeneous: bool,
    degrees: f64,
    axis: &str,
    x: f64,
    y: f64,
    z: f64,
) -> PyResult<Bound<'py, PyList>> {
    let preset = match kind {
        "rotation" => Preset::Rotation {
            axis: parse_axis(axis)?,
            degrees,
        },
        "scale" => Preset::Scale {
            sx: x,
            sy: y,
            sz: z,
        },
        "translation" => Preset::Translation {
            tx: x,
            ty: y,
            tz: z,
        },
        "shear" => Preset::Shear { shx: x, shy: y },
        other => return Err(PyValueError::new_err(format!("unknown preset {other:?}"))),
    };
    let matrix = preset.matrix(
        parse_dimension(dimension)?,
        TransformMode::from(use_homogeneous),
    );
    Ok(matrix_to_python(py, &matrix))
}

#[pymodule]
fn _xform_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("WEIGHT_TOLERANCE", homogeneous::WEIGHT_TOLERANCE)?;

    m.add_function(wrap_pyfunction!(parse_matrix, m)?)?;
    m.add_function(wrap_pyfunction!(apply_transform, m)?)?;
    m.add_function(wrap_pyfunction!(to_homogeneous, m)?)?;
    m.add_function(wrap_pyfunction!(from_homogeneous, m)?)?;
    m.add_function(wrap_pyfunction!(preset, m)?)?;
    Ok(())
}
