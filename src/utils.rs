//! utils — Python-boundary helpers for the PyO3 bindings.
//!
//! Everything here is compiled only with the `python-bindings` feature and
//! converts host objects into the contiguous `f64` slices the filters take.

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyTypeError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

/// Extract a 1-D contiguous `float64` view from a Python object.
///
/// Accepted inputs, tried in order:
/// - a contiguous `numpy.ndarray` of `float64` (borrowed, no copy);
/// - anything with `to_numpy()` (e.g. `pandas.Series`), where `NaN` marks
///   missing values;
/// - a plain sequence of floats in which `None` marks a missing value.
///
/// Missing entries come out as `NaN`.
#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method0("to_numpy") {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let values: Vec<Option<f64>> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err(
            "expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64 (None for missing)",
        )
    })?;
    let vec: Vec<f64> = values.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect();
    Ok(vec.into_pyarray(py).readonly())
}
