//! rust_filters — windowed time-series smoothing and outlier filters with
//! Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the three series filters (simple moving average, exponential
//! moving average, Hampel outlier filter) to Python via the `_rust_filters`
//! extension module.
//!
//! Key behaviors
//! -------------
//! - Re-export the core [`filters`] module as the public crate surface.
//! - Define `#[pyfunction]` wrappers and the `#[pymodule]` initializer for
//!   the `_rust_filters` Python extension when `python-bindings` is enabled.
//! - Register the `filters` submodule under `rust_filters` so dotted
//!   imports work from Python.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in [`filters`]; this file performs only FFI
//!   glue, argument parsing, and error mapping.
//! - Python callers pass missing values as `NaN` (numpy / pandas) or `None`
//!   (plain sequences); both reach the filters as `NaN`.
//!
//! Conventions
//! -----------
//! - Python signatures mirror the Rust surface with defaults
//!   `recentre=True`, `miss='single'` (window filters), `miss='reset'`
//!   (EMA), `a=3.0`, `k=1.4826`.
//! - Errors from the core are [`filters::FilterError`] values converted to
//!   `ValueError` at the PyO3 boundary; a bad policy name never produces a
//!   numeric sentinel.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in [`filters`] and by
//!   `tests/integration_filters_pipeline.rs`.
//! - The PyO3 wrappers are exercised by Python-level tests.

pub mod filters;
pub mod utils;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray1};

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    filters::{EmaMiss, HampelParams, WindowMiss, WindowSpec},
    utils::extract_f64_array,
};

/// Borrow the input as a contiguous slice and run `f` on it.
#[cfg(feature = "python-bindings")]
fn with_series<'py, F>(
    py: Python<'py>, x: &Bound<'py, PyAny>, f: F,
) -> PyResult<Bound<'py, PyArray1<f64>>>
where
    F: FnOnce(&[f64]) -> filters::FilterResult<ndarray::Array1<f64>>,
{
    let arr = extract_f64_array(py, x)?;
    let data: &[f64] = arr.as_slice().map_err(|_| {
        PyValueError::new_err("x must be a 1-D contiguous float64 array or sequence")
    })?;
    let out = f(data)?;
    Ok(out.into_pyarray(py))
}

/// sma — simple moving average.
///
/// Python signature: `sma(x, window_size, /, recentre=True, miss='single')`.
///
/// Errors
/// ------
/// - `ValueError` for a `miss` outside `{'single', 'all', 'none'}` or a
///   non-positive `window_size`.
/// - `TypeError` when `x` is not a 1-D float sequence.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "sma",
    signature = (x, window_size, recentre = true, miss = "single"),
    text_signature = "(x, window_size, /, recentre=True, miss='single')"
)]
pub fn py_sma<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, window_size: i64, recentre: bool, miss: &str,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let miss: WindowMiss = miss.parse()?;
    let spec = WindowSpec::new(window_size, recentre)?;
    with_series(py, x, |data| filters::sma(data, spec, miss))
}

/// ema — exponential moving average.
///
/// Python signature: `ema(x, alpha, /, miss='reset')`.
///
/// Errors
/// ------
/// - `ValueError` for a `miss` outside `{'reset', 'carry',
///   'carry_interpolate'}` or a non-finite `alpha`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "ema",
    signature = (x, alpha, miss = "reset"),
    text_signature = "(x, alpha, /, miss='reset')"
)]
pub fn py_ema<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, alpha: f64, miss: &str,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let miss: EmaMiss = miss.parse()?;
    with_series(py, x, |data| filters::ema(data, alpha, miss))
}

/// hampel — Hampel outlier filter.
///
/// Python signature:
/// `hampel(x, window_size, /, a=3.0, k=1.4826, recentre=True, miss='single')`.
///
/// Errors
/// ------
/// - `ValueError` for a bad `miss`, a non-positive `window_size`, or a
///   negative / non-finite `a` or `k`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "hampel",
    signature = (x, window_size, a = 3.0, k = 1.4826, recentre = true, miss = "single"),
    text_signature = "(x, window_size, /, a=3.0, k=1.4826, recentre=True, miss='single')"
)]
pub fn py_hampel<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, window_size: i64, a: f64, k: f64, recentre: bool,
    miss: &str,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let miss: WindowMiss = miss.parse()?;
    let spec = WindowSpec::new(window_size, recentre)?;
    let params = HampelParams::new(a, k)?;
    with_series(py, x, |data| filters::hampel(data, spec, params, miss))
}

/// _rust_filters — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_rust_filters` Python module, create its `filters`
/// submodule holding `sma`, `ema`, and `hampel`, and register the submodule
/// in `sys.modules` so `rust_filters.filters` is importable.
///
/// Errors
/// ------
/// - `PyErr` if creating the submodule or manipulating `sys.modules` fails.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_filters<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let filters_mod = PyModule::new(_py, "filters")?;
    filters_module(_py, m, &filters_mod)?;

    // Manually add the submodule into sys.modules to allow for dot notation.
    _py.import("sys")?.getattr("modules")?.set_item("rust_filters.filters", filters_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn filters_module<'py>(
    _py: Python, rust_filters: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_sma, m)?)?;
    m.add_function(wrap_pyfunction!(py_ema, m)?)?;
    m.add_function(wrap_pyfunction!(py_hampel, m)?)?;
    rust_filters.add_submodule(m)?;
    Ok(())
}
