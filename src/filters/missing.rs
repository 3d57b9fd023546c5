//! filters::missing — missing-aware reductions used inside windows.
//!
//! Purpose
//! -------
//! Provide the small set of primitives the filters reduce windows with:
//! detecting and omitting missing values, and computing means, medians,
//! absolute deviations, and the median absolute deviation with explicit
//! propagation rules.
//!
//! Conventions
//! -----------
//! - Missing is represented by `NaN` ([`MISSING`]) and detected with
//!   [`is_missing`], never by equality.
//! - The plain reductions ([`mean`], [`median`]) *propagate*: one missing
//!   member makes the result missing. Callers that want to skip missing
//!   members pass the output of [`omit_missing`].
//! - Reductions over an empty slice return [`MISSING`], not an error.
//! - Infinite values are present data, not missing; they follow IEEE
//!   arithmetic (`mean(&[inf, 1.0])` is `inf`).

/// Distinguished missing value.
pub const MISSING: f64 = f64::NAN;

#[inline]
pub fn is_missing(value: f64) -> bool {
    value.is_nan()
}

/// Copy of `values` with every missing entry dropped, order preserved.
pub fn omit_missing(values: &[f64]) -> Vec<f64> {
    values.iter().copied().filter(|&v| !is_missing(v)).collect()
}

/// Arithmetic mean; missing if `values` is empty or contains a missing entry.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return MISSING;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median; missing if `values` is empty or contains a missing entry.
///
/// Even-length inputs return the average of the two middle order
/// statistics.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() || values.iter().any(|&v| is_missing(v)) {
        return MISSING;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Elementwise `|v - centre|`; missing entries (or a missing centre) stay
/// missing.
pub fn abs_deviations(values: &[f64], centre: f64) -> Vec<f64> {
    values.iter().map(|&v| (v - centre).abs()).collect()
}

/// Unscaled median absolute deviation of `values` around `centre`.
///
/// Propagates like [`median`]: a missing member or a missing centre gives
/// [`MISSING`]. Pass the output of [`omit_missing`] to skip gaps.
pub fn mad(values: &[f64], centre: f64) -> f64 {
    median(&abs_deviations(values, centre))
}
