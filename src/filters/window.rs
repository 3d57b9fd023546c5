//! filters::window — shared windowed reduction for `sma` and `hampel`.
//!
//! Purpose
//! -------
//! Own the index arithmetic common to every trailing-window filter in this
//! crate: warm-up masking, recentring, the right-hand tail exposed by
//! recentring, and the `single` missing-value short circuit. Filters plug in
//! only the per-window reduction.
//!
//! Key behaviors
//! -------------
//! - For each right endpoint `i` with a full window behind it, the output
//!   slot `i - shift` receives `reduce(&x[i - w + 1..=i], x[i - shift])`.
//! - Slots before the first full window, and the last `shift` slots, are
//!   missing.
//! - Under [`WindowMiss::Single`], a slot whose represented value is missing
//!   is left missing without calling `reduce`.
//! - Series of length 0 or 1 yield an all-missing output of the same length.
//!
//! Invariants & assumptions
//! ------------------------
//! - The output always has `x.len()` entries.
//! - `reduce` sees a slice of exactly `window_size` entries, which may
//!   contain missing values under `all` and `none`; handling those is the
//!   reducer's job.

use ndarray::Array1;
use tracing::warn;

use crate::filters::{
    missing::{MISSING, is_missing},
    options::{WindowMiss, WindowSpec},
};

/// Apply `reduce` to every full trailing window of `x`.
///
/// Parameters
/// ----------
/// - `x`: `&[f64]`
///   Input series; missing values are `NaN`.
/// - `spec`: [`WindowSpec`]
///   Window size and recentring flag.
/// - `miss`: [`WindowMiss`]
///   Only `Single` is acted on here; the other policies are the reducer's
///   concern.
/// - `reduce`: `FnMut(&[f64], f64) -> f64`
///   Receives the window and the value represented by the output slot
///   (the window centre when recentring, the right endpoint otherwise).
///
/// Returns
/// -------
/// `Array1<f64>` of length `x.len()`.
pub fn windowed<F>(x: &[f64], spec: WindowSpec, miss: WindowMiss, mut reduce: F) -> Array1<f64>
where
    F: FnMut(&[f64], f64) -> f64,
{
    let n = x.len();
    let mut out = Array1::from_elem(n, MISSING);
    if n <= 1 {
        return out;
    }

    let window_size = spec.window_size();
    let shift = spec.shift();
    if window_size > n {
        warn!(n, window_size, "window is longer than the series; every output is missing");
        return out;
    }

    for i in shift.max(window_size - 1)..n {
        let slot = i - shift;
        let represented = x[slot];
        if miss == WindowMiss::Single && is_missing(represented) {
            continue;
        }
        out[slot] = reduce(&x[i + 1 - window_size..=i], represented);
    }
    out
}
