//! filters::ema — exponential moving average with gap-recovery policies.
//!
//! Purpose
//! -------
//! Smooth a series with the recursion `s_t = α·x_t + (1 − α)·s_{t−1}` and
//! define how the recursion behaves across missing inputs.
//!
//! Key behaviors
//! -------------
//! - `s_0 = x_0` unconditionally; a missing first value seeds a missing
//!   state.
//! - The state advances only on present inputs. Missing inputs never
//!   overwrite it, so `carry_interpolate` repeats the same value across a
//!   whole gap.
//! - Under `reset`, the first present value after a missing one restarts
//!   the recursion from the raw value.
//!
//! Invariants & assumptions
//! ------------------------
//! - Output length equals input length; empty input gives empty output.
//! - `alpha` must be finite; it is not clamped to `[0, 1]`.

use ndarray::Array1;
use tracing::debug;

use crate::filters::{
    errors::FilterResult,
    missing::{MISSING, is_missing},
    options::EmaMiss,
    validation::validate_alpha,
};

/// Exponential moving average of `x`.
///
/// Parameters
/// ----------
/// - `x`: `&[f64]`
///   Input series; missing values are `NaN`.
/// - `alpha`: `f64`
///   Weight on the newest observation. Must be finite.
/// - `miss`: [`EmaMiss`]
///   Gap-recovery policy.
///
/// Returns
/// -------
/// `FilterResult<Array1<f64>>`
///   - `Ok(s)` with `s.len() == x.len()`.
///   - `Err(FilterError::InvalidAlpha)` when `alpha` is not finite.
///
/// Examples
/// --------
/// ```rust
/// # use rust_filters::filters::{ema, EmaMiss};
/// let s = ema(&[1.0, f64::NAN, 3.0], 0.5, EmaMiss::Carry)?;
/// assert_eq!(s[0], 1.0);
/// assert!(s[1].is_nan());
/// assert_eq!(s[2], 2.0);
/// # Ok::<(), rust_filters::filters::FilterError>(())
/// ```
pub fn ema(x: &[f64], alpha: f64, miss: EmaMiss) -> FilterResult<Array1<f64>> {
    validate_alpha(alpha)?;
    debug!(n = x.len(), alpha, miss = %miss, "ema");

    let n = x.len();
    let mut out = Array1::from_elem(n, MISSING);
    let Some(&first) = x.first() else {
        return Ok(out);
    };

    out[0] = first;
    let mut state = first;
    for i in 1..n {
        if is_missing(x[i]) {
            if miss == EmaMiss::CarryInterpolate {
                out[i] = state;
            }
            continue;
        }
        out[i] = if miss == EmaMiss::Reset && is_missing(x[i - 1]) {
            x[i]
        } else {
            alpha * x[i] + (1.0 - alpha) * state
        };
        state = out[i];
    }
    Ok(out)
}
