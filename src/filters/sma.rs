//! filters::sma — simple moving average over a trailing window.
//!
//! Purpose
//! -------
//! Smooth a series with the arithmetic mean of each full trailing window,
//! optionally recentred so the average lines up with the window centre
//! instead of lagging behind it.
//!
//! Key behaviors
//! -------------
//! - Windowing, warm-up, recentring, and tail masking are delegated to
//!   [`windowed`].
//! - `WindowMiss::All` averages the raw window, so one missing member makes
//!   the slot missing.
//! - `WindowMiss::None` and `WindowMiss::Single` average the present
//!   members only; a window with none present gives a missing slot.
//!
//! Testing notes
//! -------------
//! - Unit tests pin the warm-up layout, each missing-value policy, and the
//!   recentred tail on small hand-computed series.

use ndarray::Array1;
use tracing::debug;

use crate::filters::{
    errors::FilterResult,
    missing::{mean, omit_missing},
    options::{WindowMiss, WindowSpec},
    window::windowed,
};

/// Simple moving average of `x`.
///
/// Parameters
/// ----------
/// - `x`: `&[f64]`
///   Input series; missing values are `NaN`.
/// - `spec`: [`WindowSpec`]
///   Window size (`>= 1`) and recentring flag.
/// - `miss`: [`WindowMiss`]
///   Missing-value policy.
///
/// Returns
/// -------
/// `FilterResult<Array1<f64>>`
///   An array of length `x.len()`. Arguments are validated when `spec` and
///   `miss` are built, so this currently always returns `Ok`.
///
/// Examples
/// --------
/// ```rust
/// # use rust_filters::filters::{sma, WindowMiss, WindowSpec};
/// let spec = WindowSpec::new(3, false)?;
/// let s = sma(&[1.0, 2.0, 3.0, 4.0, 5.0], spec, WindowMiss::Single)?;
/// assert!(s[0].is_nan() && s[1].is_nan());
/// assert_eq!(s[2], 2.0);
/// # Ok::<(), rust_filters::filters::FilterError>(())
/// ```
pub fn sma(x: &[f64], spec: WindowSpec, miss: WindowMiss) -> FilterResult<Array1<f64>> {
    debug!(
        n = x.len(),
        window_size = spec.window_size(),
        recentre = spec.recentre(),
        miss = %miss,
        "sma"
    );
    let out = windowed(x, spec, miss, |window, _| match miss {
        WindowMiss::All => mean(window),
        WindowMiss::Single | WindowMiss::None => mean(&omit_missing(window)),
    });
    Ok(out)
}
