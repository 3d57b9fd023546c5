//! filters::hampel — median/MAD outlier detection and replacement.
//!
//! Purpose
//! -------
//! Detect outliers against a robust local reference and replace them with
//! the local median. For each full window the filter computes the window
//! median `x̃` and the scaled median absolute deviation
//! `MAD = k · median(|window − x̃|)`; the represented value `x_c` is an
//! outlier when `|x_c − x̃| > a · MAD`.
//!
//! Key behaviors
//! -------------
//! - Windowing, warm-up, recentring, tail masking, and the `single` short
//!   circuit are delegated to [`windowed`].
//! - `WindowMiss::All` computes the median over the raw window, so a gap
//!   anywhere in the window makes the slot missing.
//! - `WindowMiss::None` and `WindowMiss::Single` compute both medians over
//!   the present members only.
//! - Non-outliers are returned bit-for-bit unchanged.
//!
//! Invariants & assumptions
//! ------------------------
//! - Any missing operand of the outlier test (`x̃`, `MAD`, or `x_c`) makes
//!   the slot missing; the comparison is never evaluated on `NaN`.
//! - With `MAD = 0` (a locally flat window) any deviation from the median
//!   counts as an outlier.
//!
//! Conventions
//! -----------
//! - `k = 1.4826` makes the MAD a consistent estimator of the standard
//!   deviation under normality; `a = 3` is the classic three-sigma rule.
//!
//! Testing notes
//! -------------
//! - Unit tests cover spike replacement, no-op on clean data, each
//!   missing-value policy, and the flat-window edge case.

use ndarray::Array1;
use tracing::debug;

use crate::filters::{
    errors::FilterResult,
    missing::{MISSING, is_missing, mad, median, omit_missing},
    options::{WindowMiss, WindowSpec},
    validation::validate_hampel_param,
    window::windowed,
};

pub const DEFAULT_A: f64 = 3.0;
pub const DEFAULT_K: f64 = 1.4826;

/// HampelParams — outlier threshold and MAD scale.
///
/// Fields
/// ------
/// - `a`: number of scaled-MAD units beyond which a point is an outlier.
/// - `k`: scale applied to the raw MAD.
///
/// Invariants
/// ----------
/// - Both are finite and non-negative, enforced by [`HampelParams::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HampelParams {
    a: f64,
    k: f64,
}

impl HampelParams {
    pub fn new(a: f64, k: f64) -> FilterResult<Self> {
        validate_hampel_param("a", a)?;
        validate_hampel_param("k", k)?;
        Ok(HampelParams { a, k })
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn k(&self) -> f64 {
        self.k
    }
}

impl Default for HampelParams {
    fn default() -> Self {
        HampelParams { a: DEFAULT_A, k: DEFAULT_K }
    }
}

/// Hampel filter of `x`.
///
/// Parameters
/// ----------
/// - `x`: `&[f64]`
///   Input series; missing values are `NaN`.
/// - `spec`: [`WindowSpec`]
///   Window size (`>= 1`) and recentring flag.
/// - `params`: [`HampelParams`]
///   Threshold `a` and MAD scale `k`.
/// - `miss`: [`WindowMiss`]
///   Missing-value policy.
///
/// Returns
/// -------
/// `FilterResult<Array1<f64>>`
///   An array of length `x.len()` where outliers are replaced by their
///   window median. Arguments are validated when `spec` and `params` are
///   built, so this currently always returns `Ok`.
///
/// Examples
/// --------
/// ```rust
/// # use rust_filters::filters::{hampel, HampelParams, WindowMiss, WindowSpec};
/// let x = [1.0, 1.0, 50.0, 1.0, 1.0];
/// let spec = WindowSpec::new(5, true)?;
/// let s = hampel(&x, spec, HampelParams::default(), WindowMiss::Single)?;
/// assert_eq!(s[2], 1.0);
/// # Ok::<(), rust_filters::filters::FilterError>(())
/// ```
pub fn hampel(
    x: &[f64], spec: WindowSpec, params: HampelParams, miss: WindowMiss,
) -> FilterResult<Array1<f64>> {
    debug!(
        n = x.len(),
        window_size = spec.window_size(),
        recentre = spec.recentre(),
        a = params.a,
        k = params.k,
        miss = %miss,
        "hampel"
    );
    let out = windowed(x, spec, miss, |window, represented| {
        hampel_window(window, represented, params, miss)
    });
    Ok(out)
}

/// Outlier test and replacement for one window.
fn hampel_window(window: &[f64], represented: f64, params: HampelParams, miss: WindowMiss) -> f64 {
    let (centre, raw_mad) = match miss {
        WindowMiss::All => {
            let centre = median(window);
            if is_missing(centre) {
                return MISSING;
            }
            (centre, mad(window, centre))
        }
        WindowMiss::Single | WindowMiss::None => {
            let present = omit_missing(window);
            let centre = median(&present);
            if is_missing(centre) {
                return MISSING;
            }
            (centre, mad(&present, centre))
        }
    };

    let threshold = params.a * (params.k * raw_mad);
    if is_missing(represented) || is_missing(threshold) {
        return MISSING;
    }
    if (represented - centre).abs() > threshold { centre } else { represented }
}
