//! filters — windowed smoothing and outlier filters for time series.
//!
//! Purpose
//! -------
//! Collect the three series-to-series filters of this crate and their shared
//! infrastructure: the simple moving average ([`sma`]), the exponential
//! moving average ([`ema`]), and the Hampel outlier filter ([`hampel`]).
//! Each is a pure function from an input slice plus parameters to a new
//! array of the same length.
//!
//! Key behaviors
//! -------------
//! - Share trailing-window index arithmetic (warm-up, recentring, tail
//!   masking, the `single` policy) through [`window::windowed`], so `sma`
//!   and `hampel` differ only in their per-window reduction.
//! - Treat `NaN` as the missing value and make its propagation explicit in
//!   [`missing`]: plain reductions propagate, `omit_missing` skips.
//! - Report invalid arguments through [`FilterError`] and [`FilterResult`];
//!   missing observations are never errors.
//!
//! Invariants & assumptions
//! ------------------------
//! - `output.len() == input.len()` for every filter and every valid input.
//! - No filter keeps state between calls; identical arguments give
//!   bit-identical output.
//! - Policies and window specs are validated when they are built
//!   (`FromStr`, [`WindowSpec::new`], [`HampelParams::new`]), so a typed
//!   call cannot carry an invalid `miss` value.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use rust_filters::filters::prelude::*;
//!
//!   let spec = WindowSpec::new(5, true)?;
//!   let smooth = sma(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], spec, "none".parse()?)?;
//!   assert_eq!(smooth.len(), 6);
//!   # Ok::<(), FilterError>(())
//!   ```
//!
//! - Python bindings parse policy strings with the same `FromStr`
//!   implementations and rely on `From<FilterError> for PyErr` to raise
//!   `ValueError`.
//!
//! Testing notes
//! -------------
//! - Each submodule carries unit tests for its own branch structure;
//!   `tests/integration_filters_pipeline.rs` drives the public surface end
//!   to end.

pub mod ema;
pub mod errors;
pub mod hampel;
pub mod missing;
pub mod options;
pub mod sma;
pub mod validation;
pub mod window;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::ema::ema;
pub use self::errors::{FilterError, FilterResult};
pub use self::hampel::{HampelParams, hampel};
pub use self::missing::{MISSING, is_missing};
pub use self::options::{EmaMiss, WindowMiss, WindowSpec};
pub use self::sma::sma;

pub mod prelude {
    pub use super::ema::ema;
    pub use super::errors::{FilterError, FilterResult};
    pub use super::hampel::{HampelParams, hampel};
    pub use super::options::{EmaMiss, WindowMiss, WindowSpec};
    pub use super::sma::sma;
}
