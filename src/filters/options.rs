//! filters::options — missing-value policies and window configuration.
//!
//! Purpose
//! -------
//! Collect the configuration knobs shared by the filters: how missing inputs
//! influence a window ([`WindowMiss`]), how the EMA recursion recovers from
//! gaps ([`EmaMiss`]), and the window geometry ([`WindowSpec`]).
//!
//! Key behaviors
//! -------------
//! - Parse policy names from strings via `FromStr`, rejecting anything
//!   outside the allowed set with [`FilterError::InvalidMiss`].
//! - Render policies back to their canonical names via `Display`.
//! - Validate window sizes once, at construction of [`WindowSpec`], and
//!   expose the recentring `shift`.
//!
//! Conventions
//! -----------
//! - Policy names are the exact lowercase identifiers `single`, `all`,
//!   `none` (window filters) and `reset`, `carry`, `carry_interpolate`
//!   (EMA). No case folding is applied.
//! - A window is addressed by its right (most recent) endpoint `i` and spans
//!   `[i - window_size + 1, i]`.
use std::{fmt, str::FromStr};

use crate::filters::{
    errors::{FilterError, FilterResult},
    validation::validate_window_size,
};

/// How missing inputs affect the windowed filters (`sma`, `hampel`).
///
/// - `Single`: the output is missing whenever the point it represents is
///   missing; otherwise missing window members are skipped.
/// - `All`: any missing member makes the window statistic missing.
/// - `None`: missing members are skipped; the output is missing only when
///   nothing is left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowMiss {
    #[default]
    Single,
    All,
    None,
}

impl WindowMiss {
    pub const ALLOWED: &'static [&'static str] = &["single", "all", "none"];

    pub fn as_str(&self) -> &'static str {
        match self {
            WindowMiss::Single => "single",
            WindowMiss::All => "all",
            WindowMiss::None => "none",
        }
    }
}

impl FromStr for WindowMiss {
    type Err = FilterError;

    fn from_str(s: &str) -> FilterResult<Self> {
        match s {
            "single" => Ok(WindowMiss::Single),
            "all" => Ok(WindowMiss::All),
            "none" => Ok(WindowMiss::None),
            other => Err(FilterError::InvalidMiss {
                value: other.to_string(),
                allowed: Self::ALLOWED,
            }),
        }
    }
}

impl fmt::Display for WindowMiss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the EMA recursion treats missing inputs.
///
/// - `Reset`: a missing input yields a missing output, and the first present
///   value after a gap restarts the recursion from the raw value.
/// - `Carry`: a missing input yields a missing output; the recursion resumes
///   from the last computed state.
/// - `CarryInterpolate`: like `Carry`, but the gap is filled with the last
///   computed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmaMiss {
    #[default]
    Reset,
    Carry,
    CarryInterpolate,
}

impl EmaMiss {
    pub const ALLOWED: &'static [&'static str] = &["reset", "carry", "carry_interpolate"];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmaMiss::Reset => "reset",
            EmaMiss::Carry => "carry",
            EmaMiss::CarryInterpolate => "carry_interpolate",
        }
    }
}

impl FromStr for EmaMiss {
    type Err = FilterError;

    fn from_str(s: &str) -> FilterResult<Self> {
        match s {
            "reset" => Ok(EmaMiss::Reset),
            "carry" => Ok(EmaMiss::Carry),
            "carry_interpolate" => Ok(EmaMiss::CarryInterpolate),
            other => Err(FilterError::InvalidMiss {
                value: other.to_string(),
                allowed: Self::ALLOWED,
            }),
        }
    }
}

impl fmt::Display for EmaMiss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// WindowSpec — validated window geometry for the windowed filters.
///
/// Fields
/// ------
/// - `window_size`: `usize`
///   Number of observations per window; always `>= 1`.
/// - `recentre`: `bool`
///   When `true`, each statistic is written `window_size / 2` positions
///   earlier than the window's right endpoint, aligning it with the window
///   centre. For even sizes this leans one step toward the earlier side.
///
/// Invariants
/// ----------
/// - `window_size >= 1`, enforced by [`WindowSpec::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSpec {
    window_size: usize,
    recentre: bool,
}

impl WindowSpec {
    /// Build a window spec, rejecting non-positive sizes.
    ///
    /// `window_size` is taken as `i64` so that negative values coming from a
    /// host language are reported rather than wrapped.
    ///
    /// Errors
    /// ------
    /// - `FilterError::InvalidWindowSize` when `window_size <= 0`.
    pub fn new(window_size: i64, recentre: bool) -> FilterResult<Self> {
        let window_size = validate_window_size(window_size)?;
        Ok(WindowSpec { window_size, recentre })
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn recentre(&self) -> bool {
        self.recentre
    }

    /// Offset between a window's right endpoint and the output slot it fills.
    pub fn shift(&self) -> usize {
        if self.recentre { self.window_size / 2 } else { 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - String parsing and display of both policy enums, including the
    //   rejection path.
    // - `WindowSpec` validation and the recentring shift for odd and even
    //   window sizes.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Ensure every allowed window policy name parses and displays back to
    // the same string.
    //
    // Given
    // -----
    // - The names in `WindowMiss::ALLOWED`.
    //
    // Expect
    // ------
    // - `name.parse::<WindowMiss>()` succeeds and `to_string()` equals `name`.
    fn window_miss_parses_every_allowed_name() {
        for &name in WindowMiss::ALLOWED {
            // Act
            let policy: WindowMiss = name.parse().expect("allowed name should parse");

            // Assert
            assert_eq!(policy.to_string(), name);
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that an unknown window policy is rejected with the allowed
    // set attached, and that EMA names are not accepted by window filters.
    //
    // Given
    // -----
    // - The names "carry" and "Single".
    //
    // Expect
    // ------
    // - Both parse attempts return `FilterError::InvalidMiss` carrying the
    //   rejected value and `WindowMiss::ALLOWED`.
    fn window_miss_rejects_unknown_names() {
        for bad in ["carry", "Single"] {
            // Act
            let result = bad.parse::<WindowMiss>();

            // Assert
            match result {
                Err(FilterError::InvalidMiss { value, allowed }) => {
                    assert_eq!(value, bad);
                    assert_eq!(allowed, WindowMiss::ALLOWED);
                }
                other => panic!("expected InvalidMiss error, got {other:?}"),
            }
        }
    }

    #[test]
    fn ema_miss_parses_every_allowed_name() {
        for &name in EmaMiss::ALLOWED {
            let policy: EmaMiss = name.parse().expect("allowed name should parse");
            assert_eq!(policy.to_string(), name);
        }
    }

    #[test]
    fn ema_miss_rejects_window_policy_names() {
        match "single".parse::<EmaMiss>() {
            Err(FilterError::InvalidMiss { allowed, .. }) => assert_eq!(allowed, EmaMiss::ALLOWED),
            other => panic!("expected InvalidMiss error, got {other:?}"),
        }
    }

    #[test]
    fn policies_default_to_single_and_reset() {
        assert_eq!(WindowMiss::default(), WindowMiss::Single);
        assert_eq!(EmaMiss::default(), EmaMiss::Reset);
    }

    #[test]
    // Purpose
    // -------
    // Verify the recentring shift is `floor(window_size / 2)` and zero when
    // recentring is disabled.
    //
    // Given
    // -----
    // - Window sizes 1, 4, and 5 with and without recentring.
    //
    // Expect
    // ------
    // - Shifts 0, 2, 2 when recentring; 0 otherwise.
    fn window_spec_shift_floors_half_window() {
        for (size, expected) in [(1, 0), (4, 2), (5, 2)] {
            // Arrange
            let centred = WindowSpec::new(size, true).unwrap();
            let trailing = WindowSpec::new(size, false).unwrap();

            // Assert
            assert_eq!(centred.shift(), expected, "window_size = {size}");
            assert_eq!(trailing.shift(), 0, "window_size = {size}");
            assert_eq!(centred.window_size(), size as usize);
        }
    }

    #[test]
    fn window_spec_rejects_non_positive_sizes() {
        for bad in [0_i64, -3] {
            match WindowSpec::new(bad, true) {
                Err(FilterError::InvalidWindowSize { window_size }) => assert_eq!(window_size, bad),
                other => panic!("expected InvalidWindowSize error, got {other:?}"),
            }
        }
    }
}
