//! Integration tests for the series filters.
//!
//! Purpose
//! -------
//! - Validate the public `filters` surface end to end: parsing policies from
//!   strings, building window specs, and running `sma`, `ema`, and `hampel`
//!   on realistic series with gaps and spikes.
//!
//! Coverage
//! --------
//! - Output length for every filter across window sizes and policies.
//! - Rejection of unknown `miss` names and non-positive window sizes.
//! - Spike removal by `hampel` on a noisy sinusoid, followed by smoothing.
//! - Determinism: repeated calls are bit-identical.
//!
//! Exclusions
//! ----------
//! - Branch-level checks of the windowing and reduction helpers; those are
//!   covered by unit tests.
//! - Python bindings, which are tested at the Python level.
use approx::assert_relative_eq;
use rust_filters::filters::{
    EmaMiss, FilterError, HampelParams, MISSING, WindowMiss, WindowSpec, ema, hampel, is_missing,
    sma,
};

/// Purpose
/// -------
/// Build a deterministic sinusoid with small alternating noise, a handful of
/// large spikes, and a few gaps.
///
/// Returns
/// -------
/// - `(x, spikes)` where `spikes` lists the indices that were pushed far
///   from the underlying signal.
fn noisy_series(n: usize) -> (Vec<f64>, Vec<usize>) {
    let spikes = vec![20, 45, 71];
    let gaps = [33, 34, 90];
    let x = (0..n)
        .map(|t| {
            let base = (t as f64 / 8.0).sin() + if t % 2 == 0 { 0.01 } else { -0.01 };
            if spikes.contains(&t) {
                base + 25.0
            } else if gaps.contains(&t) {
                MISSING
            } else {
                base
            }
        })
        .collect();
    (x, spikes)
}

fn bit_identical(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.to_bits() == y.to_bits())
}

#[test]
// Purpose
// -------
// Verify the length invariant for every filter, policy, and a range of
// window sizes, including windows longer than the series.
fn every_filter_preserves_length() {
    let (x, _) = noisy_series(40);
    for window_size in [1_i64, 2, 3, 7, 40, 55] {
        for recentre in [true, false] {
            let spec = WindowSpec::new(window_size, recentre).unwrap();
            for &miss in WindowMiss::ALLOWED {
                let miss: WindowMiss = miss.parse().unwrap();
                assert_eq!(sma(&x, spec, miss).unwrap().len(), x.len());
                assert_eq!(hampel(&x, spec, HampelParams::default(), miss).unwrap().len(), x.len());
            }
        }
    }
    for &miss in EmaMiss::ALLOWED {
        let miss: EmaMiss = miss.parse().unwrap();
        assert_eq!(ema(&x, 0.2, miss).unwrap().len(), x.len());
    }
}

#[test]
// Purpose
// -------
// Ensure policy names are rejected as invalid arguments, never turned into
// a sentinel output, and that each filter family has its own allowed set.
fn unknown_policy_names_are_invalid_arguments() {
    for (bad, allowed) in [("carry", WindowMiss::ALLOWED), ("mean", WindowMiss::ALLOWED)] {
        match bad.parse::<WindowMiss>() {
            Err(FilterError::InvalidMiss { value, allowed: got }) => {
                assert_eq!(value, bad);
                assert_eq!(got, allowed);
            }
            other => panic!("expected InvalidMiss error, got {other:?}"),
        }
    }
    match "all".parse::<EmaMiss>() {
        Err(FilterError::InvalidMiss { allowed, .. }) => assert_eq!(allowed, EmaMiss::ALLOWED),
        other => panic!("expected InvalidMiss error, got {other:?}"),
    }
}

#[test]
fn non_positive_window_sizes_are_invalid_arguments() {
    assert!(matches!(
        WindowSpec::new(0, true),
        Err(FilterError::InvalidWindowSize { window_size: 0 })
    ));
    assert!(matches!(
        WindowSpec::new(-2, false),
        Err(FilterError::InvalidWindowSize { window_size: -2 })
    ));
}

#[test]
// Purpose
// -------
// Exercise a realistic clean-then-smooth pipeline: Hampel removes the
// spikes, and a centred SMA over the cleaned series stays close to the
// underlying sinusoid.
//
// Expect
// ------
// - Every spike index is replaced by a value within 0.5 of the signal.
// - Gap positions stay missing under the default `single` policy.
// - Interior SMA values (away from gaps) are within 0.2 of the signal.
fn hampel_then_sma_recovers_signal() {
    // Arrange
    let n = 120;
    let (x, spikes) = noisy_series(n);
    let spec = WindowSpec::new(7, true).unwrap();

    // Act
    let cleaned = hampel(&x, spec, HampelParams::default(), WindowMiss::Single).unwrap();
    let smooth = sma(cleaned.as_slice().unwrap(), WindowSpec::new(5, true).unwrap(), WindowMiss::None)
        .unwrap();

    // Assert
    for &t in &spikes {
        let signal = (t as f64 / 8.0).sin();
        assert!(
            (cleaned[t] - signal).abs() < 0.5,
            "spike at {t} should be replaced; got {} vs signal {signal}",
            cleaned[t]
        );
    }
    for t in [33, 34, 90] {
        assert!(is_missing(cleaned[t]), "gap at {t} should stay missing");
    }
    for t in 10..n - 10 {
        if (30..38).contains(&t) || (86..94).contains(&t) {
            continue;
        }
        let signal = (t as f64 / 8.0).sin();
        assert!(!is_missing(smooth[t]), "slot {t} should be filled");
        assert!((smooth[t] - signal).abs() < 0.2, "slot {t}: {} vs {signal}", smooth[t]);
    }
}

#[test]
// Purpose
// -------
// Pin the worked EMA examples for all three gap-recovery policies.
fn ema_policies_on_worked_example() {
    let x = [1.0, MISSING, 3.0];

    let reset = ema(&x, 0.5, EmaMiss::Reset).unwrap();
    let carry = ema(&x, 0.5, EmaMiss::Carry).unwrap();
    let interp = ema(&x, 0.5, EmaMiss::CarryInterpolate).unwrap();

    assert!(is_missing(reset[1]));
    assert_relative_eq!(reset[2], 3.0);
    assert!(is_missing(carry[1]));
    assert_relative_eq!(carry[2], 2.0);
    assert_relative_eq!(interp[1], 1.0);
    assert_relative_eq!(interp[2], 2.0);
}

#[test]
fn repeated_calls_are_bit_identical() {
    let (x, _) = noisy_series(64);
    let spec = WindowSpec::new(5, true).unwrap();

    let s1 = sma(&x, spec, WindowMiss::None).unwrap();
    let s2 = sma(&x, spec, WindowMiss::None).unwrap();
    let h1 = hampel(&x, spec, HampelParams::default(), WindowMiss::All).unwrap();
    let h2 = hampel(&x, spec, HampelParams::default(), WindowMiss::All).unwrap();
    let e1 = ema(&x, 0.3, EmaMiss::CarryInterpolate).unwrap();
    let e2 = ema(&x, 0.3, EmaMiss::CarryInterpolate).unwrap();

    assert!(bit_identical(s1.as_slice().unwrap(), s2.as_slice().unwrap()));
    assert!(bit_identical(h1.as_slice().unwrap(), h2.as_slice().unwrap()));
    assert!(bit_identical(e1.as_slice().unwrap(), e2.as_slice().unwrap()));
}
