// Host-side tests for timing curves.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod easing {
    include!("../src/core/easing.rs");
}

use easing::*;

#[test]
fn endpoints_are_exact() {
    for curve in [EASE_EMPHASIZED, EASE_OUT, EASE_IN_OUT] {
        assert_eq!(curve.progress(0.0), 0.0);
        assert_eq!(curve.progress(1.0), 1.0);
        // out-of-range input is clamped
        assert_eq!(curve.progress(-0.5), 0.0);
        assert_eq!(curve.progress(3.0), 1.0);
    }
}

#[test]
fn progress_is_monotonic_and_overshoot_free() {
    for curve in [EASE_EMPHASIZED, EASE_OUT, EASE_IN_OUT] {
        assert!(curve.is_overshoot_free());
        let mut prev = 0.0;
        for i in 0..=200 {
            let p = curve.progress(i as f32 / 200.0);
            assert!((0.0..=1.0).contains(&p), "{:?} left [0,1]: {p}", curve);
            assert!(p + 1e-5 >= prev, "{:?} not monotonic at step {i}", curve);
            prev = p;
        }
    }
}

#[test]
fn ease_in_out_is_symmetric() {
    assert!((EASE_IN_OUT.progress(0.5) - 0.5).abs() < 1e-3);
    for i in 1..10 {
        let x = i as f32 / 20.0;
        let a = EASE_IN_OUT.progress(x);
        let b = EASE_IN_OUT.progress(1.0 - x);
        assert!((a + b - 1.0).abs() < 1e-3, "asymmetric at x={x}");
    }
}

#[test]
fn emphasized_curve_front_loads_motion() {
    // most of the rotation happens in the first half of the duration
    let half = EASE_EMPHASIZED.progress(0.5);
    assert!(half > 0.9 && half < 1.0, "got {half}");
}

#[test]
fn overshooting_curve_is_detected() {
    let back = CubicBezier::new(0.34, 1.56, 0.64, 1.0);
    assert!(!back.is_overshoot_free());
}

#[test]
fn css_matches_control_points() {
    assert_eq!(EASE_EMPHASIZED.css(), "cubic-bezier(0.2, 0.8, 0.2, 1)");
    assert_eq!(CubicBezier::from_array([0.2, 0.8, 0.2, 1.0]), EASE_EMPHASIZED);
}

#[test]
fn keyframes_hit_each_key_at_its_time() {
    let values = [0.6, 1.12, 1.0];
    let times = [0.0, 0.7, 1.0];
    assert!((keyframes(&values, &times, EASE_EMPHASIZED, 0.0) - 0.6).abs() < 1e-6);
    assert!((keyframes(&values, &times, EASE_EMPHASIZED, 0.7) - 1.12).abs() < 1e-5);
    assert!((keyframes(&values, &times, EASE_EMPHASIZED, 1.0) - 1.0).abs() < 1e-6);
    let mid = keyframes(&values, &times, EASE_EMPHASIZED, 0.35);
    assert!(mid > 0.6 && mid < 1.12);
    // past the end holds the last value
    assert!((keyframes(&values, &times, EASE_EMPHASIZED, 2.0) - 1.0).abs() < 1e-6);
}

#[test]
fn keyframes_with_no_values_is_zero() {
    assert_eq!(keyframes(&[], &[], EASE_OUT, 0.5), 0.0);
}
