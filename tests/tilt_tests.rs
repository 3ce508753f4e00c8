// Host-side tests for pointer tilt mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod tilt {
    include!("../src/core/tilt.rs");
}

use constants::{TILT_GAIN_X, TILT_GAIN_Y};
use tilt::*;

const GAINS: [f32; 2] = [TILT_GAIN_X, TILT_GAIN_Y];

fn card_560x300() -> Option<SurfaceBounds> {
    Some(SurfaceBounds::new(0.0, 0.0, 560.0, 300.0))
}

#[test]
fn center_of_surface_is_level() {
    let mut t = PointerTilt::default();
    assert!(t.on_pointer_move(280.0, 150.0, card_560x300(), GAINS));
    assert_eq!(t.tilt_x, 0.0);
    assert_eq!(t.tilt_y, 0.0);
}

#[test]
fn top_left_corner_tilts_towards_viewer() {
    let mut t = PointerTilt::default();
    t.on_pointer_move(0.0, 0.0, card_560x300(), GAINS);
    assert!((t.tilt_y - -9.0).abs() < 1e-5);
    assert!((t.tilt_x - 7.0).abs() < 1e-5);
}

#[test]
fn bottom_right_corner_is_opposite_of_top_left() {
    let mut t = PointerTilt::default();
    t.on_pointer_move(560.0, 300.0, card_560x300(), GAINS);
    assert!((t.tilt_y - 9.0).abs() < 1e-5);
    assert!((t.tilt_x - -7.0).abs() < 1e-5);
}

#[test]
fn offset_bounds_are_respected() {
    // surface placed away from the viewport origin
    let bounds = Some(SurfaceBounds::new(100.0, 40.0, 560.0, 300.0));
    let mut t = PointerTilt::default();
    t.on_pointer_move(380.0, 190.0, bounds, GAINS);
    assert!(t.tilt_x.abs() < 1e-5);
    assert!(t.tilt_y.abs() < 1e-5);
}

#[test]
fn tilt_is_monotonic_and_bounded_inside_surface() {
    let bounds = card_560x300();
    let mut prev_y = f32::MIN;
    let mut prev_x = f32::MAX;
    for i in 0..=56 {
        let px = i as f32 * 10.0;
        let py = i as f32 * (300.0 / 56.0);
        let mut t = PointerTilt::default();
        t.on_pointer_move(px, py, bounds, GAINS);
        assert!(t.tilt_y >= prev_y, "tilt_y not increasing at px={px}");
        assert!(t.tilt_x <= prev_x, "tilt_x not decreasing at py={py}");
        assert!(t.tilt_y.abs() <= TILT_GAIN_Y / 2.0 + 1e-4);
        assert!(t.tilt_x.abs() <= TILT_GAIN_X / 2.0 + 1e-4);
        prev_y = t.tilt_y;
        prev_x = t.tilt_x;
    }
}

#[test]
fn positions_outside_surface_are_not_clamped() {
    let mut t = PointerTilt::default();
    t.on_pointer_move(1120.0, -300.0, card_560x300(), GAINS);
    // nx = 2.0, ny = -1.0
    assert!((t.tilt_y - 27.0).abs() < 1e-4);
    assert!((t.tilt_x - 21.0).abs() < 1e-4);
}

#[test]
fn missing_or_unready_surface_is_a_no_op() {
    let mut t = PointerTilt {
        tilt_x: 3.0,
        tilt_y: -2.0,
    };
    assert!(!t.on_pointer_move(10.0, 10.0, None, GAINS));
    let collapsed = Some(SurfaceBounds::new(0.0, 0.0, 0.0, 300.0));
    assert!(!t.on_pointer_move(10.0, 10.0, collapsed, GAINS));
    assert_eq!(t.tilt_x, 3.0);
    assert_eq!(t.tilt_y, -2.0);
}

#[test]
fn pointer_leave_resets_to_exact_zero() {
    let mut t = PointerTilt::default();
    t.on_pointer_move(560.0, 300.0, card_560x300(), GAINS);
    t.on_pointer_leave();
    assert_eq!(t, PointerTilt::default());
    assert_eq!(t.tilt_x, 0.0);
    assert_eq!(t.tilt_y, 0.0);
}

#[test]
fn custom_gains_scale_linearly() {
    let t = tilt_for_normalized(1.0, 0.0, 10.0, 40.0);
    assert!((t.tilt_y - 20.0).abs() < 1e-5);
    assert!((t.tilt_x - 5.0).abs() < 1e-5);
}
