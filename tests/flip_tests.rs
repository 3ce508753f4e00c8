// Host-side tests for flip state, flip transition and face visibility.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod easing {
    include!("../src/core/easing.rs");
}
mod flip {
    include!("../src/core/flip.rs");
}

use flip::*;
use std::time::Duration;

#[test]
fn flip_starts_unflipped_and_toggles() {
    let mut f = FlipState::default();
    assert!(!f.is_flipped);
    assert_eq!(f.target_angle(), 0.0);
    assert!(f.toggle());
    assert_eq!(f.target_angle(), 180.0);
    assert!(!f.toggle());
}

#[test]
fn toggle_parity() {
    for n in 0..9 {
        let mut f = FlipState::default();
        for _ in 0..n {
            f.toggle();
        }
        assert_eq!(f.is_flipped, n % 2 == 1, "after {n} toggles");
    }
}

#[test]
fn activation_keys() {
    assert!(is_activation_key("Enter"));
    assert!(is_activation_key(" "));
    assert!(!is_activation_key("Space"));
    assert!(!is_activation_key("Escape"));
    assert!(!is_activation_key("a"));
    assert!(!is_activation_key(""));
}

#[test]
fn exactly_one_face_visible_at_rest() {
    assert!(face_visible(Face::Front, 0.0));
    assert!(!face_visible(Face::Back, 0.0));
    assert!(face_visible(Face::Back, 180.0));
    assert!(!face_visible(Face::Front, 180.0));
    assert_eq!(facing(0.0), Some(Face::Front));
    assert_eq!(facing(180.0), Some(Face::Back));
    assert_eq!(facing(360.0), Some(Face::Front));
    assert_eq!(facing(-180.0), Some(Face::Back));
}

#[test]
fn facing_switches_past_the_edge() {
    assert_eq!(facing(45.0), Some(Face::Front));
    assert_eq!(facing(89.0), Some(Face::Front));
    assert_eq!(facing(91.0), Some(Face::Back));
    assert_eq!(facing(135.0), Some(Face::Back));
}

#[test]
fn settled_transition_reports_its_angle() {
    let t = FlipTransition::settled(180.0);
    assert!(t.is_done());
    assert_eq!(t.angle(), 180.0);
}

#[test]
fn transition_runs_for_fixed_duration() {
    let mut t = FlipTransition::default();
    t.retarget(180.0);
    assert!(!t.is_done());
    assert_eq!(t.angle(), 0.0);

    t.advance(Duration::from_millis(300));
    let mid = t.angle();
    assert!(mid > 90.0 && mid < 180.0, "mid angle {mid}");
    assert!(!t.is_done());

    t.advance(Duration::from_millis(300));
    assert!(t.is_done());
    assert_eq!(t.angle(), 180.0);

    // extra time does not move past the target
    t.advance(Duration::from_secs(1));
    assert_eq!(t.angle(), 180.0);
}

#[test]
fn transition_angle_never_overshoots() {
    let mut t = FlipTransition::default();
    t.retarget(180.0);
    let mut prev = 0.0;
    for _ in 0..40 {
        t.advance(Duration::from_millis(16));
        let a = t.angle();
        assert!((0.0..=180.0).contains(&a));
        assert!(a >= prev);
        prev = a;
    }
}

#[test]
fn retarget_mid_flight_is_continuous() {
    let mut t = FlipTransition::default();
    t.retarget(180.0);
    t.advance(Duration::from_millis(200));
    let before = t.angle();
    t.retarget(0.0);
    assert!((t.angle() - before).abs() < 1e-4);
    t.advance(Duration::from_millis(600));
    assert_eq!(t.angle(), 0.0);
}

#[test]
fn zero_duration_jumps_to_target() {
    let mut t = FlipTransition::default().with_timing(0.0, easing::EASE_OUT);
    t.retarget(180.0);
    assert!(t.is_done());
    assert_eq!(t.angle(), 180.0);
}

#[test]
fn retiming_a_settled_transition_keeps_it_settled() {
    let t = FlipTransition::settled(180.0).with_timing(2.0, easing::EASE_OUT);
    assert!(t.is_done());
    assert_eq!(t.angle(), 180.0);
}

#[test]
fn edge_on_angles_show_no_face() {
    assert_eq!(facing(90.0), None);
    assert_eq!(facing(-90.0), None);
    assert_eq!(facing(270.0), None);
    assert!(!face_visible(Face::Front, 90.0));
    assert!(!face_visible(Face::Back, 90.0));
}

#[test]
fn only_space_swallows_the_default_action() {
    assert!(activation_prevents_default(" "));
    assert!(!activation_prevents_default("Enter"));
    // every activation key flips, whatever its default action
    let mut f = FlipState::default();
    for key in ["Enter", " "] {
        if is_activation_key(key) {
            f.toggle();
        }
    }
    assert!(!f.is_flipped);
}
