// Host-side tests for pure input helpers.
// The main crate is wasm-only, so we include the module directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn drag_reports_deltas_between_samples() {
    let mut drag = DragState::default();
    drag.begin(7, Vec2::new(100.0, 100.0));
    assert_eq!(drag.step(7, Vec2::new(110.0, 95.0)), Some(Vec2::new(10.0, -5.0)));
    assert_eq!(drag.step(7, Vec2::new(110.0, 95.0)), Some(Vec2::ZERO));
    assert_eq!(drag.step(7, Vec2::new(100.0, 100.0)), Some(Vec2::new(-10.0, 5.0)));
}

#[test]
fn drag_ignores_other_pointers_and_idle_moves() {
    let mut drag = DragState::default();
    assert_eq!(drag.step(1, Vec2::new(5.0, 5.0)), None);

    drag.begin(1, Vec2::ZERO);
    assert_eq!(drag.step(2, Vec2::new(50.0, 0.0)), None);
    assert!(!drag.end(2));
    assert!(drag.active);

    assert!(drag.end(1));
    assert!(!drag.active);
    assert_eq!(drag.step(1, Vec2::new(5.0, 5.0)), None);
}

#[test]
fn wheel_steps_follow_delta_sign() {
    assert_eq!(wheel_steps(0.0, 100.0), 0.0);
    assert_eq!(wheel_steps(100.0, 100.0), 1.0);
    assert_eq!(wheel_steps(-50.0, 100.0), -0.5);
}

#[test]
fn wheel_steps_are_clamped() {
    assert_eq!(wheel_steps(10_000.0, 100.0), 3.0);
    assert_eq!(wheel_steps(-10_000.0, 100.0), -3.0);
    assert_eq!(wheel_steps(120.0, 0.0), 0.0);
}
