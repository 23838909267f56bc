// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

const YAW: f32 = 0.3;
const PITCH: f32 = 0.1;

fn target_at(x: f32, y: f32, w: f32, h: f32) -> Vec2 {
    orientation_target(local_to_ndc(x, y, w, h).unwrap(), YAW, PITCH)
}

#[test]
fn center_of_canvas_is_neutral() {
    let t = target_at(125.0, 125.0, 250.0, 250.0);
    assert!(t.x.abs() < 1e-6);
    assert!(t.y.abs() < 1e-6);
}

#[test]
fn top_left_corner_looks_left_and_up() {
    let t = target_at(0.0, 0.0, 250.0, 250.0);
    assert!((t.x + 0.3).abs() < 1e-6);
    assert!((t.y - 0.1).abs() < 1e-6);
}

#[test]
fn bottom_right_corner_looks_right_and_down() {
    let t = target_at(200.0, 100.0, 200.0, 100.0);
    assert!((t.x - 0.3).abs() < 1e-6);
    assert!((t.y + 0.1).abs() < 1e-6);
}

#[test]
fn ndc_is_inverted_on_y() {
    let ndc = local_to_ndc(50.0, 25.0, 100.0, 100.0).unwrap();
    assert_eq!(ndc, Vec2::new(0.0, 0.5));
}

#[test]
fn positions_outside_canvas_are_not_clamped() {
    let ndc = local_to_ndc(-100.0, 0.0, 100.0, 100.0).unwrap();
    assert_eq!(ndc.x, -3.0);
}

#[test]
fn degenerate_canvas_yields_no_target() {
    assert!(local_to_ndc(0.0, 0.0, 0.0, 100.0).is_none());
    assert!(local_to_ndc(0.0, 0.0, 100.0, 0.0).is_none());
}
