// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod surface {
    include!("../src/surface.rs");
}
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;
use surface::Bounds;

fn card_box() -> Bounds {
    Bounds {
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 100.0,
    }
}

#[test]
fn pointer_is_normalized_to_the_card_box() {
    let b = card_box();
    assert_eq!(normalized_pointer(100.0, 50.0, b), Vec2::new(0.0, 0.0));
    assert_eq!(normalized_pointer(300.0, 150.0, b), Vec2::new(1.0, 1.0));
    assert_eq!(normalized_pointer(200.0, 100.0, b), Vec2::new(0.5, 0.5));
    assert_eq!(normalized_pointer(150.0, 125.0, b), Vec2::new(0.25, 0.75));
}

#[test]
fn pointer_outside_the_box_is_clamped() {
    let b = card_box();
    assert_eq!(normalized_pointer(0.0, 0.0, b), Vec2::new(0.0, 0.0));
    assert_eq!(normalized_pointer(999.0, 999.0, b), Vec2::new(1.0, 1.0));
}

#[test]
fn collapsed_box_reports_the_centre() {
    let b = Bounds {
        width: 0.0,
        ..card_box()
    };
    assert_eq!(normalized_pointer(120.0, 60.0, b), Vec2::splat(0.5));
}

#[test]
fn escape_key_names() {
    assert!(is_escape_key("Escape"));
    assert!(is_escape_key("Esc"));
    assert!(!is_escape_key("Enter"));
    assert!(!is_escape_key("e"));
}
