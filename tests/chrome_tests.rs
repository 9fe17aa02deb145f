// Host-side tests for header, navigation drawer and reveal helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod nav {
    include!("../src/nav.rs");
}
mod reveal {
    include!("../src/reveal.rs");
}

use nav::*;
use reveal::*;

#[test]
fn header_condenses_only_past_the_threshold() {
    assert!(!header_is_scrolled(0.0, 60.0));
    assert!(!header_is_scrolled(60.0, 60.0));
    assert!(header_is_scrolled(60.5, 60.0));
    assert!(header_is_scrolled(2400.0, 60.0));
}

#[test]
fn drawer_starts_closed_and_toggles() {
    let mut drawer = NavDrawer::default();
    assert!(!drawer.is_open());
    assert_eq!(drawer.aria_expanded(), "false");

    assert!(drawer.toggle());
    assert!(drawer.is_open());
    assert_eq!(drawer.aria_expanded(), "true");

    assert!(!drawer.toggle());
    assert!(!drawer.is_open());
}

#[test]
fn close_reports_whether_anything_changed() {
    let mut drawer = NavDrawer::default();
    assert!(!drawer.close());

    drawer.toggle();
    assert!(drawer.close());
    assert!(!drawer.is_open());
    assert!(!drawer.close());
}

#[test]
fn stagger_delays_step_by_index() {
    let delays: Vec<i32> = (0..4).map(|i| stagger_delay_ms(i, 120, false)).collect();
    assert_eq!(delays, vec![0, 120, 240, 360]);
}

#[test]
fn reduced_motion_reveals_everything_at_once() {
    assert!((0..10).all(|i| stagger_delay_ms(i, 120, true) == 0));
}

#[test]
fn stagger_delay_saturates_instead_of_overflowing() {
    assert_eq!(stagger_delay_ms(usize::MAX / 2, 120, false), i32::MAX);
}

#[test]
fn visible_style_clears_offset_and_fade() {
    assert!(STAGGER_VISIBLE_STYLE.contains(&("opacity", "1")));
    assert!(STAGGER_VISIBLE_STYLE.contains(&("transform", "translateY(0)")));
}

#[test]
fn sections_are_observed_only_with_motion_and_an_observer() {
    assert_eq!(reveal_mode(false, true), RevealMode::OnIntersect);
    assert_eq!(reveal_mode(true, true), RevealMode::Immediate);
    assert_eq!(reveal_mode(true, false), RevealMode::Immediate);
}

#[test]
fn missing_observer_reveals_content_immediately() {
    // A browser without IntersectionObserver must not leave sections hidden.
    assert_eq!(reveal_mode(false, false), RevealMode::Immediate);
}
