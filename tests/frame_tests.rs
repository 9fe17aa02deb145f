// Host-side tests for frame gating and the manual scheduler.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod frame {
    include!("../src/frame.rs");
}

use frame::*;
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn gate_allows_one_outstanding_request() {
    let mut gate = FrameGate::default();
    assert!(!gate.is_pending());
    assert!(gate.try_arm());
    assert!(!gate.try_arm());
    assert!(!gate.try_arm());
    gate.set_handle(FrameHandle(7));
    assert_eq!(gate.handle(), Some(FrameHandle(7)));

    gate.release();
    assert!(!gate.is_pending());
    assert_eq!(gate.handle(), None);
    assert!(gate.try_arm());
}

#[test]
fn gate_ignores_handles_when_not_armed() {
    let mut gate = FrameGate::default();
    gate.set_handle(FrameHandle(3));
    assert_eq!(gate.handle(), None);
}

#[test]
fn manual_frames_run_in_request_order() {
    let frames = ManualFrames::new();
    let order = Rc::new(std::cell::RefCell::new(Vec::new()));
    for i in 0..3 {
        let order = order.clone();
        frames.request_frame(Box::new(move || order.borrow_mut().push(i)));
    }
    assert_eq!(frames.pending(), 3);
    assert_eq!(frames.run_frame(), 3);
    assert_eq!(*order.borrow(), vec![0, 1, 2]);
    assert_eq!(frames.frames_run(), 1);
}

#[test]
fn manual_frames_hand_out_distinct_handles() {
    let frames = ManualFrames::new();
    let a = frames.request_frame(Box::new(|| {}));
    let b = frames.request_frame(Box::new(|| {}));
    assert_ne!(a, b);
    assert_eq!(frames.requested(), 2);
}

#[test]
fn callbacks_requested_mid_frame_wait_for_the_next_frame() {
    let frames = ManualFrames::new();
    let hits = Rc::new(Cell::new(0));
    {
        let frames_inner = frames.clone();
        let hits = hits.clone();
        frames.request_frame(Box::new(move || {
            hits.set(hits.get() + 1);
            let hits = hits.clone();
            frames_inner.request_frame(Box::new(move || hits.set(hits.get() + 1)));
        }));
    }
    assert_eq!(frames.run_frame(), 1);
    assert_eq!(hits.get(), 1);
    assert_eq!(frames.pending(), 1);
    assert_eq!(frames.run_frame(), 1);
    assert_eq!(hits.get(), 2);
}

#[test]
fn run_until_idle_respects_the_frame_cap() {
    let frames = ManualFrames::new();

    fn forever(frames: ManualFrames) {
        let next = frames.clone();
        frames.request_frame(Box::new(move || forever(next)));
    }
    forever(frames.clone());

    assert_eq!(frames.run_until_idle(25), 25);
    assert_eq!(frames.pending(), 1);
    assert_eq!(frames.run_until_idle(0), 0);
}

#[test]
fn refused_request_disarms_the_gate() {
    let mut gate = FrameGate::default();
    assert!(gate.try_arm());
    gate.settle(None);
    assert!(!gate.is_pending());
    assert!(gate.try_arm());
    gate.settle(Some(FrameHandle(4)));
    assert!(gate.is_pending());
    assert_eq!(gate.handle(), Some(FrameHandle(4)));
}

#[test]
fn refusing_scheduler_drops_callbacks() {
    let frames = ManualFrames::new();
    frames.set_refusing(true);
    let hit = Rc::new(Cell::new(false));
    {
        let hit = hit.clone();
        assert_eq!(frames.request_frame(Box::new(move || hit.set(true))), None);
    }
    assert_eq!(frames.refused(), 1);
    assert_eq!(frames.requested(), 0);
    assert_eq!(frames.pending(), 0);

    frames.set_refusing(false);
    assert!(frames.request_frame(Box::new(|| {})).is_some());
    frames.run_frame();
    assert!(!hit.get());
}
