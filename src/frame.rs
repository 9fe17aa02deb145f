// Next-paint callback scheduling.
//
// Both the tilt loop and the scroll pass ask for "run this at the next frame"
// through [`FrameScheduler`], and guard against stacking requests with a
// [`FrameGate`]. The browser implementation lives in `dom.rs`; [`ManualFrames`]
// drives the same code deterministically off the browser.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

pub type FrameCallback = Box<dyn FnOnce()>;

/// Opaque id returned by the platform for a requested frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

pub trait FrameScheduler {
    /// Request a single callback at the next paint. `None` means the platform
    /// refused and the callback will never run.
    fn request_frame(&self, callback: FrameCallback) -> Option<FrameHandle>;
}

/// At most one outstanding frame request.
///
/// `try_arm` flips the gate before the request is made, so a request issued
/// while the gate is armed is dropped. The frame callback calls `release`
/// before doing its work, so anything requested during that work is queued
/// for the following frame instead of being lost.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: bool,
    handle: Option<FrameHandle>,
}

impl FrameGate {
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    #[inline]
    pub fn handle(&self) -> Option<FrameHandle> {
        self.handle
    }

    /// Returns `true` if the caller now owns the (single) frame request.
    #[inline]
    pub fn try_arm(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    #[inline]
    pub fn set_handle(&mut self, handle: FrameHandle) {
        if self.pending {
            self.handle = Some(handle);
        }
    }

    #[inline]
    pub fn release(&mut self) {
        self.pending = false;
        self.handle = None;
    }

    /// Record the outcome of the request made after `try_arm`. A refused
    /// request disarms the gate so the next event can try again.
    #[inline]
    pub fn settle(&mut self, handle: Option<FrameHandle>) {
        match handle {
            Some(h) => self.set_handle(h),
            None => self.release(),
        }
    }
}

#[derive(Default)]
struct ManualQueue {
    next_id: i32,
    requested: usize,
    refused: usize,
    refusing: bool,
    queue: VecDeque<(FrameHandle, FrameCallback)>,
}

/// Frame scheduler that only advances when told to.
#[derive(Clone, Default)]
pub struct ManualFrames {
    inner: Rc<RefCell<ManualQueue>>,
    frames_run: Rc<Cell<usize>>,
}

impl ManualFrames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of accepted requests so far.
    pub fn requested(&self) -> usize {
        self.inner.borrow().requested
    }

    /// Requests turned away while refusing.
    pub fn refused(&self) -> usize {
        self.inner.borrow().refused
    }

    /// While set, every request is refused the way a page without a
    /// rendering loop would.
    pub fn set_refusing(&self, refusing: bool) {
        self.inner.borrow_mut().refusing = refusing;
    }

    /// Callbacks waiting for the next frame.
    pub fn pending(&self) -> usize {
        self.inner.borrow().queue.len()
    }

    pub fn frames_run(&self) -> usize {
        self.frames_run.get()
    }

    /// Run one frame: every callback queued before the frame started.
    /// Callbacks requested while running land in the next frame.
    /// Returns how many callbacks ran.
    pub fn run_frame(&self) -> usize {
        let batch: Vec<(FrameHandle, FrameCallback)> =
            self.inner.borrow_mut().queue.drain(..).collect();
        self.frames_run.set(self.frames_run.get() + 1);
        let ran = batch.len();
        for (_, cb) in batch {
            cb();
        }
        ran
    }

    /// Keep running frames until nothing is queued or `max_frames` is hit.
    /// Returns the number of frames that ran at least one callback.
    pub fn run_until_idle(&self, max_frames: usize) -> usize {
        let mut frames = 0;
        while frames < max_frames && self.pending() > 0 {
            self.run_frame();
            frames += 1;
        }
        frames
    }
}

impl FrameScheduler for ManualFrames {
    fn request_frame(&self, callback: FrameCallback) -> Option<FrameHandle> {
        let mut inner = self.inner.borrow_mut();
        if inner.refusing {
            inner.refused += 1;
            return None;
        }
        inner.next_id += 1;
        inner.requested += 1;
        let handle = FrameHandle(inner.next_id);
        inner.queue.push_back((handle, callback));
        Some(handle)
    }
}
