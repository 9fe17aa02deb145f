// Scroll-driven parallax.
//
// Scroll and resize events only call [`ScrollScheduler::request_update`];
// the actual measurement and transform pass runs at most once per frame.

use crate::config::{ParallaxConfig, ParallaxParams};
use crate::frame::{FrameGate, FrameScheduler};
use crate::surface::{Surface, Viewport};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// How far through the viewport the element's anchor point is, roughly
/// 0 when it enters at the bottom and 1 when it leaves at the top.
#[inline]
pub fn scroll_progress(top: f32, height: f32, viewport_height: f32, anchor: f32) -> f32 {
    (top + height * anchor) / (viewport_height + height)
}

#[inline]
pub fn parallax_offset(progress: f32, strength: f32, amplitude_px: f32) -> f32 {
    let centered = (progress - 0.5) * 2.0;
    centered * strength * amplitude_px
}

#[inline]
pub fn base_scale(zoom: bool, params: &ParallaxParams) -> f32 {
    if zoom {
        params.zoom_scale
    } else {
        params.base_scale
    }
}

#[inline]
pub fn parallax_css(offset_px: f32, scale: f32) -> String {
    format!("translate3d(0, {:.2}px, 0) scale({})", offset_px, scale)
}

pub struct ParallaxLayer<E: Surface> {
    pub surface: E,
    pub config: ParallaxConfig,
}

/// Page-wide coalescing scheduler for parallax layers.
pub struct ScrollScheduler<S: FrameScheduler, V: Viewport, E: Surface> {
    gate: RefCell<FrameGate>,
    layers: Vec<ParallaxLayer<E>>,
    params: ParallaxParams,
    scheduler: S,
    viewport: V,
    passes: Cell<u64>,
}

impl<S, V, E> ScrollScheduler<S, V, E>
where
    S: FrameScheduler + 'static,
    V: Viewport + 'static,
    E: Surface + 'static,
{
    /// Returns `None` under reduced motion or when nothing opted in; in that
    /// case no listeners should be attached.
    pub fn activate(
        layers: Vec<ParallaxLayer<E>>,
        scheduler: S,
        viewport: V,
        params: ParallaxParams,
        reduced_motion: bool,
    ) -> Option<Rc<Self>> {
        if reduced_motion || layers.is_empty() {
            return None;
        }
        let sched = Rc::new(Self {
            gate: RefCell::new(FrameGate::default()),
            layers,
            params,
            scheduler,
            viewport,
            passes: Cell::new(0),
        });
        sched.request_update();
        Some(sched)
    }

    pub fn layers(&self) -> &[ParallaxLayer<E>] {
        &self.layers
    }

    pub fn is_update_pending(&self) -> bool {
        self.gate.borrow().is_pending()
    }

    /// Number of completed update passes.
    pub fn passes(&self) -> u64 {
        self.passes.get()
    }

    pub fn request_update(self: &Rc<Self>) {
        if !self.gate.borrow_mut().try_arm() {
            return;
        }
        let sched = Rc::clone(self);
        let handle = self
            .scheduler
            .request_frame(Box::new(move || sched.update_all()));
        self.gate.borrow_mut().settle(handle);
    }

    pub fn update_all(&self) {
        self.gate.borrow_mut().release();
        let vh = self.viewport.height();
        let viewport_height = if vh > 0.0 { vh } else { 1.0 };
        for layer in &self.layers {
            let b = layer.surface.bounds();
            let progress = scroll_progress(b.top, b.height, viewport_height, self.params.anchor);
            let offset = parallax_offset(progress, layer.config.strength, self.params.amplitude_px);
            let scale = base_scale(layer.config.zoom, &self.params);
            layer.surface.set_transform(&parallax_css(offset, scale));
        }
        self.passes.set(self.passes.get() + 1);
    }
}
