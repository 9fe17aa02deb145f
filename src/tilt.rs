// Damped pointer tilt for card elements.
//
// [`TiltController`] holds the per-card numbers and is free of any platform
// types. [`TiltCard`] binds a controller to a [`Surface`] and a
// [`FrameScheduler`] and runs the self-terminating render loop.

use crate::config::TiltParams;
use crate::frame::{FrameGate, FrameScheduler};
use crate::surface::Surface;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;

/// Transform emitted for one rendered frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltTransform {
    pub perspective_px: f32,
    pub lift_px: f32,
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
}

impl TiltTransform {
    pub fn to_css(&self) -> String {
        format!(
            "perspective({}px) translateY({}px) rotateX({:.3}deg) rotateY({:.3}deg)",
            self.perspective_px, self.lift_px, self.rotate_x_deg, self.rotate_y_deg
        )
    }
}

/// Result of a single render step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltFrame {
    pub transform: TiltTransform,
    /// `false` while either axis is still further than epsilon from its target.
    pub settled: bool,
}

/// Rotation state for one card. `x` is rotation about the X axis (driven by
/// the vertical pointer position), `y` about the Y axis.
#[derive(Debug)]
pub struct TiltController {
    params: TiltParams,
    target: Vec2,
    current: Vec2,
    hovering: bool,
    frame: FrameGate,
}

impl TiltController {
    pub fn new(params: TiltParams) -> Self {
        Self {
            params,
            target: Vec2::ZERO,
            current: Vec2::ZERO,
            hovering: false,
            frame: FrameGate::default(),
        }
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        self.target
    }

    #[inline]
    pub fn current(&self) -> Vec2 {
        self.current
    }

    #[inline]
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    #[inline]
    pub fn frame_gate(&self) -> &FrameGate {
        &self.frame
    }

    #[inline]
    pub fn frame_gate_mut(&mut self) -> &mut FrameGate {
        &mut self.frame
    }

    /// Target rotation for a pointer at normalized position `uv`.
    pub fn target_for(uv: Vec2, max_rotation_deg: f32) -> Vec2 {
        let span = 2.0 * max_rotation_deg;
        Vec2::new(
            ((0.5 - uv.y) * span).clamp(-max_rotation_deg, max_rotation_deg),
            ((uv.x - 0.5) * span).clamp(-max_rotation_deg, max_rotation_deg),
        )
    }

    pub fn on_pointer_move(&mut self, uv: Vec2) {
        self.target = Self::target_for(uv, self.params.max_rotation_deg);
        self.hovering = true;
    }

    pub fn on_pointer_leave(&mut self) {
        self.target = Vec2::ZERO;
        self.hovering = false;
    }

    /// Advance the smoothing by one frame.
    pub fn step(&mut self) -> TiltFrame {
        self.current += (self.target - self.current) * self.params.ease;
        let lift_px = if self.hovering {
            self.params.hover_lift_px
        } else {
            0.0
        };
        let delta = (self.target - self.current).abs();
        let eps = self.params.epsilon_deg;
        TiltFrame {
            transform: TiltTransform {
                perspective_px: self.params.perspective_px,
                lift_px,
                rotate_x_deg: self.current.x,
                rotate_y_deg: self.current.y,
            },
            settled: delta.x <= eps && delta.y <= eps,
        }
    }
}

/// A card element driven by its own tilt loop.
pub struct TiltCard<S: FrameScheduler, E: Surface> {
    controller: RefCell<TiltController>,
    scheduler: S,
    surface: E,
}

impl<S: FrameScheduler + 'static, E: Surface + 'static> TiltCard<S, E> {
    pub fn new(surface: E, scheduler: S, params: TiltParams) -> Rc<Self> {
        Rc::new(Self {
            controller: RefCell::new(TiltController::new(params)),
            scheduler,
            surface,
        })
    }

    pub fn surface(&self) -> &E {
        &self.surface
    }

    pub fn controller(&self) -> std::cell::Ref<'_, TiltController> {
        self.controller.borrow()
    }

    pub fn pointer_move(self: &Rc<Self>, uv: Vec2) {
        self.controller.borrow_mut().on_pointer_move(uv);
        self.schedule_render();
    }

    pub fn pointer_leave(self: &Rc<Self>) {
        self.controller.borrow_mut().on_pointer_leave();
        self.schedule_render();
    }

    /// Request a render frame unless one is already outstanding.
    pub fn schedule_render(self: &Rc<Self>) {
        if !self.controller.borrow_mut().frame_gate_mut().try_arm() {
            return;
        }
        let card = Rc::clone(self);
        let handle = self
            .scheduler
            .request_frame(Box::new(move || card.render_step()));
        self.controller.borrow_mut().frame_gate_mut().settle(handle);
    }

    fn render_step(self: &Rc<Self>) {
        let frame = {
            let mut ctl = self.controller.borrow_mut();
            ctl.frame_gate_mut().release();
            ctl.step()
        };
        self.surface.set_transform(&frame.transform.to_css());
        if !frame.settled {
            self.schedule_render();
        }
    }
}

/// Build one tilt card per surface. Under reduced motion no card is built and
/// the surfaces are left untouched.
pub fn tilt_cards<S, E>(
    surfaces: Vec<E>,
    scheduler: &S,
    params: TiltParams,
    reduced_motion: bool,
) -> Vec<Rc<TiltCard<S, E>>>
where
    S: FrameScheduler + Clone + 'static,
    E: Surface + 'static,
{
    if reduced_motion {
        return Vec::new();
    }
    surfaces
        .into_iter()
        .map(|surface| TiltCard::new(surface, scheduler.clone(), params))
        .collect()
}
