// Tunable parameters for the motion subsystems.
//
// Defaults mirror `constants.rs`; callers that want a different feel build
// their own values instead of editing the constants.

use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltParams {
    pub max_rotation_deg: f32,
    pub ease: f32,
    pub epsilon_deg: f32,
    pub hover_lift_px: f32,
    pub perspective_px: f32,
}

impl Default for TiltParams {
    fn default() -> Self {
        Self {
            max_rotation_deg: TILT_MAX_ROTATION_DEG,
            ease: TILT_EASE,
            epsilon_deg: TILT_EPSILON_DEG,
            hover_lift_px: TILT_HOVER_LIFT_PX,
            perspective_px: TILT_PERSPECTIVE_PX,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxParams {
    pub amplitude_px: f32,
    pub anchor: f32,
    pub base_scale: f32,
    pub zoom_scale: f32,
}

impl Default for ParallaxParams {
    fn default() -> Self {
        Self {
            amplitude_px: PARALLAX_AMPLITUDE_PX,
            anchor: PARALLAX_ANCHOR,
            base_scale: PARALLAX_BASE_SCALE,
            zoom_scale: PARALLAX_ZOOM_SCALE,
        }
    }
}

/// Everything the page reads once at start-up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageConfig {
    pub tilt: TiltParams,
    pub parallax: ParallaxParams,
    pub header_threshold_px: f64,
    pub reveal_threshold: f64,
    pub reveal_stagger_ms: i32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            tilt: TiltParams::default(),
            parallax: ParallaxParams::default(),
            header_threshold_px: HEADER_SCROLL_THRESHOLD_PX,
            reveal_threshold: REVEAL_THRESHOLD,
            reveal_stagger_ms: REVEAL_STAGGER_MS,
        }
    }
}

/// Per-element parallax settings declared in markup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxConfig {
    pub strength: f32,
    pub zoom: bool,
}

impl ParallaxConfig {
    pub fn from_attributes(strength_attr: Option<&str>, zoom: bool) -> Self {
        Self {
            strength: parse_strength(strength_attr),
            zoom,
        }
    }
}

/// Parse `data-parallax-strength`; anything missing or not a finite number
/// falls back to the default strength.
#[inline]
pub fn parse_strength(raw: Option<&str>) -> f32 {
    raw.and_then(|s| s.trim().parse::<f32>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(PARALLAX_DEFAULT_STRENGTH)
}
