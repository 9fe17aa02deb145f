// Shared motion tuning constants used by the web frontend.

// Card tilt
pub const TILT_MAX_ROTATION_DEG: f32 = 9.0; // clamp for both rotation axes
pub const TILT_EASE: f32 = 0.12; // fraction of the remaining distance covered per frame
pub const TILT_EPSILON_DEG: f32 = 0.01; // loop stops once both axes are this close
pub const TILT_HOVER_LIFT_PX: f32 = -10.0; // vertical lift while hovered
pub const TILT_PERSPECTIVE_PX: f32 = 1000.0;

// Scroll parallax
pub const PARALLAX_DEFAULT_STRENGTH: f32 = 0.15;
pub const PARALLAX_AMPLITUDE_PX: f32 = 60.0;
pub const PARALLAX_ANCHOR: f32 = 0.2; // share of the element height added to its top
pub const PARALLAX_BASE_SCALE: f32 = 1.08; // overscan so the offset never exposes an edge
pub const PARALLAX_ZOOM_SCALE: f32 = 1.0;

// Page chrome
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 60.0;
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_STAGGER_MS: i32 = 120;

// Selectors, classes and attributes
pub const HEADER_SELECTOR: &str = ".glass-header";
pub const CARD_SELECTOR: &str = ".card";
pub const PARALLAX_SELECTOR: &str = "[data-parallax]";
pub const PARALLAX_STRENGTH_ATTR: &str = "data-parallax-strength";
pub const PARALLAX_ZOOM_CLASS: &str = "zoom";
pub const REVEAL_SELECTOR: &str = ".reveal";
pub const STAGGER_SELECTOR: &str = ".stagger";
pub const NAV_TOGGLE_SELECTOR: &str = ".nav-toggle";
pub const NAV_DRAWER_SELECTOR: &str = ".nav-drawer";
pub const NAV_BACKDROP_SELECTOR: &str = ".nav-backdrop";

pub const SCROLLED_CLASS: &str = "scrolled";
pub const ACTIVE_CLASS: &str = "active";
pub const OPEN_CLASS: &str = "open";
pub const BODY_NAV_OPEN_CLASS: &str = "nav-open";

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
