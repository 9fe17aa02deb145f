use crate::surface::Bounds;
use glam::Vec2;

// ---------------- Pointer helpers ----------------
/// Map client coordinates into the element's box as `[0, 1]` on both axes.
/// A collapsed box reports its centre, which tilts to rest.
#[inline]
pub fn normalized_pointer(client_x: f32, client_y: f32, bounds: Bounds) -> Vec2 {
    let x_css = client_x - bounds.left;
    let y_css = client_y - bounds.top;
    if bounds.width > 0.0 && bounds.height > 0.0 {
        Vec2::new(
            (x_css / bounds.width).clamp(0.0, 1.0),
            (y_css / bounds.height).clamp(0.0, 1.0),
        )
    } else {
        Vec2::splat(0.5)
    }
}

#[inline]
pub fn is_escape_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}
