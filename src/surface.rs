/// Measured box of an element in viewport coordinates (CSS px).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Something that can be measured and given a CSS transform.
pub trait Surface {
    fn bounds(&self) -> Bounds;
    fn set_transform(&self, css: &str);
}

pub trait Viewport {
    /// Current inner height in CSS px. May be 0 while the page is hidden.
    fn height(&self) -> f32;
}
