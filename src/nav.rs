/// Header gets its condensed style once the page has scrolled past `threshold_px`.
#[inline]
pub fn header_is_scrolled(scroll_y: f64, threshold_px: f64) -> bool {
    scroll_y > threshold_px
}

/// Open/closed state of the mobile navigation drawer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavDrawer {
    open: bool,
}

impl NavDrawer {
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the drawer; returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the drawer; returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    #[inline]
    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }
}
