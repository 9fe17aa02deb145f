// Inline style that puts a staggered child in its revealed state.
pub const STAGGER_VISIBLE_STYLE: [(&str, &str); 2] = [("opacity", "1"), ("transform", "translateY(0)")];

/// Delay before the `index`-th staggered child of a revealed section appears.
/// Reduced motion collapses every delay to zero.
#[inline]
pub fn stagger_delay_ms(index: usize, step_ms: i32, reduced_motion: bool) -> i32 {
    if reduced_motion {
        return 0;
    }
    i32::try_from(index)
        .unwrap_or(i32::MAX)
        .saturating_mul(step_ms)
}

/// How `.reveal` sections reach their end state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealMode {
    /// Reveal each section the first time it scrolls into view.
    OnIntersect,
    /// Reveal everything now, with no stagger.
    Immediate,
}

/// Observing needs both motion and a working IntersectionObserver; without
/// either, content must still end up visible.
#[inline]
pub fn reveal_mode(reduced_motion: bool, observer_available: bool) -> RevealMode {
    if reduced_motion || !observer_available {
        RevealMode::Immediate
    } else {
        RevealMode::OnIntersect
    }
}
