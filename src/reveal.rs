//! Scroll-reveal core: visibility latch and animation profiles.
//!
//! Everything here is plain Rust so the reveal behaviour can be tested
//! without a browser. The DOM wiring lives in `components::scroll_reveal`.

/// Fraction of a block's area that must be inside the viewport before it
/// counts as visible.
pub const INTERSECTION_THRESHOLD: f64 = 0.1;

/// Extra detection margin around the viewport, applied on all sides.
pub const DETECTION_MARGIN: &str = "50px";

/// Duration of the hidden -> visible transition.
pub const TRANSITION_DURATION_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisibilityState {
    #[default]
    Hidden,
    Visible,
}

/// One visual endpoint of a reveal: opacity plus a translate offset in
/// logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub opacity: f32,
    pub x: f32,
    pub y: f32,
}

impl RevealStyle {
    pub const VISIBLE: Self = Self { opacity: 1.0, x: 0.0, y: 0.0 };

    pub const fn hidden_at(x: f32, y: f32) -> Self {
        Self { opacity: 0.0, x, y }
    }

    /// Inline style for this endpoint, transition included so the browser
    /// animates the change when the wrapper swaps endpoints.
    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: translate({}px, {}px); transition: opacity {ms}ms ease, transform {ms}ms ease;",
            self.opacity,
            self.x,
            self.y,
            ms = TRANSITION_DURATION_MS,
        )
    }
}

/// Paired hidden/visible styles for one wrapped block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationProfile {
    pub hidden: RevealStyle,
    pub visible: RevealStyle,
}

impl AnimationProfile {
    pub const fn from_hidden_offset(x: f32, y: f32) -> Self {
        Self {
            hidden: RevealStyle::hidden_at(x, y),
            visible: RevealStyle::VISIBLE,
        }
    }

    pub fn style(&self, state: VisibilityState) -> String {
        match state {
            VisibilityState::Hidden => self.hidden.to_css(),
            VisibilityState::Visible => self.visible.to_css(),
        }
    }
}

/// Block slides up into place.
pub const FADE_IN_UP: AnimationProfile = AnimationProfile::from_hidden_offset(0.0, 5.0);
/// Block slides in from the left.
pub const FADE_IN_LEFT: AnimationProfile = AnimationProfile::from_hidden_offset(-10.0, 0.0);
/// Block slides in from the right.
pub const FADE_IN_RIGHT: AnimationProfile = AnimationProfile::from_hidden_offset(10.0, 0.0);

/// One-shot visibility latch for a single observed block.
///
/// The latch, not the intersection facility, owns the "exactly once"
/// guarantee: the first intersecting report flips it to `Visible` and every
/// report after that is ignored, whatever the facility keeps delivering.
#[derive(Debug, Default)]
pub struct RevealLatch {
    state: VisibilityState,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> VisibilityState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == VisibilityState::Visible
    }

    /// Feed one intersection report. Returns `true` exactly once, when the
    /// block first becomes sufficiently visible.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting && self.state == VisibilityState::Hidden {
            self.state = VisibilityState::Visible;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_starts_hidden() {
        let latch = RevealLatch::new();
        assert_eq!(latch.state(), VisibilityState::Hidden);
        assert!(!latch.is_visible());
    }

    #[test]
    fn latch_fires_exactly_once() {
        let mut latch = RevealLatch::new();
        assert!(latch.observe(true));
        assert!(latch.is_visible());
        // Repeated intersection events must not fire again.
        assert!(!latch.observe(true));
        assert!(!latch.observe(true));
        assert!(latch.is_visible());
    }

    #[test]
    fn latch_ignores_non_intersecting_reports() {
        let mut latch = RevealLatch::new();
        assert!(!latch.observe(false));
        assert_eq!(latch.state(), VisibilityState::Hidden);
        assert!(latch.observe(true));
        // Scrolling back out never re-hides the block.
        assert!(!latch.observe(false));
        assert!(latch.is_visible());
    }

    #[test]
    fn left_and_right_offsets_mirror_each_other() {
        assert_eq!(FADE_IN_LEFT.hidden.x, -FADE_IN_RIGHT.hidden.x);
        assert_eq!(FADE_IN_LEFT.hidden.x, -10.0);
        assert_eq!(FADE_IN_RIGHT.hidden.x, 10.0);
        assert_eq!(FADE_IN_LEFT.visible, RevealStyle::VISIBLE);
        assert_eq!(FADE_IN_RIGHT.visible, RevealStyle::VISIBLE);
    }

    #[test]
    fn fade_in_up_endpoints() {
        assert_eq!(FADE_IN_UP.hidden.opacity, 0.0);
        assert_eq!(FADE_IN_UP.hidden.y, 5.0);
        assert_eq!(FADE_IN_UP.visible.opacity, 1.0);
        assert_eq!(FADE_IN_UP.visible.y, 0.0);
    }

    #[test]
    fn reveal_sequence_reaches_visible_style_once() {
        // Mount hidden, intersect, assert the rendered endpoints.
        let mut latch = RevealLatch::new();
        let profile = FADE_IN_UP;
        assert!(profile.style(latch.state()).contains("opacity: 0"));
        assert!(profile.style(latch.state()).contains("translate(0px, 5px)"));

        assert!(latch.observe(true));
        let visible = profile.style(latch.state());
        assert!(visible.contains("opacity: 1"));
        assert!(visible.contains("translate(0px, 0px)"));

        // Further events leave the rendered style untouched.
        assert!(!latch.observe(true));
        assert_eq!(profile.style(latch.state()), visible);
    }

    #[test]
    fn styles_carry_the_fixed_transition() {
        for profile in [FADE_IN_UP, FADE_IN_LEFT, FADE_IN_RIGHT] {
            for state in [VisibilityState::Hidden, VisibilityState::Visible] {
                assert!(profile.style(state).contains("300ms"));
            }
        }
    }
}
