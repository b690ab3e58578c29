//! Scroll-reveal state machine
//!
//! A reveal region starts hidden and becomes visible once it intersects the
//! viewport. It only hides again when it leaves the viewport through the
//! bottom edge (the user scrolled back up); leaving through the top keeps it
//! visible so content does not flicker while scrolling down.

use serde::{Deserialize, Serialize};

/// Fraction of the region that must be inside the viewport
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Shrinks the viewport bottom so regions reveal slightly after entering
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -80px 0px";

/// Entrance direction of a reveal animation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealDirection {
    #[default]
    Up,
    Down,
    Left,
    Right,
    Scale,
}

impl RevealDirection {
    pub fn class(&self) -> &'static str {
        match self {
            RevealDirection::Up => "reveal-up",
            RevealDirection::Down => "reveal-down",
            RevealDirection::Left => "reveal-left",
            RevealDirection::Right => "reveal-right",
            RevealDirection::Scale => "reveal-scale",
        }
    }

    /// Alternate left/right by index, used for zig-zag card grids
    pub fn alternating(index: usize) -> Self {
        if index % 2 == 0 {
            RevealDirection::Left
        } else {
            RevealDirection::Right
        }
    }
}

/// The part of an intersection observer entry the state machine needs
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    /// `boundingClientRect.top` relative to the viewport
    pub top: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

impl RevealState {
    pub fn is_visible(&self) -> bool {
        matches!(self, RevealState::Visible)
    }

    /// State after observing `sample`
    pub fn next(self, sample: IntersectionSample) -> Self {
        if sample.is_intersecting {
            RevealState::Visible
        } else if sample.top > 0.0 {
            RevealState::Hidden
        } else {
            self
        }
    }

    /// Apply `sample` in place, returning whether the state changed
    pub fn observe(&mut self, sample: IntersectionSample) -> bool {
        let next = self.next(sample);
        let changed = next != *self;
        *self = next;
        changed
    }

    /// CSS `transition-delay` value; the delay only applies when revealing
    pub fn transition_delay(&self, delay_ms: u32) -> String {
        if self.is_visible() {
            format!("{delay_ms}ms")
        } else {
            "0ms".to_string()
        }
    }

    /// Full class list for a reveal wrapper
    pub fn class_list(&self, direction: RevealDirection, extra: &str) -> String {
        let mut classes = format!("reveal {}", direction.class());
        if self.is_visible() {
            classes.push_str(" visible");
        }
        if !extra.is_empty() {
            classes.push(' ');
            classes.push_str(extra);
        }
        classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entering() -> IntersectionSample {
        IntersectionSample {
            is_intersecting: true,
            top: 400.0,
        }
    }

    fn below_viewport() -> IntersectionSample {
        IntersectionSample {
            is_intersecting: false,
            top: 900.0,
        }
    }

    fn above_viewport() -> IntersectionSample {
        IntersectionSample {
            is_intersecting: false,
            top: -600.0,
        }
    }

    #[test]
    fn test_starts_hidden() {
        assert!(!RevealState::default().is_visible());
    }

    #[test]
    fn test_intersecting_reveals() {
        let mut state = RevealState::Hidden;
        assert!(state.observe(entering()));
        assert!(state.is_visible());
    }

    #[test]
    fn test_reveal_fires_once_per_pass() {
        let mut state = RevealState::Hidden;
        assert!(state.observe(entering()));
        assert!(!state.observe(entering()));
        assert!(state.is_visible());
    }

    #[test]
    fn test_scrolling_back_up_resets() {
        let mut state = RevealState::Visible;
        assert!(state.observe(below_viewport()));
        assert_eq!(state, RevealState::Hidden);
    }

    #[test]
    fn test_scrolling_down_past_keeps_visible() {
        let mut state = RevealState::Visible;
        assert!(!state.observe(above_viewport()));
        assert!(state.is_visible());
    }

    #[test]
    fn test_never_revealed_stays_hidden_without_intersection() {
        let mut state = RevealState::Hidden;
        assert!(!state.observe(below_viewport()));
        assert!(!state.observe(above_viewport()));
        assert!(!state.is_visible());
    }

    #[test]
    fn test_top_exactly_zero_does_not_reset() {
        let sample = IntersectionSample {
            is_intersecting: false,
            top: 0.0,
        };
        assert_eq!(RevealState::Visible.next(sample), RevealState::Visible);
    }

    #[test]
    fn test_repeated_scroll_cycles_retrigger() {
        let mut state = RevealState::Hidden;
        for _ in 0..3 {
            assert!(state.observe(entering()));
            assert!(state.observe(below_viewport()));
        }
        assert_eq!(state, RevealState::Hidden);
    }

    #[test]
    fn test_transition_delay_only_when_visible() {
        assert_eq!(RevealState::Visible.transition_delay(200), "200ms");
        assert_eq!(RevealState::Hidden.transition_delay(200), "0ms");
    }

    #[test]
    fn test_class_list() {
        assert_eq!(
            RevealState::Hidden.class_list(RevealDirection::Left, ""),
            "reveal reveal-left"
        );
        assert_eq!(
            RevealState::Visible.class_list(RevealDirection::Scale, "sm:col-span-2"),
            "reveal reveal-scale visible sm:col-span-2"
        );
    }

    #[test]
    fn test_alternating_direction() {
        assert_eq!(RevealDirection::alternating(0), RevealDirection::Left);
        assert_eq!(RevealDirection::alternating(1), RevealDirection::Right);
        assert_eq!(RevealDirection::alternating(2), RevealDirection::Left);
    }
}
