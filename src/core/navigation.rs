//! Navigation bar state

use super::view::ViewName;

/// Scroll offset (px) after which the bar switches to its condensed style
pub const SCROLL_THRESHOLD_PX: f64 = 15.0;

/// Element id of the pricing section
pub const PRICING_ANCHOR: &str = "priser";

/// Whether the page counts as scrolled at vertical offset `scroll_y`
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD_PX
}

/// Whether moving from `prev` to `next` puts the window back at (0,0).
///
/// `prev` is `None` on first render, which keeps the restored position.
/// Reselecting the active view is not a change.
pub fn resets_scroll(prev: Option<ViewName>, next: ViewName) -> bool {
    prev.is_some_and(|prev| prev != next)
}

/// What the "Kom i gang" button does
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GetStarted {
    PromptLogin,
    ScrollToPricing,
}

impl GetStarted {
    pub fn for_user(authenticated: bool) -> Self {
        if authenticated {
            GetStarted::ScrollToPricing
        } else {
            GetStarted::PromptLogin
        }
    }
}

/// Transient navigation bar state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub scrolled: bool,
    pub mobile_menu_open: bool,
}

impl NavState {
    /// Recompute the scroll flag. Returns whether it changed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = is_scrolled(scroll_y);
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Close the mobile menu. Returns whether it was open.
    pub fn close_menu(&mut self) -> bool {
        std::mem::replace(&mut self.mobile_menu_open, false)
    }

    /// The bar is drawn condensed when scrolled or when the menu is open
    pub fn is_condensed(&self) -> bool {
        self.scrolled || self.mobile_menu_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_threshold_is_exclusive() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(15.0));
        assert!(is_scrolled(15.5));
        assert!(is_scrolled(16.0));
    }

    #[test]
    fn test_on_scroll_reports_changes_only() {
        let mut nav = NavState::default();
        assert!(!nav.on_scroll(10.0));
        assert!(nav.on_scroll(16.0));
        assert!(!nav.on_scroll(400.0));
        assert!(nav.on_scroll(15.0));
        assert!(!nav.scrolled);
    }

    #[test]
    fn test_menu_toggle() {
        let mut nav = NavState::default();
        nav.toggle_menu();
        assert!(nav.mobile_menu_open);
        nav.toggle_menu();
        assert!(!nav.mobile_menu_open);
    }

    #[test]
    fn test_close_menu() {
        let mut nav = NavState {
            scrolled: false,
            mobile_menu_open: true,
        };
        assert!(nav.close_menu());
        assert!(!nav.close_menu());
        assert!(!nav.mobile_menu_open);
    }

    #[test]
    fn test_scrolling_does_not_touch_menu() {
        let mut nav = NavState::default();
        nav.toggle_menu();
        nav.on_scroll(500.0);
        nav.on_scroll(0.0);
        assert!(nav.mobile_menu_open);
    }

    #[test]
    fn test_condensed_when_scrolled_or_menu_open() {
        let mut nav = NavState::default();
        assert!(!nav.is_condensed());
        nav.toggle_menu();
        assert!(nav.is_condensed());
        nav.close_menu();
        nav.on_scroll(100.0);
        assert!(nav.is_condensed());
    }

    #[test]
    fn test_view_change_resets_scroll() {
        assert!(resets_scroll(Some(ViewName::Home), ViewName::Technology));
        assert!(resets_scroll(Some(ViewName::Technology), ViewName::Home));
        assert!(resets_scroll(Some(ViewName::DeepDive), ViewName::Home));
    }

    #[test]
    fn test_same_view_keeps_scroll() {
        for view in ViewName::ALL {
            assert!(!resets_scroll(Some(view), view));
        }
    }

    #[test]
    fn test_first_render_keeps_scroll() {
        assert!(!resets_scroll(None, ViewName::Technology));
    }

    #[test]
    fn test_get_started_action() {
        assert_eq!(GetStarted::for_user(false), GetStarted::PromptLogin);
        assert_eq!(GetStarted::for_user(true), GetStarted::ScrollToPricing);
    }
}
