//! Mobile navigation menu state

use super::timing::MOBILE_BREAKPOINT_PX;

/// Open/closed state of the hamburger menu.
///
/// The hamburger button and the menu panel both render their `active` class
/// from this single flag, so they can never disagree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Close the menu, returning whether it was open
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// React to a viewport resize. Growing past the mobile breakpoint closes
    /// an open menu; returns whether the state changed.
    pub fn on_resize(&mut self, viewport_width: f64) -> bool {
        if viewport_width > MOBILE_BREAKPOINT_PX && self.open {
            self.open = false;
            true
        } else {
            false
        }
    }

    /// Body `overflow` value: page scrolling is locked while the menu is open
    pub fn body_overflow(&self) -> &'static str {
        if self.open { "hidden" } else { "" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_opens_and_closes() {
        let mut menu = NavMenu::default();
        assert!(!menu.is_open());

        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.body_overflow(), "hidden");

        menu.toggle();
        assert!(!menu.is_open());
        assert_eq!(menu.body_overflow(), "");
    }

    #[test]
    fn test_resize_above_breakpoint_closes_open_menu() {
        let mut menu = NavMenu::default();
        menu.toggle();

        assert!(menu.on_resize(1024.0));
        assert!(!menu.is_open());
        assert_eq!(menu.body_overflow(), "");
    }

    #[test]
    fn test_resize_at_breakpoint_keeps_menu_open() {
        let mut menu = NavMenu::default();
        menu.toggle();

        assert!(!menu.on_resize(768.0));
        assert!(!menu.on_resize(400.0));
        assert!(menu.is_open());
    }

    #[test]
    fn test_resize_with_closed_menu_is_noop() {
        let mut menu = NavMenu::default();
        assert!(!menu.on_resize(1920.0));
        assert!(!menu.is_open());
    }

    #[test]
    fn test_close_reports_previous_state() {
        let mut menu = NavMenu::default();
        assert!(!menu.close());

        menu.toggle();
        assert!(menu.close());
        assert!(!menu.is_open());
    }
}
