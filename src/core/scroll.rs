//! Scroll-driven effects: anchor offsets, navbar state, hero parallax and
//! animation-frame throttling.

use super::timing::{HEADER_OFFSET_PX, NAVBAR_HIDE_PX, NAVBAR_SCROLLED_PX};

/// Scroll target for a section at `offset_top`, leaving room for the fixed header
pub fn anchor_offset(offset_top: f64) -> f64 {
    (offset_top - HEADER_OFFSET_PX).max(0.0)
}

/// Extract the element id from an in-page link.
///
/// Returns `None` for the bare `#` placeholder and for anything that is not a
/// fragment link; those clicks are left to the browser.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Visual state of the fixed navbar
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavbarState {
    /// Compact look once the page has scrolled past the hero top
    pub scrolled: bool,
    /// Slid out of view while scrolling down deep into the page
    pub hidden: bool,
}

impl NavbarState {
    pub fn transform(&self) -> &'static str {
        if self.hidden {
            "translateY(-100%)"
        } else {
            "translateY(0)"
        }
    }
}

/// Tracks the previous scroll offset to tell scroll direction
#[derive(Clone, Copy, Debug, Default)]
pub struct NavbarScroll {
    last: f64,
}

impl NavbarScroll {
    pub fn update(&mut self, current: f64) -> NavbarState {
        let state = NavbarState {
            scrolled: current > NAVBAR_SCROLLED_PX,
            hidden: current > self.last && current > NAVBAR_HIDE_PX,
        };
        self.last = current;
        state
    }
}

/// `background-position-y` for the hero at a given scroll offset.
///
/// While the hero is on screen it drifts at half the scroll speed in pixels;
/// below the fold the slower percentage drift is kept.
pub fn hero_background_position(scroll: f64, viewport_height: f64) -> String {
    if scroll < viewport_height {
        format!("{}px", scroll * 0.5)
    } else {
        format!("{}%", 50.0 + scroll * 0.3)
    }
}

/// Coalesces scroll events into at most one pending animation frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameThrottle {
    ticking: bool,
    position: f64,
}

impl FrameThrottle {
    /// Record the latest position. Returns `true` when the caller must
    /// request a new animation frame.
    pub fn schedule(&mut self, position: f64) -> bool {
        self.position = position;
        if self.ticking {
            false
        } else {
            self.ticking = true;
            true
        }
    }

    /// Called from the animation frame: clears the pending flag and yields
    /// the most recent position.
    pub fn take(&mut self) -> f64 {
        self.ticking = false;
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_offset_subtracts_header() {
        assert_eq!(anchor_offset(1000.0), 920.0);
        assert_eq!(anchor_offset(80.0), 0.0);
        assert_eq!(anchor_offset(10.0), 0.0);
    }

    #[test]
    fn test_fragment_target() {
        assert_eq!(fragment_target("#contact"), Some("contact"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target("https://example.com/#contact"), None);
        assert_eq!(fragment_target(""), None);
    }

    #[test]
    fn test_navbar_scrolled_threshold() {
        let mut tracker = NavbarScroll::default();
        assert!(!tracker.update(100.0).scrolled);
        assert!(tracker.update(101.0).scrolled);
        assert!(!tracker.update(0.0).scrolled);
    }

    #[test]
    fn test_navbar_hides_only_when_scrolling_down_past_threshold() {
        let mut tracker = NavbarScroll::default();

        // Down, but not deep enough
        assert!(!tracker.update(400.0).hidden);
        // Down past the threshold
        let state = tracker.update(600.0);
        assert!(state.hidden);
        assert_eq!(state.transform(), "translateY(-100%)");
        // Up, still deep
        let state = tracker.update(550.0);
        assert!(!state.hidden);
        assert_eq!(state.transform(), "translateY(0)");
        // Same offset is not "down"
        assert!(!tracker.update(550.0).hidden);
    }

    #[test]
    fn test_hero_background_position() {
        assert_eq!(hero_background_position(0.0, 900.0), "0px");
        assert_eq!(hero_background_position(200.0, 900.0), "100px");
        assert_eq!(hero_background_position(1000.0, 900.0), "350%");
    }

    #[test]
    fn test_hero_background_switches_at_viewport_height() {
        assert_eq!(hero_background_position(899.0, 900.0), "449.5px");
        assert_eq!(hero_background_position(900.0, 900.0), "320%");
    }

    #[test]
    fn test_frame_throttle_coalesces() {
        let mut throttle = FrameThrottle::default();

        assert!(throttle.schedule(10.0));
        assert!(!throttle.schedule(20.0));
        assert!(!throttle.schedule(30.0));

        assert_eq!(throttle.take(), 30.0);
        assert!(throttle.schedule(40.0));
    }
}
