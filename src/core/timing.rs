//! Fixed delays and page geometry shared by the interactive components.
//!
//! All durations are in milliseconds, all distances in CSS pixels.

/// How long the loading overlay stays up after the page `load` event
pub const LOADING_SCREEN_MS: u32 = 4000;

/// Simulated network latency for a booking request
pub const BOOKING_SUBMIT_DELAY_MS: u32 = 1500;

/// A success message hides itself after this long
pub const FORM_MESSAGE_HIDE_MS: u32 = 10_000;

/// Newsletter button keeps the "Subscribed!" state this long
pub const NEWSLETTER_SUCCESS_MS: u32 = 3000;

/// Newsletter button keeps the "Invalid Email" state this long
pub const NEWSLETTER_INVALID_MS: u32 = 2000;

/// Pressed (scaled down) feedback on cards and gallery items
pub const PRESS_FEEDBACK_MS: u32 = 200;

/// Delay between a package click and the service preselection,
/// roughly the length of the smooth scroll to the contact section
pub const PACKAGE_SELECT_DELAY_MS: u32 = 1000;

/// How long the service select stays highlighted after preselection
pub const SELECT_HIGHLIGHT_MS: u32 = 300;

/// Height of the fixed navbar, subtracted from every anchor scroll target
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// The mobile menu is closed once the viewport grows wider than this
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Past this offset the navbar gets its compact `scrolled` look
pub const NAVBAR_SCROLLED_PX: f64 = 100.0;

/// Past this offset scrolling down slides the navbar out of view
pub const NAVBAR_HIDE_PX: f64 = 500.0;
