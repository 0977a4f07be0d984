//! Page behavior that does not touch the DOM: form validation and
//! submission flow, navigation and scroll state, reveal settings and content

pub mod booking;
#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
#[cfg(feature = "ssr")]
pub mod error;
pub mod nav;
pub mod newsletter;
pub mod reveal;
pub mod scroll;
pub mod timing;
pub mod validation;
#[cfg(test)]
mod tests;

pub use booking::{
    BookingForm, BookingRequest, Confirmation, FormMessage, MessageKind, PendingSubmission,
};
pub use nav::NavMenu;
pub use newsletter::{Feedback, NewsletterButton};
pub use scroll::{FrameThrottle, NavbarScroll, NavbarState};
pub use validation::ValidationError;
