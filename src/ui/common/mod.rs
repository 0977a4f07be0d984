//! Small components shared across page sections

pub mod anchor;
pub mod message;

pub use anchor::{AnchorLink, follow_fragment};
pub use message::FormMessageBanner;
