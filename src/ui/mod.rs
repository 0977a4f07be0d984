//! Leptos components for the spa site and the browser glue they need

pub mod booking_form;
pub mod common;
pub mod dom;
pub mod icon;
pub mod loading_screen;
pub mod navbar;
pub mod newsletter_form;
pub mod pages;
pub mod reveal;
pub mod sections;

pub use icon::{Icon, icons};
pub use pages::{HomePage, NotFoundPage};
