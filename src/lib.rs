//! Serenity - Day Spa Website
//!
//! The marketing and booking site for a day spa, built with Leptos and
//! WebAssembly: smooth-scrolling navigation, reveal-on-scroll animations,
//! parallax, and client-side validation of the booking and newsletter forms.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
