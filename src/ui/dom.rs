//! Thin wrappers over the browser APIs the page needs.
//!
//! During server rendering every helper is a no-op (or returns a neutral
//! value), so components can call them from handlers without gating.

use chrono::NaiveDate;
use leptos::html;
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use wasm_bindgen::{JsCast, closure::Closure};

/// Run `f` once after `ms` milliseconds
pub fn after(ms: u32, f: impl FnOnce() + 'static) {
    #[cfg(not(feature = "ssr"))]
    {
        gloo_timers::callback::Timeout::new(ms, f).forget();
    }
    #[cfg(feature = "ssr")]
    {
        let _ = (ms, f);
    }
}

/// Run `f` on the next animation frame
pub fn next_frame(f: impl FnOnce() + 'static) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            let callback = Closure::once_into_js(f);
            let _ = window.request_animation_frame(callback.unchecked_ref());
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = f;
    }
}

/// Run `f` once the page has fully loaded, or right away if it already has
pub fn on_page_load(f: impl FnOnce() + 'static) {
    #[cfg(not(feature = "ssr"))]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let loaded = window
            .document()
            .is_some_and(|document| document.ready_state() == "complete");
        if loaded {
            f();
        } else {
            let callback = Closure::once_into_js(f);
            let _ = window.add_event_listener_with_callback("load", callback.unchecked_ref());
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = f;
    }
}

pub fn scroll_y() -> f64 {
    #[cfg(not(feature = "ssr"))]
    {
        web_sys::window()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or(0.0)
    }
    #[cfg(feature = "ssr")]
    {
        0.0
    }
}

pub fn viewport_width() -> f64 {
    #[cfg(not(feature = "ssr"))]
    {
        web_sys::window()
            .and_then(|window| window.inner_width().ok())
            .and_then(|width| width.as_f64())
            .unwrap_or(0.0)
    }
    #[cfg(feature = "ssr")]
    {
        0.0
    }
}

pub fn viewport_height() -> f64 {
    #[cfg(not(feature = "ssr"))]
    {
        web_sys::window()
            .and_then(|window| window.inner_height().ok())
            .and_then(|height| height.as_f64())
            .unwrap_or(0.0)
    }
    #[cfg(feature = "ssr")]
    {
        0.0
    }
}

/// Smoothly scroll the window to `top`
pub fn smooth_scroll_to(top: f64) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = top;
    }
}

/// Smoothly scroll to the element with `id`, below the fixed header.
/// Returns `false` if no such element exists.
pub fn scroll_to_section(id: &str) -> bool {
    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::scroll::anchor_offset;

        let target = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(id))
            .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok());
        match target {
            Some(element) => {
                smooth_scroll_to(anchor_offset(element.offset_top() as f64));
                true
            }
            None => false,
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = id;
        false
    }
}

/// Bring an element into view with the least scrolling needed
pub fn scroll_into_view(node: NodeRef<html::Div>) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(element) = node.get_untracked() {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            options.set_block(web_sys::ScrollLogicalPosition::Nearest);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = node;
    }
}

pub fn focus_select(node: NodeRef<html::Select>) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(select) = node.get_untracked() {
            let _ = select.focus();
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = node;
    }
}

/// Set the `overflow` style of `<body>`; an empty value clears it
pub fn set_body_overflow(value: &str) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(body) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
        {
            let _ = body.style().set_property("overflow", value);
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = value;
    }
}

/// The visitor's local calendar date
pub fn today() -> NaiveDate {
    #[cfg(not(feature = "ssr"))]
    {
        let now = js_sys::Date::new_0();
        NaiveDate::from_ymd_opt(
            now.get_full_year() as i32,
            now.get_month() + 1,
            now.get_date(),
        )
        .unwrap_or_default()
    }
    #[cfg(feature = "ssr")]
    {
        chrono::Local::now().date_naive()
    }
}
