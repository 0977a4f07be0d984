//! In-page fragment links with smooth scrolling under the fixed header

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::core::scroll::fragment_target;
use crate::ui::dom;

/// Scroll to the fragment target of `href` if it exists on the page.
///
/// The bare `#` placeholder and missing targets fall through to the
/// browser's default behavior.
pub fn follow_fragment(href: &str, ev: &MouseEvent) {
    if fragment_target(href).is_some_and(dom::scroll_to_section) {
        ev.prevent_default();
    }
}

/// Anchor to a section of the page
#[component]
pub fn AnchorLink(
    href: &'static str,
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <a href=href class=class on:click=move |ev| follow_fragment(href, &ev)>
            {children()}
        </a>
    }
}
