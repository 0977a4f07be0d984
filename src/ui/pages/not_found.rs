//! Fallback page for unknown paths

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <Icon name=icons::LEAF class="not-found-icon"/>

            <h1>"404"</h1>
            <h2>"This room is empty"</h2>
            <p>"We couldn't find that page. Head back to the lobby to browse treatments."</p>

            <A href="/" attr:class="cta-button">
                "Back to Serenity"
            </A>
        </div>
    }
}
