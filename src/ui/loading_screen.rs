use leptos::prelude::*;

use crate::core::timing::LOADING_SCREEN_MS;
use crate::ui::dom;
use crate::ui::icon::{Icon, icons};

/// Full-page overlay shown until a fixed delay after the page `load` event
#[component]
pub fn LoadingScreen() -> impl IntoView {
    let visible = RwSignal::new(true);

    Effect::new(move |_| {
        dom::on_page_load(move || dom::after(LOADING_SCREEN_MS, move || visible.set(false)));
    });

    view! {
        <div
            id="loading-screen"
            class="loading-screen"
            style:display=move || if visible.get() { "flex" } else { "none" }
            aria-hidden=move || (!visible.get()).to_string()
        >
            <div class="loading-content">
                <Icon name=icons::LEAF class="loading-icon"/>
                <p class="loading-text">"Serenity"</p>
            </div>
        </div>
    }
}
