use leptos::prelude::*;

use crate::core::content::{GALLERY, GalleryItem};
use crate::core::timing::PRESS_FEEDBACK_MS;
use crate::ui::dom;

#[component]
pub fn Gallery() -> impl IntoView {
    view! {
        <section id="gallery" class="gallery">
            <div class="container">
                <h2 class="section-title">"Step Inside"</h2>
                <div class="gallery-grid">
                    {GALLERY
                        .iter()
                        .enumerate()
                        .map(|(index, item)| view! { <GalleryTile item=*item index=index/> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Tiles fade in one after another and give a short press feedback on click
#[component]
fn GalleryTile(item: GalleryItem, index: usize) -> impl IntoView {
    let pressed = RwSignal::new(false);
    let delay = format!("{:.1}s", index as f64 * 0.1);

    view! {
        <figure
            class="gallery-item"
            style:animation-delay=delay
            style:transform=move || if pressed.get() { "scale(0.95)" } else { "" }
            on:click=move |_| {
                pressed.set(true);
                dom::after(PRESS_FEEDBACK_MS, move || pressed.set(false));
            }
        >
            <img src=item.image alt=item.caption loading="lazy"/>
            <figcaption>{item.caption}</figcaption>
        </figure>
    }
}
