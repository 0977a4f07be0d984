//! Hero banner with a parallax background and the main call to action

use leptos::prelude::*;

use crate::ui::common::follow_fragment;

const CTA_HREF: &str = "#contact";

#[component]
pub fn Hero() -> impl IntoView {
    let background_y = RwSignal::new(String::new());
    let cta_hovered = RwSignal::new(false);

    // Parallax: scroll events are coalesced into one style write per frame
    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::FrameThrottle;
        use crate::core::scroll::hero_background_position;
        use crate::ui::dom;
        use leptos::ev::scroll;

        let throttle = StoredValue::new(FrameThrottle::default());

        let handle_scroll = window_event_listener(scroll, move |_| {
            let y = dom::scroll_y();
            if !throttle.try_update_value(|t| t.schedule(y)).unwrap_or(false) {
                return;
            }
            dom::next_frame(move || {
                if let Some(position) = throttle.try_update_value(FrameThrottle::take) {
                    background_y.set(hero_background_position(position, dom::viewport_height()));
                }
            });
        });

        on_cleanup(move || handle_scroll.remove());
    }

    view! {
        <section id="home" class="hero" style:background-position-y=move || background_y.get()>
            <div class="hero-overlay"></div>
            <div class="hero-content">
                <p class="hero-eyebrow">"Day Spa & Wellness Retreat"</p>
                <h1 class="hero-title">"Find Your Calm"</h1>
                <p class="hero-subtitle">
                    "Unhurried treatments, quiet rooms and skilled hands. "
                    "Leave the noise at the door."
                </p>
                <a
                    href=CTA_HREF
                    class="cta-button"
                    style:transform=move || {
                        if cta_hovered.get() { "translateY(-4px) scale(1.05)" } else { "" }
                    }
                    on:mouseenter=move |_| cta_hovered.set(true)
                    on:mouseleave=move |_| cta_hovered.set(false)
                    on:click=move |ev| follow_fragment(CTA_HREF, &ev)
                >
                    "Book Your Escape"
                </a>
            </div>
        </section>
    }
}
