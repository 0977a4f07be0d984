use leptos::prelude::*;

use crate::core::content::{INFO_CARDS, InfoCard};
use crate::ui::booking_form::AppointmentForm;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="contact">
            <div class="container contact-grid">
                <div class="contact-info">
                    <h2 class="section-title">"Book Your Visit"</h2>
                    <p class="section-subtitle">
                        "Send us a request and we will confirm your appointment by phone or email."
                    </p>
                    {INFO_CARDS
                        .iter()
                        .zip([icons::MAP_PIN, icons::PHONE, icons::CLOCK])
                        .map(|(card, icon)| view! { <InfoCardView card=*card icon=icon/> })
                        .collect_view()}
                </div>
                <AppointmentForm/>
            </div>
        </section>
    }
}

#[component]
fn InfoCardView(card: InfoCard, icon: &'static str) -> impl IntoView {
    let hovered = RwSignal::new(false);

    view! {
        <div
            class="info-card"
            style:z-index=move || if hovered.get() { "5" } else { "" }
            on:mouseenter=move |_| hovered.set(true)
            on:mouseleave=move |_| hovered.set(false)
        >
            <Icon name=icon class="info-icon"/>
            <div>
                <h3>{card.title}</h3>
                {card.lines.iter().map(|line| view! { <p>{*line}</p> }).collect_view()}
            </div>
        </div>
    }
}
