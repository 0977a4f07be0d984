use leptos::prelude::*;

use crate::core::content::{SERVICES, Service};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="services">
            <div class="container">
                <h2 class="section-title">"Our Treatments"</h2>
                <p class="section-subtitle">"Each session includes a consultation and tea ritual."</p>
                <div class="services-grid">
                    {SERVICES.iter().map(|service| view! { <ServiceCard service=*service/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Raised above its neighbors while hovered so the hover shadow is not clipped
#[component]
fn ServiceCard(service: Service) -> impl IntoView {
    let hovered = RwSignal::new(false);

    view! {
        <article
            class="service-card"
            style:z-index=move || if hovered.get() { "10" } else { "" }
            on:mouseenter=move |_| hovered.set(true)
            on:mouseleave=move |_| hovered.set(false)
        >
            <Icon name=icons::SPARKLE class="service-icon"/>
            <h3>{service.title}</h3>
            <p>{service.description}</p>
            <div class="service-meta">
                <span class="service-duration">
                    <Icon name=icons::CLOCK class="icon-sm"/>
                    {service.duration}
                </span>
                <span class="service-price">{service.price}</span>
            </div>
        </article>
    }
}
