use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::core::content::{PACKAGES, Package};
use crate::core::timing::{PACKAGE_SELECT_DELAY_MS, PRESS_FEEDBACK_MS};
use crate::ui::booking_form::use_booking_context;
use crate::ui::dom;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn Packages() -> impl IntoView {
    view! {
        <section id="packages" class="packages">
            <div class="container">
                <h2 class="section-title">"Spa Packages"</h2>
                <p class="section-subtitle">"Combine treatments and save."</p>
                <div class="packages-grid">
                    {PACKAGES.iter().map(|package| view! { <PackageCard package=*package/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PackageCard(package: Package) -> impl IntoView {
    let booking = use_booking_context();
    let pressed = RwSignal::new(false);

    // Press the card, travel to the booking form, then preselect the package
    // once the scroll has roughly settled
    let on_choose = move |ev: MouseEvent| {
        ev.prevent_default();

        pressed.set(true);
        dom::after(PRESS_FEEDBACK_MS, move || pressed.set(false));

        dom::scroll_to_section("contact");
        dom::after(PACKAGE_SELECT_DELAY_MS, move || booking.preselect_package(package.name));
    };

    view! {
        <article
            class="package-card"
            class:featured=package.featured
            style:transform=move || if pressed.get() { "scale(0.95)" } else { "" }
        >
            {package.featured.then(|| view! { <span class="package-badge">"Most Popular"</span> })}
            <h3>{package.name}</h3>
            <p class="package-tagline">{package.tagline}</p>
            <p class="package-price">{package.price}</p>
            <ul class="package-features">
                {package
                    .features
                    .iter()
                    .map(|feature| view! {
                        <li>
                            <Icon name=icons::CHECK class="icon-sm"/>
                            {*feature}
                        </li>
                    })
                    .collect_view()}
            </ul>
            <a href="#contact" class="package-button" on:click=on_choose>
                "Choose Package"
            </a>
        </article>
    }
}
