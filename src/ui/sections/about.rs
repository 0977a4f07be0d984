use leptos::prelude::*;

use crate::core::content::ABOUT_IMAGE;
use crate::ui::common::AnchorLink;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <div class="container about-grid">
                <div class="about-image">
                    <img src=ABOUT_IMAGE alt="Candlelit treatment room" loading="lazy"/>
                </div>
                <div class="about-text">
                    <h2 class="section-title">"A Sanctuary Close to Home"</h2>
                    <p>
                        "For over a decade our therapists have welcomed guests looking for a "
                        "moment of stillness. Every treatment is tailored on the day, using "
                        "organic oils and locally sourced botanicals."
                    </p>
                    <p>
                        "Whether you have an hour or a whole day, we will help you slow down."
                    </p>
                    <AnchorLink href="#services" class="text-link">"Explore treatments"</AnchorLink>
                </div>
            </div>
        </section>
    }
}
