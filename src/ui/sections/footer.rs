use leptos::prelude::*;

use crate::ui::common::AnchorLink;
use crate::ui::newsletter_form::NewsletterForm;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <h3>"Serenity"</h3>
                    <p>"Day spa & wellness retreat"</p>
                </div>
                <nav class="footer-links" aria-label="Footer">
                    <AnchorLink href="#services">"Treatments"</AnchorLink>
                    <AnchorLink href="#packages">"Packages"</AnchorLink>
                    <AnchorLink href="#contact">"Book"</AnchorLink>
                    <AnchorLink href="#">"Back to top"</AnchorLink>
                </nav>
                <div class="footer-newsletter">
                    <h4>"Stay in touch"</h4>
                    <p>"Seasonal offers and wellness notes, once a month."</p>
                    <NewsletterForm/>
                </div>
            </div>
            <p class="footer-copy">"© 2026 Serenity Spa. All rights reserved."</p>
        </footer>
    }
}
