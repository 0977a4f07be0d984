use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::core::NewsletterButton;
use crate::ui::dom;

/// Footer signup. The button itself reports the outcome for a few seconds.
#[component]
pub fn NewsletterForm() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let button = RwSignal::new(NewsletterButton::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let address = email.get_untracked();
        let Some(ticket) = button.try_update(|b| b.submit(&address)) else {
            return;
        };
        dom::after(ticket.feedback.revert_after_ms(), move || {
            if button.try_update(|b| b.revert(ticket)).unwrap_or(false) {
                email.set(String::new());
            }
        });
    };

    view! {
        <form class="newsletter-form" novalidate=true on:submit=on_submit>
            <input
                type="email"
                name="newsletter-email"
                placeholder="Your email address"
                aria-label="Email address"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <button
                type="submit"
                style:background=move || button.with(|b| b.feedback().background().unwrap_or(""))
            >
                {move || button.with(|b| b.feedback().label())}
            </button>
        </form>
    }
}
