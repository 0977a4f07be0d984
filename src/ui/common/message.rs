//! Inline status message for form results

use leptos::html;
use leptos::prelude::*;

use crate::core::{FormMessage, MessageKind};
use crate::ui::{Icon, icons};

/// Dismissable message under a form.
///
/// Always rendered and toggled via `display`, so it can be scrolled into
/// view right after it appears.
#[component]
pub fn FormMessageBanner(
    /// Current message - shown when Some, hidden when None
    #[prop(into)]
    message: Signal<Option<FormMessage>>,
    /// Close button handler
    on_dismiss: Callback<()>,
    /// Handle on the container element
    anchor: NodeRef<html::Div>,
) -> impl IntoView {
    let kind = move || message.with(|m| m.as_ref().map(|m| m.kind));

    view! {
        <div
            node_ref=anchor
            id="form-message"
            class=move || match kind() {
                Some(kind) => format!("form-message {}", kind.class()),
                None => "form-message".to_string(),
            }
            style:display=move || if kind().is_some() { "block" } else { "none" }
            role="status"
            aria-live="polite"
        >
            {move || match kind() {
                Some(MessageKind::Success) => view! { <Icon name=icons::CHECK class="icon-text"/> }.into_any(),
                Some(MessageKind::Error) => view! { <Icon name=icons::ALERT_CIRCLE class="icon-text"/> }.into_any(),
                None => ().into_any(),
            }}
            <span class="form-message-text">
                {move || message.with(|m| m.as_ref().map(|m| m.text.clone()).unwrap_or_default())}
            </span>
            <button
                type="button"
                class="form-message-close"
                aria-label="Dismiss message"
                on:click=move |_| on_dismiss.run(())
            >
                <Icon name=icons::X class="icon-sm"/>
            </button>
        </div>
    }
}
