//! Appointment booking form.
//!
//! Field values live in a shared [`BookingContext`] so the packages section
//! can preselect a service from outside the form.

use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::logging::{log, warn};
use leptos::prelude::*;

use crate::core::booking::match_package_option;
use crate::core::content::SERVICE_OPTIONS;
use crate::core::timing::{BOOKING_SUBMIT_DELAY_MS, FORM_MESSAGE_HIDE_MS, SELECT_HIGHLIGHT_MS};
use crate::core::{BookingForm, BookingRequest};
use crate::ui::common::FormMessageBanner;
use crate::ui::dom;

#[derive(Clone, Copy)]
pub struct BookingContext {
    pub form: RwSignal<BookingForm>,
    /// Brief scale-up of the service select after a preselection
    pub service_highlight: RwSignal<bool>,
    pub service_select: NodeRef<html::Select>,
}

impl BookingContext {
    /// Select the booking option matching a package name, then highlight and
    /// focus the select. Unknown packages leave the form untouched.
    pub fn preselect_package(&self, package_name: &str) {
        let Some(option) = match_package_option(package_name, SERVICE_OPTIONS) else {
            warn!("no booking option for package {package_name:?}");
            return;
        };
        self.form
            .update(|f| f.request.service = option.value.to_string());

        let highlight = self.service_highlight;
        highlight.set(true);
        dom::focus_select(self.service_select);
        dom::after(SELECT_HIGHLIGHT_MS, move || highlight.set(false));
    }
}

pub fn provide_booking_context() -> BookingContext {
    let ctx = BookingContext {
        form: RwSignal::new(BookingForm::default()),
        service_highlight: RwSignal::new(false),
        service_select: NodeRef::new(),
    };
    provide_context(ctx);
    ctx
}

pub fn use_booking_context() -> BookingContext {
    expect_context::<BookingContext>()
}

/// Reactive read of one request field
fn bind(
    form: RwSignal<BookingForm>,
    read: fn(&BookingRequest) -> &String,
) -> impl Fn() -> String + Copy + Send + Sync + 'static {
    move || form.with(|f| read(&f.request).clone())
}

/// Wrapper that lifts slightly while one of its fields has focus
#[component]
fn FormGroup(children: Children) -> impl IntoView {
    let lifted = RwSignal::new(false);

    view! {
        <div
            class="form-group"
            style:transform=move || if lifted.get() { "translateY(-2px)" } else { "" }
            on:focusin=move |_| lifted.set(true)
            on:focusout=move |_| lifted.set(false)
        >
            {children()}
        </div>
    }
}

#[component]
pub fn AppointmentForm() -> impl IntoView {
    let ctx = use_booking_context();
    let form = ctx.form;
    let message_ref = NodeRef::<html::Div>::new();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if form.with_untracked(BookingForm::is_submitting) {
            return;
        }

        let today = dom::today();
        match form.try_update(|f| f.begin_submit(today)) {
            Some(Ok(pending)) => {
                dom::after(BOOKING_SUBMIT_DELAY_MS, move || {
                    let Some(confirmation) = form.try_update(|f| f.complete(pending)) else {
                        return;
                    };
                    log!("Booking request: {}", confirmation.log_line);
                    let id = confirmation.message_id;
                    dom::next_frame(move || dom::scroll_into_view(message_ref));
                    dom::after(FORM_MESSAGE_HIDE_MS, move || {
                        form.update(|f| {
                            f.hide_message(id);
                        });
                    });
                });
            }
            Some(Err(err)) => {
                warn!("booking request rejected: {err}");
                dom::next_frame(move || dom::scroll_into_view(message_ref));
            }
            None => {}
        }
    };

    view! {
        <form id="booking-form" class="booking-form" novalidate=true on:submit=on_submit>
            <div class="form-row">
                <FormGroup>
                    <label for="name">"Full Name *"</label>
                    <input
                        type="text"
                        id="name"
                        name="name"
                        autocomplete="name"
                        placeholder="Jane Doe"
                        prop:value=bind(form, |r| &r.name)
                        on:input=move |ev| form.update(|f| f.request.name = event_target_value(&ev))
                    />
                </FormGroup>
                <FormGroup>
                    <label for="email">"Email *"</label>
                    <input
                        type="email"
                        id="email"
                        name="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        prop:value=bind(form, |r| &r.email)
                        on:input=move |ev| form.update(|f| f.request.email = event_target_value(&ev))
                    />
                </FormGroup>
            </div>

            <div class="form-row">
                <FormGroup>
                    <label for="phone">"Phone *"</label>
                    <input
                        type="tel"
                        id="phone"
                        name="phone"
                        autocomplete="tel"
                        placeholder="+1 (555) 010-0199"
                        prop:value=bind(form, |r| &r.phone)
                        on:input=move |ev| form.update(|f| f.request.phone = event_target_value(&ev))
                    />
                </FormGroup>
                <FormGroup>
                    <label for="date">"Preferred Date *"</label>
                    <input
                        type="date"
                        id="date"
                        name="date"
                        prop:value=bind(form, |r| &r.date)
                        on:input=move |ev| form.update(|f| f.request.date = event_target_value(&ev))
                    />
                </FormGroup>
            </div>

            <FormGroup>
                <label for="service">"Service *"</label>
                <select
                    id="service"
                    name="service"
                    node_ref=ctx.service_select
                    style:transform=move || {
                        if ctx.service_highlight.get() { "scale(1.02)" } else { "" }
                    }
                    prop:value=bind(form, |r| &r.service)
                    on:change=move |ev| form.update(|f| f.request.service = event_target_value(&ev))
                >
                    {SERVICE_OPTIONS
                        .iter()
                        .map(|option| view! { <option value=option.value>{option.label}</option> })
                        .collect_view()}
                </select>
            </FormGroup>

            <FormGroup>
                <label for="message">"Notes"</label>
                <textarea
                    id="message"
                    name="message"
                    rows="4"
                    placeholder="Allergies, preferences or special occasions"
                    prop:value=bind(form, |r| &r.message)
                    on:input=move |ev| form.update(|f| f.request.message = event_target_value(&ev))
                ></textarea>
            </FormGroup>

            <button
                type="submit"
                class="submit-button"
                disabled=move || form.with(|f| f.button_disabled)
            >
                <span>{move || form.with(|f| f.button_label.clone())}</span>
            </button>

            <FormMessageBanner
                message=Signal::derive(move || form.with(|f| f.message.clone()))
                on_dismiss=Callback::new(move |_| form.update(BookingForm::dismiss_message))
                anchor=message_ref
            />
        </form>
    }
}
