#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::core::booking::{PROCESSING_LABEL, SUBMIT_LABEL, SUCCESS_MESSAGE};
    use crate::core::content::{PACKAGES, SERVICE_OPTIONS};
    use crate::core::timing::{BOOKING_SUBMIT_DELAY_MS, NEWSLETTER_SUCCESS_MS};
    use crate::core::{
        BookingForm, BookingRequest, Feedback, MessageKind, NavMenu, NewsletterButton,
        ValidationError,
    };

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn filled_form() -> BookingForm {
        BookingForm::with_request(BookingRequest {
            name: "Grace Hopper".to_string(),
            email: "grace@example.com".to_string(),
            phone: "(555) 010-0199".to_string(),
            date: "2026-10-25".to_string(),
            service: "hot-stone".to_string(),
            message: "Prefers a quiet room".to_string(),
        })
    }

    #[test]
    fn test_past_date_is_rejected_and_form_kept() {
        let mut form = filled_form();
        form.request.date = "2026-10-17".to_string();
        let typed = form.request.clone();

        let result = form.begin_submit(today());

        assert_eq!(result, Err(ValidationError::PastDate));
        assert_eq!(form.request, typed);
        let message = form.message.as_ref().unwrap();
        assert_eq!(message.kind, MessageKind::Error);
        assert_eq!(
            message.text,
            "Please select a future date for your appointment."
        );
    }

    #[test]
    fn test_invalid_email_never_reaches_success() {
        let mut form = filled_form();
        form.request.email = "grace-at-example.com".to_string();

        let result = form.begin_submit(today());

        assert_eq!(result, Err(ValidationError::InvalidEmail));
        assert_ne!(form.message.as_ref().map(|m| m.kind), Some(MessageKind::Success));
        assert_eq!(form.button_label, SUBMIT_LABEL);
        assert_eq!(form.request.email, "grace-at-example.com");
    }

    #[test]
    fn test_valid_submission_succeeds_after_delay_and_clears() {
        let mut form = filled_form();

        let pending = form.begin_submit(today()).expect("all fields valid");
        // While the simulated request is in flight
        assert_eq!(form.button_label, PROCESSING_LABEL);
        assert!(form.button_disabled);
        assert!(form.message.is_none());
        assert!(BOOKING_SUBMIT_DELAY_MS > 0);

        // Timer fires
        let confirmation = form.complete(pending);
        let id = confirmation.message_id;
        assert!(confirmation.log_line.contains("grace@example.com"));

        let message = form.message.as_ref().unwrap();
        assert_eq!(message.id, id);
        assert_eq!(message.kind, MessageKind::Success);
        assert_eq!(message.text, SUCCESS_MESSAGE);
        assert_eq!(form.request, BookingRequest::default());
        assert_eq!(form.button_label, SUBMIT_LABEL);
        assert!(!form.button_disabled);

        // Auto-hide
        assert!(form.hide_message(id));
        assert!(form.message.is_none());
    }

    #[test]
    fn test_booking_for_today_is_accepted() {
        let mut form = filled_form();
        form.request.date = "2026-10-18".to_string();
        assert!(form.begin_submit(today()).is_ok());
    }

    #[test]
    fn test_package_preselection_produces_bookable_request() {
        let package = PACKAGES.iter().find(|p| p.featured).unwrap();
        let option =
            crate::core::booking::match_package_option(package.name, SERVICE_OPTIONS).unwrap();

        let mut form = filled_form();
        form.request.service = option.value.to_string();
        assert!(form.begin_submit(today()).is_ok());
    }

    #[test]
    fn test_newsletter_acknowledges_then_reverts() {
        let mut button = NewsletterButton::default();

        let ticket = button.submit("news@example.com");
        assert_eq!(button.feedback().label(), "Subscribed!");
        assert_eq!(ticket.feedback.revert_after_ms(), NEWSLETTER_SUCCESS_MS);

        let clear_input = button.revert(ticket);
        assert!(clear_input);
        assert_eq!(button.feedback(), Feedback::Idle);
        assert_eq!(button.feedback().label(), "Subscribe");
    }

    #[test]
    fn test_menu_open_then_wide_resize_closes() {
        let mut menu = NavMenu::default();
        menu.toggle();
        assert!(menu.is_open());

        menu.on_resize(1280.0);

        assert!(!menu.is_open());
        assert_eq!(menu.body_overflow(), "");
    }
}
