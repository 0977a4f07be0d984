//! Booking form state and its simulated submission flow.
//!
//! A submission runs in two steps. [`BookingForm::begin_submit`] validates
//! the fields synchronously; a rejected request leaves every field as typed.
//! An accepted one hands back a [`PendingSubmission`] that the page completes
//! with [`BookingForm::complete`] once the simulated latency has elapsed.

use chrono::NaiveDate;
use serde::Serialize;

use super::content::ServiceOption;
use super::validation::{ValidationError, is_past_date, is_valid_email, is_valid_phone};

pub const SUBMIT_LABEL: &str = "Book Appointment";
pub const PROCESSING_LABEL: &str = "Processing...";
pub const SUCCESS_MESSAGE: &str = "Thank you! Your booking request has been received. \
     We will contact you shortly to confirm your appointment.";

/// Suffixes dropped from a package name to get its service keyword
const PACKAGE_SUFFIXES: [&str; 3] = [" package", " retreat", " indulgence"];

/// Field values of the booking form
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// `YYYY-MM-DD`, as the date input reports it
    pub date: String,
    pub service: String,
    /// Optional free-text notes
    pub message: String,
}

impl BookingRequest {
    /// Every field except the free-text message is required
    pub fn has_required_fields(&self) -> bool {
        [&self.name, &self.email, &self.phone, &self.date, &self.service]
            .iter()
            .all(|field| !field.is_empty())
    }

    /// Checks run in a fixed order and the first failure wins: appointment
    /// date, required fields, email, phone.
    pub fn validate(&self, today: NaiveDate) -> Result<(), ValidationError> {
        if is_past_date(&self.date, today) {
            return Err(ValidationError::PastDate);
        }
        if !self.has_required_fields() {
            return Err(ValidationError::MissingRequired);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if !is_valid_phone(&self.phone) {
            return Err(ValidationError::InvalidPhone);
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn class(&self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

/// Inline status message under the form
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormMessage {
    /// Distinguishes this message from ones shown later, so a stale
    /// auto-hide timer leaves a newer message alone
    pub id: u64,
    pub text: String,
    pub kind: MessageKind,
}

/// Snapshot of an accepted request, waiting for the simulated latency
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSubmission {
    request: BookingRequest,
}

impl PendingSubmission {
    pub fn request(&self) -> &BookingRequest {
        &self.request
    }

    /// JSON rendering of the request for the console log
    pub fn to_log_line(&self) -> String {
        serde_json::to_string(&self.request).unwrap_or_else(|_| format!("{:?}", self.request))
    }
}

/// Outcome of a completed submission
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Confirmation {
    /// Id of the success message, for the delayed hide
    pub message_id: u64,
    /// The submitted request as logged to the console
    pub log_line: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingForm {
    pub request: BookingRequest,
    pub button_label: String,
    pub button_disabled: bool,
    pub message: Option<FormMessage>,
    next_message_id: u64,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self {
            request: BookingRequest::default(),
            button_label: SUBMIT_LABEL.to_string(),
            button_disabled: false,
            message: None,
            next_message_id: 0,
        }
    }
}

impl BookingForm {
    pub fn with_request(request: BookingRequest) -> Self {
        Self {
            request,
            ..Self::default()
        }
    }

    /// Validate and lock the form.
    ///
    /// On rejection the button is restored, an error message is shown and
    /// the fields are kept.
    pub fn begin_submit(&mut self, today: NaiveDate) -> Result<PendingSubmission, ValidationError> {
        self.button_label = PROCESSING_LABEL.to_string();
        self.button_disabled = true;

        if let Err(err) = self.request.validate(today) {
            self.show_message(err.to_string(), MessageKind::Error);
            self.restore_button();
            return Err(err);
        }

        Ok(PendingSubmission {
            request: self.request.clone(),
        })
    }

    /// Accept a pending submission: confirm, clear the fields and unlock the
    /// button. The confirmation carries the submitted request's log line.
    pub fn complete(&mut self, pending: PendingSubmission) -> Confirmation {
        let log_line = pending.to_log_line();
        let message_id = self.show_message(SUCCESS_MESSAGE.to_string(), MessageKind::Success);
        self.request = BookingRequest::default();
        self.restore_button();
        Confirmation {
            message_id,
            log_line,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.button_disabled
    }

    /// Hide the message with `id`; a newer message stays visible
    pub fn hide_message(&mut self, id: u64) -> bool {
        if self.message.as_ref().is_some_and(|m| m.id == id) {
            self.message = None;
            true
        } else {
            false
        }
    }

    /// Close button on the inline message
    pub fn dismiss_message(&mut self) {
        self.message = None;
    }

    fn show_message(&mut self, text: String, kind: MessageKind) -> u64 {
        self.next_message_id += 1;
        let id = self.next_message_id;
        self.message = Some(FormMessage { id, text, kind });
        id
    }

    fn restore_button(&mut self) {
        self.button_label = SUBMIT_LABEL.to_string();
        self.button_disabled = false;
    }
}

/// Service keyword of a package: lowercase name with the first occurrence of
/// each known suffix removed
pub fn package_key(package_name: &str) -> String {
    PACKAGE_SUFFIXES
        .iter()
        .fold(package_name.to_lowercase(), |name, suffix| name.replacen(suffix, "", 1))
}

/// First option whose value contains the package key, or whose label does
/// case-insensitively
pub fn match_package_option<'a>(
    package_name: &str,
    options: &'a [ServiceOption],
) -> Option<&'a ServiceOption> {
    let key = package_key(package_name);
    if key.is_empty() {
        return None;
    }
    options
        .iter()
        .find(|option| option.value.contains(&key) || option.label.to_lowercase().contains(&key))
}
