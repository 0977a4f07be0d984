//! Field validation for the booking and newsletter forms

use chrono::NaiveDate;
use thiserror::Error;

/// Format produced by `<input type="date">`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Reasons a form submission is rejected. The `Display` text is shown to the
/// visitor as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select a future date for your appointment.")]
    PastDate,
    #[error("Please fill in all required fields.")]
    MissingRequired,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a valid phone number.")]
    InvalidPhone,
}

/// Whitespace as browsers match it in patterns: Unicode `White_Space`
/// without NEL, plus the byte order mark
fn is_pattern_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// `local@domain.tld` shape check.
///
/// No whitespace anywhere, exactly one `@` with a non-empty local part, and a
/// domain holding a dot with at least one character on each side.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(is_pattern_space) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Digits, whitespace and `+ - ( )` only; at least one character
pub fn is_valid_phone(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || is_pattern_space(c) || matches!(c, '+' | '-' | '(' | ')'))
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// A date strictly before `today`. Unparseable input is never "past".
pub fn is_past_date(value: &str, today: NaiveDate) -> bool {
    parse_date(value).is_some_and(|date| date < today)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("guest@example.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last+spa@mail.example.co.uk"));
        assert!(is_valid_email("x@sub..domain"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("guest"));
        assert!(!is_valid_email("guest@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("guest@.com"));
        assert!(!is_valid_email("guest@example."));
        assert!(!is_valid_email("guest@@example.com"));
        assert!(!is_valid_email("gu est@example.com"));
        assert!(!is_valid_email("guest@exa mple.com"));
        assert!(!is_valid_email("gu\u{a0}est@example.com"));
        assert!(!is_valid_email("gu\u{feff}est@example.com"));
    }

    #[test]
    fn test_valid_phones() {
        assert!(is_valid_phone("555-0100"));
        assert!(is_valid_phone("+1 (555) 010-0199"));
        assert!(is_valid_phone("0123456789"));
        assert!(is_valid_phone("555\u{feff}0100"));
    }

    #[test]
    fn test_invalid_phones() {
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("555-CALL-NOW"));
        assert!(!is_valid_phone("555.0100"));
        assert!(!is_valid_phone("ext#12"));
        assert!(!is_valid_phone("555\u{85}0100"));
    }

    #[test]
    fn test_past_date() {
        let today = day(2026, 3, 15);
        assert!(is_past_date("2026-03-14", today));
        assert!(!is_past_date("2026-03-15", today));
        assert!(!is_past_date("2026-04-01", today));
    }

    #[test]
    fn test_unparseable_date_is_not_past() {
        let today = day(2026, 3, 15);
        assert!(!is_past_date("", today));
        assert!(!is_past_date("next tuesday", today));
        assert!(!is_past_date("2026-02-30", today));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::PastDate.to_string(),
            "Please select a future date for your appointment."
        );
        assert_eq!(
            ValidationError::InvalidPhone.to_string(),
            "Please enter a valid phone number."
        );
    }
}
