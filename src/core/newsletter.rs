//! Newsletter signup button feedback

use super::timing::{NEWSLETTER_INVALID_MS, NEWSLETTER_SUCCESS_MS};
use super::validation::is_valid_email;

pub const SUBSCRIBE_LABEL: &str = "Subscribe";

/// What the subscribe button is currently telling the visitor
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Feedback {
    #[default]
    Idle,
    Subscribed,
    Invalid,
}

impl Feedback {
    pub fn label(&self) -> &'static str {
        match self {
            Feedback::Idle => SUBSCRIBE_LABEL,
            Feedback::Subscribed => "Subscribed!",
            Feedback::Invalid => "Invalid Email",
        }
    }

    /// Inline background override; `None` keeps the stylesheet color
    pub fn background(&self) -> Option<&'static str> {
        match self {
            Feedback::Idle => None,
            Feedback::Subscribed => Some("#4caf50"),
            Feedback::Invalid => Some("#f44336"),
        }
    }

    /// How long the feedback stays before reverting to idle
    pub fn revert_after_ms(&self) -> u32 {
        match self {
            Feedback::Idle => 0,
            Feedback::Subscribed => NEWSLETTER_SUCCESS_MS,
            Feedback::Invalid => NEWSLETTER_INVALID_MS,
        }
    }
}

/// Issued on every submit; the matching revert is ignored once a newer
/// submit has replaced the feedback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeedbackTicket {
    generation: u64,
    pub feedback: Feedback,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NewsletterButton {
    feedback: Feedback,
    generation: u64,
}

impl NewsletterButton {
    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    pub fn submit(&mut self, email: &str) -> FeedbackTicket {
        self.feedback = if is_valid_email(email) {
            Feedback::Subscribed
        } else {
            Feedback::Invalid
        };
        self.generation += 1;
        FeedbackTicket {
            generation: self.generation,
            feedback: self.feedback,
        }
    }

    /// Return to idle if `ticket` is still current. Returns `true` when the
    /// email input should be cleared, which happens after a successful
    /// subscription only.
    pub fn revert(&mut self, ticket: FeedbackTicket) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.feedback = Feedback::Idle;
        ticket.feedback == Feedback::Subscribed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email_subscribes_then_reverts() {
        let mut button = NewsletterButton::default();
        assert_eq!(button.feedback().label(), "Subscribe");

        let ticket = button.submit("guest@example.com");
        assert_eq!(ticket.feedback, Feedback::Subscribed);
        assert_eq!(button.feedback().label(), "Subscribed!");
        assert_eq!(button.feedback().background(), Some("#4caf50"));
        assert_eq!(ticket.feedback.revert_after_ms(), 3000);

        assert!(button.revert(ticket));
        assert_eq!(button.feedback(), Feedback::Idle);
        assert_eq!(button.feedback().background(), None);
    }

    #[test]
    fn test_invalid_email_flags_then_reverts_without_clearing() {
        let mut button = NewsletterButton::default();

        let ticket = button.submit("nope");
        assert_eq!(button.feedback().label(), "Invalid Email");
        assert_eq!(button.feedback().background(), Some("#f44336"));
        assert_eq!(ticket.feedback.revert_after_ms(), 2000);

        assert!(!button.revert(ticket));
        assert_eq!(button.feedback().label(), "Subscribe");
    }

    #[test]
    fn test_empty_email_is_invalid() {
        let mut button = NewsletterButton::default();
        assert_eq!(button.submit("").feedback, Feedback::Invalid);
    }

    #[test]
    fn test_stale_revert_is_ignored() {
        let mut button = NewsletterButton::default();

        let first = button.submit("bad");
        let second = button.submit("guest@example.com");

        assert!(!button.revert(first));
        assert_eq!(button.feedback(), Feedback::Subscribed);

        assert!(button.revert(second));
        assert_eq!(button.feedback(), Feedback::Idle);
    }
}
