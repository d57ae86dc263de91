//! Submission outcomes and the UI update each one produces.
//!
//! [`UiUpdate::for_outcome`] is the only place that decides what the user
//! sees after a submit attempt, so the whole mapping can be tested without
//! a page.

use serde::Serialize;

use crate::validation::ValidationFailures;

/// A user-visible notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    PreviewUnavailable,
    Sent,
    SendFailed,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::PreviewUnavailable => "This feature is not available in preview mode.",
            Notice::Sent => "Your message has been sent successfully!",
            Notice::SendFailed => {
                "There was an error sending your message. Please try again later."
            }
        }
    }
}

/// Terminal result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one field failed validation; nothing was sent.
    Invalid(ValidationFailures),
    /// The page is a preview; nothing was sent.
    PreviewBlocked,
    /// Both requests completed.
    Delivered,
    /// A request failed or the submission could not be built.
    Failed(String),
}

/// UI changes to apply once an outcome is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiUpdate {
    pub reset_form: bool,
    /// `None` leaves the submit control as it is.
    pub submit_enabled: Option<bool>,
    pub clear_errors: bool,
    pub notice: Option<Notice>,
}

impl UiUpdate {
    pub fn for_outcome(outcome: &SubmitOutcome) -> Self {
        match outcome {
            SubmitOutcome::Invalid(_) => Self {
                reset_form: false,
                submit_enabled: None,
                clear_errors: false,
                notice: None,
            },
            SubmitOutcome::PreviewBlocked => Self {
                reset_form: false,
                submit_enabled: None,
                clear_errors: false,
                notice: Some(Notice::PreviewUnavailable),
            },
            SubmitOutcome::Delivered => Self {
                reset_form: true,
                submit_enabled: Some(true),
                clear_errors: true,
                notice: Some(Notice::Sent),
            },
            SubmitOutcome::Failed(_) => Self {
                reset_form: true,
                submit_enabled: Some(true),
                clear_errors: false,
                notice: Some(Notice::SendFailed),
            },
        }
    }
}
