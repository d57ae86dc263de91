//! Validation failure types and the messages each rule reports.

use serde::{Deserialize, Serialize};

use crate::field::ValidatorKind;

/// Reported when a non-optional field is missing from the payload.
pub const MSG_REQUIRED: &str = "Required";
pub const MSG_EMPTY: &str = "String must contain at least 1 character(s)";
pub const MSG_EMAIL: &str = "Invalid email";
pub const MSG_DATE: &str = "Invalid date";
pub const MSG_TIME: &str = "Invalid time";
pub const MSG_PHONE: &str = "Invalid phone number, check if country code is provided.";

/// The message a kind reports when a present value fails its check.
pub fn failure_message(kind: ValidatorKind) -> Option<&'static str> {
    match kind {
        ValidatorKind::OptionalText => None,
        ValidatorKind::RequiredText => Some(MSG_EMPTY),
        ValidatorKind::Email => Some(MSG_EMAIL),
        ValidatorKind::Date => Some(MSG_DATE),
        ValidatorKind::Time => Some(MSG_TIME),
        ValidatorKind::Phone => Some(MSG_PHONE),
    }
}

/// A single field that failed its rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldFailure {
    pub field: String,
    pub message: String,
}

/// Ordered failures, at most one per field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationFailures(Vec<FieldFailure>);

impl ValidationFailures {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure. A second failure for the same field replaces the
    /// first one's message and keeps its position.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        let message = message.into();
        match self.0.iter_mut().find(|f| f.field == field) {
            Some(existing) => existing.message = message,
            None => self.0.push(FieldFailure { field, message }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldFailure> {
        self.0.iter()
    }

    pub fn get(&self, field: &str) -> Option<&FieldFailure> {
        self.0.iter().find(|f| f.field == field)
    }
}

impl<'a> IntoIterator for &'a ValidationFailures {
    type Item = &'a FieldFailure;
    type IntoIter = std::slice::Iter<'a, FieldFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_one_failure_per_field() {
        let mut failures = ValidationFailures::new();
        failures.push("email", MSG_REQUIRED);
        failures.push("phone", MSG_PHONE);
        failures.push("email", MSG_EMAIL);

        assert_eq!(failures.len(), 2);
        let fields: Vec<_> = failures.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(fields, vec!["email", "phone"]);
        assert_eq!(failures.get("email").unwrap().message, MSG_EMAIL);
    }

    #[test]
    fn optional_text_has_no_failure_message() {
        assert_eq!(failure_message(ValidatorKind::OptionalText), None);
        assert_eq!(failure_message(ValidatorKind::Time), Some(MSG_TIME));
    }
}
