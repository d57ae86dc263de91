//! Per-kind predicates and the validation entry point. Pure logic.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use regex::Regex;
use validator::ValidateEmail;

use super::rules::{failure_message, ValidationFailures, MSG_REQUIRED};
use crate::field::{FieldDescriptor, ValidatorKind};
use crate::payload::Payload;

/// Optional `+`, a 1-3 digit country code, then 3-3-4 digit groups
/// separated by an optional space or hyphen.
const PHONE_PATTERN: &str = r"^\+?\d{1,3}[- ]?\d{3}[- ]?\d{3}[- ]?\d{4}$";

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PHONE_PATTERN).expect("valid regex"));

/// Calendar date layouts accepted for `date` fields.
const DATE_FORMATS: [&str; 5] = [
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%d %B %Y",
];

/// Date-time layouts accepted for `date` fields (e.g. `datetime-local`).
const DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

/// Times are parsed on this date so that only the time part can fail.
const TIME_REFERENCE_DATE: &str = "2000-01-01";

const TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %I:%M %p",
    "%Y-%m-%d %I:%M:%S %p",
];

/// Validate every described field against the payload.
///
/// A name declared more than once is checked only against its last declared
/// kind, at the position of its first declaration. Returns failures in that
/// order, one per field.
pub fn evaluate(
    descriptors: &[FieldDescriptor],
    payload: &Payload,
) -> Result<(), ValidationFailures> {
    let schema: IndexMap<&str, ValidatorKind> = descriptors
        .iter()
        .map(|d| (d.name.as_str(), d.kind))
        .collect();

    let mut failures = ValidationFailures::new();

    for (name, kind) in schema {
        if let Some(message) = check_field(kind, payload.get(name)) {
            failures.push(name, message);
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        tracing::debug!(failed = failures.len(), "Form validation failed");
        Err(failures)
    }
}

fn check_field(kind: ValidatorKind, value: Option<&str>) -> Option<&'static str> {
    match value {
        None if kind.is_optional() => None,
        None => Some(MSG_REQUIRED),
        Some(v) if check_value(kind, v) => None,
        Some(_) => failure_message(kind),
    }
}

/// Whether a present value satisfies `kind`.
pub fn check_value(kind: ValidatorKind, value: &str) -> bool {
    match kind {
        ValidatorKind::OptionalText => true,
        ValidatorKind::RequiredText => !value.is_empty(),
        ValidatorKind::Email => value.validate_email() && has_dotted_domain(value),
        ValidatorKind::Date => is_date(value),
        ValidatorKind::Time => is_time(value),
        ValidatorKind::Phone => PHONE_RE.is_match(value),
    }
}

/// The domain part must have at least two labels (`user@domain.tld`).
fn has_dotted_domain(value: &str) -> bool {
    value
        .rsplit_once('@')
        .map(|(_, domain)| domain.split('.').filter(|l| !l.is_empty()).count() >= 2)
        .unwrap_or(false)
}

fn is_date(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }
    DATE_FORMATS
        .iter()
        .any(|fmt| NaiveDate::parse_from_str(value, fmt).is_ok())
        || DATETIME_FORMATS
            .iter()
            .any(|fmt| NaiveDateTime::parse_from_str(value, fmt).is_ok())
        || DateTime::parse_from_rfc3339(value).is_ok()
        || DateTime::parse_from_rfc2822(value).is_ok()
}

fn is_time(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }
    let candidate = format!("{TIME_REFERENCE_DATE} {value}");
    TIME_FORMATS
        .iter()
        .any(|fmt| NaiveDateTime::parse_from_str(&candidate, fmt).is_ok())
}
