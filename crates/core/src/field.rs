//! Field descriptors and the fixed set of validator kinds.
//!
//! A form control declares its rule through a `data-validator` attribute.
//! The presentation layer turns each control into a [`FieldDescriptor`]
//! before validation runs; attribute values outside the known set are
//! rejected here rather than silently skipping validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The rule applied to a single field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidatorKind {
    #[serde(rename = "textOptional")]
    OptionalText,
    #[serde(rename = "textRequired")]
    RequiredText,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "date")]
    Date,
    #[serde(rename = "time")]
    Time,
    #[serde(rename = "phone")]
    Phone,
}

impl ValidatorKind {
    /// All kinds, in attribute-table order.
    pub const ALL: [ValidatorKind; 6] = [
        ValidatorKind::OptionalText,
        ValidatorKind::RequiredText,
        ValidatorKind::Email,
        ValidatorKind::Date,
        ValidatorKind::Time,
        ValidatorKind::Phone,
    ];

    /// The `data-validator` attribute spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            ValidatorKind::OptionalText => "textOptional",
            ValidatorKind::RequiredText => "textRequired",
            ValidatorKind::Email => "email",
            ValidatorKind::Date => "date",
            ValidatorKind::Time => "time",
            ValidatorKind::Phone => "phone",
        }
    }

    /// Whether an absent or empty value is acceptable.
    pub fn is_optional(self) -> bool {
        matches!(self, ValidatorKind::OptionalText)
    }
}

impl fmt::Display for ValidatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when an attribute value names no known validator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown validator kind `{0}`")]
pub struct UnknownKind(pub String);

impl FromStr for ValidatorKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ValidatorKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

/// A form field paired with the rule its value must satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub kind: ValidatorKind,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, kind: ValidatorKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Build a descriptor from raw control attributes.
    ///
    /// A missing attribute is treated the same as an unknown one: both are
    /// configuration errors on the page.
    pub fn from_attributes(name: &str, validator: Option<&str>) -> Result<Self, CoreError> {
        let raw = validator.unwrap_or_default();
        let kind = raw
            .parse::<ValidatorKind>()
            .map_err(|_| CoreError::UnknownValidator {
                field: name.to_string(),
                kind: raw.to_string(),
            })?;
        Ok(Self::new(name, kind))
    }
}
