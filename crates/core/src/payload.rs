//! Submission payload: the flat field-name → value map of one form.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Field values in form traversal order.
///
/// Inserting an existing key replaces its value without moving it, so the
/// summary text keeps the order the controls appear on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(IndexMap<String, String>);

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render every entry as a `key: value` line.
    ///
    /// Values are not escaped; a multi-line textarea value spans several
    /// lines of the summary.
    pub fn summary_text(&self) -> String {
        self.iter()
            .map(|(key, value)| format!("{key}: {value}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The address to register as a contact.
    ///
    /// `from` wins over `email`; empty values are skipped.
    pub fn contact_email(&self) -> Option<&str> {
        ["from", "email"]
            .into_iter()
            .filter_map(|key| self.get(key))
            .find(|value| !value.is_empty())
    }
}

impl<K, V> FromIterator<(K, V)> for Payload
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut payload = Payload::new();
        for (k, v) in iter {
            payload.insert(k, v);
        }
        payload
    }
}
