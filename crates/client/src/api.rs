//! Request bodies and paths of the two relay endpoints.

use formrelay_core::Payload;
use serde::Serialize;

/// Notification flow that forwards the form summary.
pub const FLOW_PATH: &str = "/api/v1/flow/1111";

/// Contact registration.
pub const CONTACT_PATH: &str = "/api/v1/user/contact/add";

pub const SUBMISSION_SUBJECT: &str = "New form submission";

/// Body of `POST /api/v1/flow/1111`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowNotification {
    pub subject: String,
    pub text: String,
    pub project_id: String,
}

impl FlowNotification {
    pub fn from_payload(payload: &Payload, project_id: &str) -> Self {
        Self {
            subject: SUBMISSION_SUBJECT.to_string(),
            text: payload.summary_text(),
            project_id: project_id.to_string(),
        }
    }
}

/// Body of `POST /api/v1/user/contact/add`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub source: String,
    pub project_id: String,
}

impl ContactRecord {
    /// The form id becomes the contact's `source`.
    pub fn from_payload(payload: &Payload, form_id: &str, project_id: &str) -> Self {
        Self {
            email: payload.contact_email().map(str::to_string),
            source: form_id.to_string(),
            project_id: project_id.to_string(),
        }
    }
}
