//! Validation and submission flow for one submit event.
//!
//! [`FormRelay::handle_submit`] runs the phases in order:
//!
//! 1. collect descriptors and values from the surface,
//! 2. validate; failures are rendered inline and end the attempt,
//! 3. otherwise [`FormRelay::submit`] posts to both endpoints,
//! 4. the outcome is turned into a [`UiUpdate`] and applied.
//!
//! Both requests are sequential and nothing is retried.

use formrelay_core::render::render_errors;
use formrelay_core::{evaluate, CoreError, Payload, SubmitOutcome, UiUpdate};

use crate::api::{ContactRecord, FlowNotification, CONTACT_PATH, FLOW_PATH};
use crate::config::RelayConfig;
use crate::surface::{apply_update, FormSurface};
use crate::transport::{Transport, TransportError};

/// Error type for a submission that could not complete.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("POST {endpoint} failed: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: TransportError,
    },
}

/// Relays validated forms to the notification and contact endpoints.
pub struct FormRelay<T> {
    transport: T,
    config: RelayConfig,
}

impl<T: Transport> FormRelay<T> {
    pub fn new(transport: T, config: RelayConfig) -> Self {
        Self { transport, config }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Handle one submit event end to end.
    ///
    /// Returns `Err` only for page configuration problems such as an unknown
    /// validator kind; every other result is a [`SubmitOutcome`] that has
    /// already been reflected on the surface.
    pub async fn handle_submit<F: FormSurface + ?Sized>(
        &self,
        form: &mut F,
    ) -> Result<SubmitOutcome, CoreError> {
        let form_id = form.form_id().to_string();
        let descriptors = form.descriptors()?;
        let payload = form.payload();

        let outcome = match evaluate(&descriptors, &payload) {
            Err(failures) => {
                render_errors(&form_id, &descriptors, &failures, form);
                SubmitOutcome::Invalid(failures)
            }
            Ok(()) => self.submit(form, &payload).await,
        };

        apply_update(form, &form_id, &descriptors, &UiUpdate::for_outcome(&outcome));
        Ok(outcome)
    }

    /// Post a validated payload.
    ///
    /// Disables the submit control before the first request. Re-enabling it
    /// is part of the UI update for the returned outcome.
    pub async fn submit<F: FormSurface + ?Sized>(
        &self,
        form: &mut F,
        payload: &Payload,
    ) -> SubmitOutcome {
        let form_id = form.form_id().to_string();

        if form.is_preview() {
            tracing::info!(form_id = %form_id, "Submission blocked in preview mode");
            return SubmitOutcome::PreviewBlocked;
        }

        let Some(project_id) = form.project_id() else {
            let err = SubmitError::from(CoreError::MissingProjectId);
            tracing::error!(form_id = %form_id, error = %err, "Form submission failed");
            return SubmitOutcome::Failed(err.to_string());
        };

        form.set_submit_enabled(false);

        match self.deliver(&form_id, &project_id, payload).await {
            Ok(()) => {
                tracing::info!(form_id = %form_id, "Form submission delivered");
                SubmitOutcome::Delivered
            }
            Err(err) => {
                tracing::error!(form_id = %form_id, error = %err, "Form submission failed");
                SubmitOutcome::Failed(err.to_string())
            }
        }
    }

    async fn deliver(
        &self,
        form_id: &str,
        project_id: &str,
        payload: &Payload,
    ) -> Result<(), SubmitError> {
        let notification = FlowNotification::from_payload(payload, project_id);
        self.post(FLOW_PATH, serde_json::to_value(&notification)?).await?;

        let contact = ContactRecord::from_payload(payload, form_id, project_id);
        self.post(CONTACT_PATH, serde_json::to_value(&contact)?).await?;

        Ok(())
    }

    async fn post(
        &self,
        endpoint: &'static str,
        body: serde_json::Value,
    ) -> Result<(), SubmitError> {
        let url = self.config.endpoint(endpoint);
        let status = self
            .transport
            .post_json(&url, &body)
            .await
            .map_err(|source| SubmitError::Transport { endpoint, source })?;

        if (200..300).contains(&status) {
            return Ok(());
        }
        if self.config.strict_status {
            return Err(SubmitError::Transport {
                endpoint,
                source: TransportError::HttpStatus(status),
            });
        }
        tracing::warn!(endpoint, status, "Endpoint returned non-success status, continuing");
        Ok(())
    }
}
