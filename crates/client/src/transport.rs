//! HTTP transport seam.
//!
//! [`Transport`] posts a JSON body and reports the response status. Status
//! interpretation is left to the submitter so that lenient mode can accept
//! non-2xx responses. [`ReqwestTransport`] is the production implementation.

use std::time::Duration;

use async_trait::async_trait;

use crate::config::RelayConfig;

/// Error type for transport-level failures.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote server returned a non-2xx status code.
    #[error("Endpoint returned HTTP {0}")]
    HttpStatus(u16),
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `body` as JSON to `url` and return the response status code.
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<u16, TransportError>;
}

/// Sends requests with a cookie-enabled [`reqwest::Client`] so session
/// credentials travel with every request.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(config: &RelayConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .cookie_store(true)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<u16, TransportError> {
        let response = self.client.post(url).json(body).send().await?;
        Ok(response.status().as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_does_not_fail_with_default_config() {
        assert!(ReqwestTransport::new(&RelayConfig::default()).is_ok());
    }

    #[test]
    fn transport_error_display_http_status() {
        let err = TransportError::HttpStatus(502);
        assert_eq!(err.to_string(), "Endpoint returned HTTP 502");
    }

    #[test]
    fn transport_error_display_request() {
        let req_err = reqwest::Client::new().get("://bad").build().unwrap_err();
        let err = TransportError::Request(req_err);
        assert!(err.to_string().contains("HTTP request failed"));
    }
}
