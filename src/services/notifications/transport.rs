//! Delivery transport abstraction.
//!
//! The dispatcher talks to the backend only through [`PushTransport`], so the
//! network call can be swapped out without touching classification logic.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use thiserror::Error;

use super::payload::DispatchPayload;
use crate::external::client::HTTP_CLIENT;

/// Raw backend response, before classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    /// Canonical reason phrase, e.g. "Service Unavailable"
    pub status_text: String,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failure before any response was obtained
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{0}")]
    Network(String),

    #[error("request cancelled")]
    Cancelled,
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        TransportError::Network(error_chain(&error))
    }
}

/// Join an error and its sources, so that causes such as
/// "Connection refused" reach the caller
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}

/// Sends one JSON POST to the backend
#[async_trait]
pub trait PushTransport: Send + Sync {
    /// POST `payload` to `url`, adding a bearer token when `api_key` is set
    async fn post_json(
        &self,
        url: &str,
        api_key: Option<&str>,
        payload: &DispatchPayload,
    ) -> Result<TransportResponse, TransportError>;

    /// Transport name for logging
    fn name(&self) -> &'static str;
}

/// Production transport backed by the global reqwest client
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpTransport;

#[async_trait]
impl PushTransport for HttpTransport {
    async fn post_json(
        &self,
        url: &str,
        api_key: Option<&str>,
        payload: &DispatchPayload,
    ) -> Result<TransportResponse, TransportError> {
        let mut request = HTTP_CLIENT
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(payload);

        if let Some(key) = api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        // An unreadable body is classified like an unparsable one
        let body = response.text().await.unwrap_or_default();

        Ok(TransportResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
