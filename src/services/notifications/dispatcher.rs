//! Push notification dispatcher.
//!
//! One dispatch runs validate → resolve → build → send → classify and always
//! ends in a [`DispatchResult`], except when the caller's input is invalid.

use jiff::Timestamp;
use serde_json::{Value as JsonValue, json};
use tokio_util::sync::CancellationToken;

use super::payload::{CorrelationIds, DispatchPayload};
use super::request::NotificationRequest;
use super::result::{CANCELLED_CODE, DispatchResult, NETWORK_ERROR_CODE, http_error_code};
use super::transport::{HttpTransport, PushTransport, TransportError, TransportResponse};
use crate::config::{HostConfig, resolve};
use crate::error::AppResult;

/// Path appended to the configured backend URL
pub const SEND_PATH: &str = "/api/notifications/send";

/// Prefix shared by every delivery failure message
pub const FAILURE_PREFIX: &str = "Failed to send notification: ";

pub const DISABLED_MESSAGE: &str = "Push notification plugin is disabled";

pub const NOT_CONFIGURED_MESSAGE: &str = "Push notification backend is not configured. \
     Set plugins.entries.push-notifications.settings.backendUrl in your config.";

/// Delivery endpoint for a backend base URL, without doubled slashes
pub fn delivery_url(backend_url: &str) -> String {
    format!("{}{}", backend_url.trim_end_matches('/'), SEND_PATH)
}

/// Sends notifications through a [`PushTransport`].
///
/// Holds no per-dispatch state; one instance can serve concurrent calls.
#[derive(Debug, Clone, Default)]
pub struct PushDispatcher<T = HttpTransport> {
    transport: T,
}

impl PushDispatcher<HttpTransport> {
    pub fn new() -> Self {
        Self {
            transport: HttpTransport,
        }
    }
}

impl<T: PushTransport> PushDispatcher<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Validate raw tool input and dispatch it.
    ///
    /// # Errors
    /// Only input validation fails with an error; every other outcome is a
    /// [`DispatchResult`].
    pub async fn dispatch(
        &self,
        input: JsonValue,
        config: &HostConfig,
        correlation: &CorrelationIds,
        cancel: Option<&CancellationToken>,
    ) -> AppResult<DispatchResult> {
        let request = NotificationRequest::from_json(input)?;
        Ok(self
            .dispatch_request(request, config, correlation, cancel)
            .await)
    }

    /// Dispatch an already validated request
    pub async fn dispatch_request(
        &self,
        request: NotificationRequest,
        config: &HostConfig,
        correlation: &CorrelationIds,
        cancel: Option<&CancellationToken>,
    ) -> DispatchResult {
        let Some(entry) = resolve(config) else {
            tracing::warn!("Push notification entry not found in config");
            return DispatchResult::failure(NOT_CONFIGURED_MESSAGE);
        };

        if entry.is_disabled() {
            tracing::debug!("Push notification plugin disabled, skipping delivery");
            return DispatchResult::failure(DISABLED_MESSAGE);
        }

        let Some(backend_url) = entry.backend_url() else {
            tracing::warn!("Push notification backendUrl missing");
            return DispatchResult::failure(NOT_CONFIGURED_MESSAGE);
        };

        let url = delivery_url(backend_url);
        let payload = DispatchPayload::build(request, &entry, correlation, Timestamp::now());

        tracing::debug!(
            url = %url,
            transport = self.transport.name(),
            priority = payload.priority.as_str(),
            job_id = %payload.job_id,
            agent_id = %payload.agent_id,
            "Sending push notification"
        );

        let send = self.transport.post_json(&url, entry.api_key(), &payload);
        let outcome = match cancel {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => Err(TransportError::Cancelled),
                outcome = send => outcome,
            },
            None => send.await,
        };

        let result = classify(outcome);
        match &result {
            DispatchResult::Delivered { .. } => {
                tracing::info!(url = %url, "Push notification delivered")
            }
            DispatchResult::Failed { error, code } => {
                tracing::warn!(url = %url, error = %error, code = ?code, "Push notification failed")
            }
        }
        result
    }
}

/// Map a transport outcome onto the caller-facing result
fn classify(outcome: Result<TransportResponse, TransportError>) -> DispatchResult {
    match outcome {
        Err(TransportError::Cancelled) => DispatchResult::failure_with_code(
            format!("{}{}", FAILURE_PREFIX, TransportError::Cancelled),
            CANCELLED_CODE,
        ),
        Err(e) => DispatchResult::failure_with_code(
            format!("{}{}", FAILURE_PREFIX, e),
            NETWORK_ERROR_CODE,
        ),
        Ok(response) if !response.is_success() => DispatchResult::failure_with_code(
            format!("{}{}", FAILURE_PREFIX, error_detail(&response)),
            http_error_code(response.status),
        ),
        Ok(response) => DispatchResult::delivered(
            serde_json::from_str(&response.body).unwrap_or_else(|_| json!({ "success": true })),
        ),
    }
}

/// Most specific message available from an error response: the body's
/// `error` field, then its `message` field, then "<status> <reason>".
/// Blank fields are skipped.
fn error_detail(response: &TransportResponse) -> String {
    serde_json::from_str::<JsonValue>(&response.body)
        .ok()
        .and_then(|body| {
            ["error", "message"]
                .iter()
                .find_map(|field| {
                    body.get(field)?
                        .as_str()
                        .filter(|detail| !detail.trim().is_empty())
                        .map(str::to_string)
                })
        })
        .unwrap_or_else(|| {
            format!("{} {}", response.status, response.status_text)
                .trim_end()
                .to_string()
        })
}
