//! Outbound dispatch payload and correlation identifiers.

use jiff::Timestamp;
use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

use super::request::{NotificationRequest, Priority};
use crate::config::PluginEntry;

/// Job identifier variables, tried in order
pub const JOB_ID_ENV_VARS: [&str; 2] = ["OPENCLAW_JOB_ID", "JOB_ID"];

/// Agent identifier variables, tried in order
pub const AGENT_ID_ENV_VARS: [&str; 2] = ["OPENCLAW_AGENT_ID", "AGENT_ID"];

/// Placeholder used when no identifier variable is set
pub const UNKNOWN_ID: &str = "unknown";

/// Job and agent identifiers embedded in every payload for backend-side tracing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrelationIds {
    pub job_id: String,
    pub agent_id: String,
}

impl CorrelationIds {
    pub fn new(job_id: impl Into<String>, agent_id: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            agent_id: agent_id.into(),
        }
    }

    /// Resolve both identifiers through `lookup`; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let first = |names: &[&str]| {
            names
                .iter()
                .filter_map(|name| lookup(*name))
                .find(|value| !value.is_empty())
                .unwrap_or_else(|| UNKNOWN_ID.to_string())
        };

        Self {
            job_id: first(&JOB_ID_ENV_VARS),
            agent_id: first(&AGENT_ID_ENV_VARS),
        }
    }

    /// Read the identifiers from the process environment, fresh on every call
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }
}

impl Default for CorrelationIds {
    fn default() -> Self {
        Self::new(UNKNOWN_ID, UNKNOWN_ID)
    }
}

/// JSON body POSTed to the backend
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchPayload {
    pub message: String,
    pub title: String,
    pub data: Map<String, JsonValue>,
    pub priority: Priority,
    pub job_id: String,
    pub agent_id: String,
    pub timestamp: Timestamp,
}

impl DispatchPayload {
    /// Normalize a request against its resolved entry.
    ///
    /// Title falls back to the entry's default title and then to
    /// [`FALLBACK_TITLE`](crate::config::settings::FALLBACK_TITLE); data
    /// falls back to an empty object.
    pub fn build(
        request: NotificationRequest,
        entry: &PluginEntry,
        correlation: &CorrelationIds,
        timestamp: Timestamp,
    ) -> Self {
        let title = request
            .title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| entry.default_title().to_string());

        Self {
            message: request.message,
            title,
            data: request.data.unwrap_or_default(),
            priority: request.priority,
            job_id: correlation.job_id.clone(),
            agent_id: correlation.agent_id.clone(),
            timestamp,
        }
    }
}
