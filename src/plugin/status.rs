//! Read-only diagnostic command.

use super::HostCommand;
use crate::config::{HostConfig, resolve};

/// Name under which the diagnostic command is registered
pub const STATUS_COMMAND_NAME: &str = "push-status";

/// Describe the current push notification configuration, one line per fact.
///
/// Never touches the network.
pub fn status_lines(config: &HostConfig) -> Vec<String> {
    let Some(entry) = resolve(config) else {
        return vec![
            "Push notifications: not configured".to_string(),
            "Set plugins.entries.push-notifications.settings.backendUrl to enable delivery."
                .to_string(),
        ];
    };

    let state = if entry.is_disabled() {
        "disabled"
    } else if entry.backend_url().is_none() {
        "not configured"
    } else {
        "enabled"
    };

    vec![
        format!("Push notifications: {}", state),
        format!("Backend URL: {}", entry.backend_url().unwrap_or("(not set)")),
        format!("Default title: {}", entry.default_title()),
        format!(
            "API key: {}",
            if entry.api_key().is_some() { "set" } else { "not set" }
        ),
    ]
}

/// `push-status` command bound to a host configuration snapshot
pub struct StatusCommand {
    config: HostConfig,
}

impl StatusCommand {
    pub fn new(config: HostConfig) -> Self {
        Self { config }
    }
}

impl HostCommand for StatusCommand {
    fn name(&self) -> &str {
        STATUS_COMMAND_NAME
    }

    fn description(&self) -> &str {
        "Show push notification configuration status"
    }

    fn run(&self) -> Vec<String> {
        status_lines(&self.config)
    }
}
