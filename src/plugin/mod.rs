//! Host integration.
//!
//! The agent runtime implements [`PluginHost`]; [`register_plugin`] wires the
//! push notification tool (and, when the host has a command line, the
//! diagnostic command) into it.

mod status;

use std::sync::Arc;

use crate::config::HostConfig;
use crate::tools::{AgentTool, PushNotificationTool};

pub use status::{STATUS_COMMAND_NAME, StatusCommand, status_lines};

/// Command the host can expose on its command line
pub trait HostCommand: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// Run the command and return the lines to print
    fn run(&self) -> Vec<String>;
}

/// Command registration capability, optional on a host
pub trait CommandRegistry {
    fn register_command(&mut self, command: Box<dyn HostCommand>);
}

/// Capabilities the agent runtime offers to plugins
pub trait PluginHost {
    /// Host configuration tree
    fn config(&self) -> &HostConfig;

    fn register_tool(&mut self, tool: Arc<dyn AgentTool>);

    /// Command registry, if the host has a command line
    fn commands(&mut self) -> Option<&mut dyn CommandRegistry> {
        None
    }
}

/// Register the push notification tool and diagnostic command with `host`
pub fn register_plugin(host: &mut dyn PluginHost) {
    let config = host.config().clone();

    host.register_tool(Arc::new(PushNotificationTool::new(config.clone())));

    match host.commands() {
        Some(registry) => {
            registry.register_command(Box::new(StatusCommand::new(config)));
            tracing::debug!("Registered push notification tool and status command");
        }
        None => tracing::debug!("Registered push notification tool"),
    }
}
