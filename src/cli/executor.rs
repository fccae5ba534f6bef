//! Command executor
//!
//! The CLI acts as a minimal plugin host: it registers the plugin exactly as
//! an agent runtime would, then drives the registered tool or command.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, anyhow};
use serde_json::{Map, Value as JsonValue, json};
use tokio_util::sync::CancellationToken;

use super::parser::{Cli, Commands};
use crate::config::{HostConfig, Settings};
use crate::plugin::{
    CommandRegistry, HostCommand, PluginHost, STATUS_COMMAND_NAME, register_plugin,
};
use crate::services::notifications::Priority;
use crate::tools::{AgentTool, TOOL_NAME};

/// In-process host backing the command line
#[derive(Default)]
pub struct CliHost {
    config: HostConfig,
    tools: Vec<Arc<dyn AgentTool>>,
    commands: CliCommands,
}

#[derive(Default)]
struct CliCommands(Vec<Box<dyn HostCommand>>);

impl CommandRegistry for CliCommands {
    fn register_command(&mut self, command: Box<dyn HostCommand>) {
        tracing::debug!(
            command = command.name(),
            description = command.description(),
            "Registered host command"
        );
        self.0.push(command);
    }
}

impl CliHost {
    pub fn new(config: HostConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn tool(&self, name: &str) -> Option<Arc<dyn AgentTool>> {
        self.tools
            .iter()
            .find(|tool| tool.descriptor().name == name)
            .cloned()
    }

    pub fn command(&self, name: &str) -> Option<&dyn HostCommand> {
        self.commands
            .0
            .iter()
            .find(|command| command.name() == name)
            .map(|command| command.as_ref())
    }
}

impl PluginHost for CliHost {
    fn config(&self) -> &HostConfig {
        &self.config
    }

    fn register_tool(&mut self, tool: Arc<dyn AgentTool>) {
        self.tools.push(tool);
    }

    fn commands(&mut self) -> Option<&mut dyn CommandRegistry> {
        Some(&mut self.commands)
    }
}

/// Build the tool input object from `send` arguments
pub fn send_input(
    message: &str,
    title: Option<&str>,
    priority: Option<Priority>,
    data: Option<&str>,
) -> anyhow::Result<JsonValue> {
    let mut input = Map::new();
    input.insert("message".to_string(), json!(message));
    if let Some(title) = title {
        input.insert("title".to_string(), json!(title));
    }
    if let Some(priority) = priority {
        input.insert("priority".to_string(), json!(priority.as_str()));
    }
    if let Some(data) = data {
        let value: JsonValue = serde_json::from_str(data).context("--data is not valid JSON")?;
        if !value.is_object() {
            return Err(anyhow!("--data must be a JSON object"));
        }
        input.insert("data".to_string(), value);
    }
    Ok(JsonValue::Object(input))
}

/// Execute the parsed command against loaded settings
pub async fn execute_command(cli: &Cli, settings: Settings) -> anyhow::Result<ExitCode> {
    let mut host = CliHost::new(settings.host_config());
    register_plugin(&mut host);

    match &cli.command {
        Commands::Status => {
            let command = host
                .command(STATUS_COMMAND_NAME)
                .ok_or_else(|| anyhow!("status command was not registered"))?;
            for line in command.run() {
                println!("{}", line);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Send {
            message,
            title,
            priority,
            data,
        } => {
            let tool = host
                .tool(TOOL_NAME)
                .ok_or_else(|| anyhow!("{} tool was not registered", TOOL_NAME))?;
            let input = send_input(
                message,
                title.as_deref(),
                priority.map(Priority::from),
                data.as_deref(),
            )?;

            let cancel = CancellationToken::new();
            let ctrl_c = cancel.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    ctrl_c.cancel();
                }
            });

            let output = tool.execute("cli", input, Some(cancel)).await?;

            println!("{}", output.text());
            println!("{}", serde_json::to_string_pretty(&output.details)?);

            Ok(if output.details.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_input_minimal() {
        let input = send_input("hi", None, None, None).unwrap();
        assert_eq!(input, json!({ "message": "hi" }));
    }

    #[test]
    fn test_send_input_full() {
        let input = send_input("hi", Some("T"), Some(Priority::Low), Some(r#"{"a":1}"#)).unwrap();
        assert_eq!(
            input,
            json!({ "message": "hi", "title": "T", "priority": "low", "data": { "a": 1 } })
        );
    }

    #[test]
    fn test_send_input_rejects_non_object_data() {
        assert!(send_input("hi", None, None, Some("[1]")).is_err());
        assert!(send_input("hi", None, None, Some("{not json")).is_err());
    }

    #[test]
    fn test_cli_host_registers_everything() {
        let mut host = CliHost::new(HostConfig::default());
        register_plugin(&mut host);

        assert!(host.tool(TOOL_NAME).is_some());
        assert!(host.command(STATUS_COMMAND_NAME).is_some());
        assert!(host.tool("other").is_none());
    }
}
