//! Agent-facing tools.

mod push_tool;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value as JsonValue;
use tokio_util::sync::CancellationToken;

use crate::error::AppResult;
use crate::services::notifications::DispatchResult;

pub use push_tool::{PushNotificationTool, TOOL_LABEL, TOOL_NAME, parameters_schema};

/// Tool metadata handed to the agent runtime
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub label: String,
    pub description: String,
    /// JSON Schema of the accepted input
    pub parameters: JsonValue,
}

/// One content block of a tool reply
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolContent {
    Text { text: String },
}

/// Reply of one tool execution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolOutput {
    pub content: Vec<ToolContent>,
    pub details: DispatchResult,
}

impl ToolOutput {
    /// Text of the first content block
    pub fn text(&self) -> &str {
        match self.content.first() {
            Some(ToolContent::Text { text }) => text.as_str(),
            None => "",
        }
    }
}

/// A capability an agent can invoke
#[async_trait]
pub trait AgentTool: Send + Sync {
    fn descriptor(&self) -> ToolDescriptor;

    /// Run the tool once.
    ///
    /// Errors are reserved for inputs that violate the parameter schema.
    async fn execute(
        &self,
        call_id: &str,
        input: JsonValue,
        cancel: Option<CancellationToken>,
    ) -> AppResult<ToolOutput>;
}
