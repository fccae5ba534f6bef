use async_trait::async_trait;
use serde_json::{Value as JsonValue, json};
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

use super::{AgentTool, ToolContent, ToolDescriptor, ToolOutput};
use crate::config::HostConfig;
use crate::error::AppResult;
use crate::services::notifications::{
    CorrelationIds, DispatchResult, HttpTransport, PushDispatcher, PushTransport,
};

pub const TOOL_NAME: &str = "send_push_notification";

pub const TOOL_LABEL: &str = "Send Push Notification";

const TOOL_DESCRIPTION: &str = "Send a push notification to the user's registered devices. \
     Use it to report that a long-running task finished, failed, or needs attention.";

/// JSON Schema for the tool input
pub fn parameters_schema() -> JsonValue {
    json!({
        "type": "object",
        "properties": {
            "message": {
                "type": "string",
                "minLength": 1,
                "description": "Notification body text"
            },
            "title": {
                "type": "string",
                "description": "Notification title; defaults to the configured default title"
            },
            "data": {
                "type": "object",
                "additionalProperties": true,
                "description": "Extra key/value data delivered with the notification"
            },
            "priority": {
                "type": "string",
                "enum": ["low", "normal", "high"],
                "default": "normal",
                "description": "Delivery priority"
            }
        },
        "required": ["message"],
        "additionalProperties": false
    })
}

/// The "send a push notification" tool.
///
/// Configuration is resolved and correlation identifiers are read from the
/// environment on every execution.
pub struct PushNotificationTool<T = HttpTransport> {
    config: HostConfig,
    dispatcher: PushDispatcher<T>,
}

impl PushNotificationTool<HttpTransport> {
    pub fn new(config: HostConfig) -> Self {
        Self {
            config,
            dispatcher: PushDispatcher::new(),
        }
    }
}

impl<T: PushTransport> PushNotificationTool<T> {
    pub fn with_dispatcher(config: HostConfig, dispatcher: PushDispatcher<T>) -> Self {
        Self { config, dispatcher }
    }
}

fn summary(result: &DispatchResult) -> String {
    match result {
        DispatchResult::Delivered { .. } => "Push notification sent successfully.".to_string(),
        DispatchResult::Failed { error, .. } => format!("Push notification failed: {}", error),
    }
}

#[async_trait]
impl<T: PushTransport> AgentTool for PushNotificationTool<T> {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: TOOL_NAME.to_string(),
            label: TOOL_LABEL.to_string(),
            description: TOOL_DESCRIPTION.to_string(),
            parameters: parameters_schema(),
        }
    }

    async fn execute(
        &self,
        call_id: &str,
        input: JsonValue,
        cancel: Option<CancellationToken>,
    ) -> AppResult<ToolOutput> {
        let span = tracing::info_span!("push_tool", call_id = %call_id);
        let correlation = CorrelationIds::from_env();

        let details = self
            .dispatcher
            .dispatch(input, &self.config, &correlation, cancel.as_ref())
            .instrument(span)
            .await?;

        Ok(ToolOutput {
            content: vec![ToolContent::Text {
                text: summary(&details),
            }],
            details,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::notifications::{
        DISABLED_MESSAGE, DispatchPayload, TransportError, TransportResponse,
    };

    struct StaticTransport(u16, &'static str);

    #[async_trait]
    impl PushTransport for StaticTransport {
        async fn post_json(
            &self,
            _url: &str,
            _api_key: Option<&str>,
            _payload: &DispatchPayload,
        ) -> Result<TransportResponse, TransportError> {
            Ok(TransportResponse {
                status: self.0,
                status_text: String::new(),
                body: self.1.to_string(),
            })
        }

        fn name(&self) -> &'static str {
            "static"
        }
    }

    fn tool(entry: JsonValue, transport: StaticTransport) -> PushNotificationTool<StaticTransport> {
        let config = HostConfig::from_json(
            json!({ "plugins": { "entries": { "push-notifications": entry } } }),
        )
        .unwrap();
        PushNotificationTool::with_dispatcher(config, PushDispatcher::with_transport(transport))
    }

    #[test]
    fn test_descriptor() {
        let descriptor = PushNotificationTool::new(HostConfig::default()).descriptor();

        assert_eq!(descriptor.name, "send_push_notification");
        assert_eq!(descriptor.label, "Send Push Notification");
        assert_eq!(descriptor.parameters["required"], json!(["message"]));
        assert_eq!(descriptor.parameters["additionalProperties"], json!(false));
        assert_eq!(
            descriptor.parameters["properties"]["priority"]["enum"],
            json!(["low", "normal", "high"])
        );
    }

    #[tokio::test]
    async fn test_success_text() {
        let tool = tool(
            json!({ "settings": { "backendUrl": "https://notify.example" } }),
            StaticTransport(200, r#"{"receiptId":"r-9"}"#),
        );

        let output = tool
            .execute("call-1", json!({ "message": "done" }), None)
            .await
            .unwrap();

        assert_eq!(output.text(), "Push notification sent successfully.");
        assert_eq!(
            output.details,
            DispatchResult::delivered(json!({ "receiptId": "r-9" }))
        );
    }

    #[tokio::test]
    async fn test_failure_text() {
        let tool = tool(
            json!({ "enabled": false, "settings": { "backendUrl": "https://notify.example" } }),
            StaticTransport(200, "{}"),
        );

        let output = tool
            .execute("call-2", json!({ "message": "done" }), None)
            .await
            .unwrap();

        assert_eq!(
            output.text(),
            format!("Push notification failed: {}", DISABLED_MESSAGE)
        );
        assert!(!output.details.is_success());
    }

    #[tokio::test]
    async fn test_output_serialization() {
        let tool = tool(
            json!({ "settings": { "backendUrl": "https://notify.example" } }),
            StaticTransport(500, r#"{"error":"boom"}"#),
        );

        let output = tool
            .execute("call-3", json!({ "message": "done" }), None)
            .await
            .unwrap();

        assert_eq!(
            serde_json::to_value(&output).unwrap(),
            json!({
                "content": [
                    { "type": "text", "text": "Push notification failed: Failed to send notification: boom" }
                ],
                "details": {
                    "success": false,
                    "error": "Failed to send notification: boom",
                    "code": "HTTP_500"
                }
            })
        );
    }

    #[tokio::test]
    async fn test_invalid_input_is_an_error() {
        let tool = tool(json!({}), StaticTransport(200, "{}"));

        let result = tool
            .execute("call-4", json!({ "message": "hi", "extra": 1 }), None)
            .await;

        assert!(result.is_err());
    }
}
