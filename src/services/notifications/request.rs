//! Caller-supplied notification request and its validation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Delivery priority hint forwarded to the backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Normal => "normal",
            Priority::High => "high",
        }
    }
}

/// Validated "send a push notification" input.
///
/// Unknown fields are rejected, so a typo such as `mesage` fails loudly
/// instead of silently sending an empty-looking notification.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct NotificationRequest {
    #[validate(length(min = 1, message = "Message must not be empty"))]
    pub message: String,

    #[serde(default)]
    pub title: Option<String>,

    /// Arbitrary key/value data passed through to the device
    #[serde(default)]
    pub data: Option<Map<String, JsonValue>>,

    #[serde(default)]
    pub priority: Priority,
}

impl NotificationRequest {
    /// Create a request with only a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            title: None,
            data: None,
            priority: Priority::default(),
        }
    }

    /// Deserialize and validate raw tool input.
    ///
    /// # Errors
    /// - `AppError::Validation` when the input shape is wrong (not an object,
    ///   missing `message`, unknown field, priority outside low/normal/high)
    /// - `AppError::ValidationErrors` when a field rule fails (empty message)
    pub fn from_json(input: JsonValue) -> AppResult<Self> {
        let request: Self =
            serde_json::from_value(input).map_err(|e| AppError::Validation {
                field: "input".to_string(),
                reason: e.to_string(),
            })?;
        request.validate()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_request_uses_defaults() {
        let request =
            NotificationRequest::from_json(json!({ "message": "Task completed" })).unwrap();

        assert_eq!(request, NotificationRequest::new("Task completed"));
        assert_eq!(request.priority, Priority::Normal);
    }

    #[test]
    fn test_full_request() {
        let request = NotificationRequest::from_json(json!({
            "message": "Deploy finished",
            "title": "CI",
            "data": { "build": 42, "green": true },
            "priority": "high"
        }))
        .unwrap();

        assert_eq!(request.title.as_deref(), Some("CI"));
        assert_eq!(request.priority, Priority::High);
        assert_eq!(request.data.unwrap()["build"], json!(42));
    }

    #[test]
    fn test_empty_message_rejected() {
        let error = NotificationRequest::from_json(json!({ "message": "" })).unwrap_err();

        match error {
            AppError::ValidationErrors { errors } => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "message");
            }
            other => panic!("Expected ValidationErrors, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_message_rejected() {
        let error = NotificationRequest::from_json(json!({ "title": "No body" })).unwrap_err();
        assert!(matches!(error, AppError::Validation { ref reason, .. } if reason.contains("message")));
    }

    #[test]
    fn test_unknown_priority_rejected() {
        let error =
            NotificationRequest::from_json(json!({ "message": "hi", "priority": "urgent" }))
                .unwrap_err();
        assert!(matches!(error, AppError::Validation { ref reason, .. } if reason.contains("urgent")));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let error = NotificationRequest::from_json(json!({ "message": "hi", "sound": "ping" }))
            .unwrap_err();
        assert!(matches!(error, AppError::Validation { ref reason, .. } if reason.contains("sound")));
    }

    #[test]
    fn test_non_object_data_rejected() {
        let result = NotificationRequest::from_json(json!({ "message": "hi", "data": [1, 2] }));
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[test]
    fn test_non_object_input_rejected() {
        let result = NotificationRequest::from_json(json!("just a string"));
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }
}
