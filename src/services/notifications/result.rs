//! Discriminated outcome of one dispatch.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::Value as JsonValue;

/// Error code for non-2xx backend responses, e.g. `HTTP_503`
pub fn http_error_code(status: u16) -> String {
    format!("HTTP_{}", status)
}

/// Error code for transport failures before a response arrived
pub const NETWORK_ERROR_CODE: &str = "NETWORK_ERROR";

/// Error code for a dispatch aborted through its cancellation token
pub const CANCELLED_CODE: &str = "CANCELLED";

/// Outcome returned to the caller for every anticipated condition.
///
/// Serializes as `{"success": true, "result": ...}` or
/// `{"success": false, "error": "...", "code": "..."}` (`code` omitted when
/// absent).
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchResult {
    /// Backend accepted the notification; `result` is its opaque response body
    Delivered { result: JsonValue },
    Failed { error: String, code: Option<String> },
}

impl DispatchResult {
    pub fn delivered(result: JsonValue) -> Self {
        DispatchResult::Delivered { result }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        DispatchResult::Failed {
            error: error.into(),
            code: None,
        }
    }

    pub fn failure_with_code(error: impl Into<String>, code: impl Into<String>) -> Self {
        DispatchResult::Failed {
            error: error.into(),
            code: Some(code.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, DispatchResult::Delivered { .. })
    }

    /// Error message of a failed dispatch
    pub fn error(&self) -> Option<&str> {
        match self {
            DispatchResult::Delivered { .. } => None,
            DispatchResult::Failed { error, .. } => Some(error),
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            DispatchResult::Delivered { .. } => None,
            DispatchResult::Failed { code, .. } => code.as_deref(),
        }
    }
}

impl Serialize for DispatchResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DispatchResult::Delivered { result } => {
                let mut state = serializer.serialize_struct("DispatchResult", 2)?;
                state.serialize_field("success", &true)?;
                state.serialize_field("result", result)?;
                state.end()
            }
            DispatchResult::Failed { error, code } => {
                let len = if code.is_some() { 3 } else { 2 };
                let mut state = serializer.serialize_struct("DispatchResult", len)?;
                state.serialize_field("success", &false)?;
                state.serialize_field("error", error)?;
                match code {
                    Some(code) => state.serialize_field("code", code)?,
                    None => state.skip_field("code")?,
                }
                state.end()
            }
        }
    }
}
