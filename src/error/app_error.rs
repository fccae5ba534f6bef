use serde::Serialize;
use thiserror::Error;

/// Single failing rule reported by `validator`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFieldError {
    pub field: String,
    pub message: String,
}

/// Crate-wide error type.
///
/// Only caller-contract violations are represented here; settings loading
/// reports [`ConfigError`](crate::config::ConfigError) on its own.
/// Runtime delivery problems (disabled plugin, missing backend, HTTP or
/// network failures) are never errors: they are folded into
/// [`DispatchResult`](crate::services::notifications::DispatchResult).
#[derive(Error, Debug)]
pub enum AppError {
    /// Input did not match the expected shape (unknown field, wrong type, bad enum value)
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// One or more field rules failed
    #[error("Validation failed: {}", format_field_errors(.errors))]
    ValidationErrors { errors: Vec<ValidationFieldError> },
}

fn format_field_errors(errors: &[ValidationFieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<ValidationFieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| ValidationFieldError {
                    field: field.to_string(),
                    message: err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string()),
                })
            })
            .collect();
        fields.sort_by(|a, b| a.field.cmp(&b.field));

        AppError::ValidationErrors { errors: fields }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;
