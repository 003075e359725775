use ecoai_types::{ErrorDetail, ValidationIssue, ValidationIssues};
use thiserror::Error;

/// SDK-specific errors.
#[derive(Debug, Error)]
pub enum SdkError {
    /// The API rejected the request body (HTTP 422)
    #[error("Validation failed: {} issue(s)", .0.len())]
    Validation(Vec<ValidationIssue>),

    /// Any other non-success response
    #[error("API error ({status}): {detail}")]
    Api { status: u16, detail: String },

    /// Network error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SdkError {
    /// HTTP status of the response that produced this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            SdkError::Validation(_) => Some(422),
            SdkError::Api { status, .. } => Some(*status),
            SdkError::Network(e) => e.status().map(|s| s.as_u16()),
            SdkError::Config(_) => None,
        }
    }

    /// Builds an error from a non-success response body.
    pub(crate) fn from_response(status: u16, body: &str) -> Self {
        if status == 422 {
            if let Ok(issues) = serde_json::from_str::<ValidationIssues>(body) {
                return SdkError::Validation(issues.detail);
            }
        }

        let detail = serde_json::from_str::<ErrorDetail>(body)
            .map(|e| e.detail)
            .unwrap_or_else(|_| body.to_string());

        SdkError::Api { status, detail }
    }
}
