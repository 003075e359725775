use ecoai_types::ValidationIssue;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input ({} issue(s))", .0.len())]
    Validation(Vec<ValidationIssue>),

    #[error("Waitlist submission failed: {0}")]
    WaitlistFailed(String),

    #[error("Not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Single-field validation failure on the request body.
    pub fn invalid_field(field: &str, msg: &str, kind: &str) -> Self {
        AppError::Validation(vec![ValidationIssue::body_field(field, msg, kind)])
    }
}

pub type AppResult<T> = Result<T, AppError>;
