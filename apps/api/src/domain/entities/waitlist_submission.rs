use chrono::{DateTime, Utc};

/// A validated waitlist registration.
///
/// Only ever built by the waitlist use case, which stamps `submitted_at`
/// with the processing time. Lives for the duration of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistSubmission {
    pub email: String,
    pub company: Option<String>,
    pub name: Option<String>,
    pub submitted_at: DateTime<Utc>,
}
