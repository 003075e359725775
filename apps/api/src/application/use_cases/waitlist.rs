use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use ecoai_types::WaitlistEntry;
use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult},
    application::validators::normalize_email,
    domain::entities::waitlist_submission::WaitlistSubmission,
};

pub const WAITLIST_SUCCESS_MESSAGE: &str = "Successfully added to waitlist!";

const MISSING_FIELD_MSG: &str = "field required";
const MISSING_FIELD_KIND: &str = "value_error.missing";
const INVALID_EMAIL_MSG: &str = "value is not a valid email address";
const INVALID_EMAIL_KIND: &str = "value_error.email";

/// Destination for accepted waitlist submissions.
#[async_trait]
pub trait WaitlistSink: Send + Sync {
    async fn accept(&self, submission: &WaitlistSubmission) -> AppResult<()>;
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    sink: Arc<dyn WaitlistSink>,
}

impl WaitlistUseCases {
    pub fn new(sink: Arc<dyn WaitlistSink>) -> Self {
        Self { sink }
    }

    /// Validates the entry, stamps it with the current time and hands it to the sink.
    ///
    /// Validation failures are returned as-is. Anything the sink reports is
    /// collapsed into `AppError::WaitlistFailed`.
    #[instrument(skip(self, entry))]
    pub async fn join(&self, entry: WaitlistEntry) -> AppResult<WaitlistSubmission> {
        let email = validate_email_field(entry.email)?;

        let submission = WaitlistSubmission {
            email,
            company: entry.company,
            name: entry.name,
            submitted_at: Utc::now(),
        };

        self.sink
            .accept(&submission)
            .await
            .map_err(|e| AppError::WaitlistFailed(e.to_string()))?;

        Ok(submission)
    }
}

fn validate_email_field(email: Option<String>) -> AppResult<String> {
    let email =
        email.ok_or_else(|| AppError::invalid_field("email", MISSING_FIELD_MSG, MISSING_FIELD_KIND))?;

    normalize_email(&email)
        .ok_or_else(|| AppError::invalid_field("email", INVALID_EMAIL_MSG, INVALID_EMAIL_KIND))
}
