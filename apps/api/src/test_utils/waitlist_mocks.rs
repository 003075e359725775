//! Mock implementations of `WaitlistSink`.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::waitlist_submission::WaitlistSubmission,
    use_cases::waitlist::WaitlistSink,
};

// ============================================================================
// InMemoryWaitlistSink
// ============================================================================

/// Records every accepted submission so tests can inspect what reached the sink.
#[derive(Default)]
pub struct InMemoryWaitlistSink {
    pub submissions: Mutex<Vec<WaitlistSubmission>>,
}

impl InMemoryWaitlistSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accepted(&self) -> Vec<WaitlistSubmission> {
        self.submissions.lock().unwrap().clone()
    }
}

#[async_trait]
impl WaitlistSink for InMemoryWaitlistSink {
    async fn accept(&self, submission: &WaitlistSubmission) -> AppResult<()> {
        self.submissions.lock().unwrap().push(submission.clone());
        Ok(())
    }
}

// ============================================================================
// FailingWaitlistSink
// ============================================================================

/// Always fails, standing in for an unavailable storage backend.
pub struct FailingWaitlistSink;

#[async_trait]
impl WaitlistSink for FailingWaitlistSink {
    async fn accept(&self, _submission: &WaitlistSubmission) -> AppResult<()> {
        Err(AppError::Internal("connection refused".into()))
    }
}
