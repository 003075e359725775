use async_trait::async_trait;
use tracing::info;

use crate::{
    app_error::AppResult, domain::entities::waitlist_submission::WaitlistSubmission,
    use_cases::waitlist::WaitlistSink,
};

/// Sink that records nothing. Accepted submissions are logged and dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardWaitlistSink;

#[async_trait]
impl WaitlistSink for DiscardWaitlistSink {
    async fn accept(&self, submission: &WaitlistSubmission) -> AppResult<()> {
        let email_domain = submission
            .email
            .rsplit_once('@')
            .map(|(_, domain)| domain)
            .unwrap_or_default();
        info!(
            email_domain,
            has_company = submission.company.is_some(),
            has_name = submission.name.is_some(),
            submitted_at = %submission.submitted_at,
            "Waitlist submission accepted (not persisted)"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[tokio::test]
    async fn discard_sink_always_accepts() {
        let submission = WaitlistSubmission {
            email: "user@example.com".to_string(),
            company: None,
            name: None,
            submitted_at: Utc::now(),
        };

        assert!(DiscardWaitlistSink.accept(&submission).await.is_ok());
        assert!(DiscardWaitlistSink.accept(&submission).await.is_ok());
    }
}
