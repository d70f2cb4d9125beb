use std::time::Duration;

use support_models::request::SupportRequest;
use support_submission_contracts::{SubmissionError, SubmissionService};
use tracing::info;

/// Stand-in for a real support backend: waits for the configured delay and
/// accepts every request without transmitting it anywhere.
#[derive(Debug, Clone)]
pub struct SimulatedSubmissionServiceImpl {
    config: SimulatedSubmissionConfig,
}

#[derive(Debug, Clone, Copy)]
pub struct SimulatedSubmissionConfig {
    pub delay: Duration,
}

impl SimulatedSubmissionServiceImpl {
    pub fn new(config: SimulatedSubmissionConfig) -> Self {
        Self { config }
    }
}

impl SubmissionService for SimulatedSubmissionServiceImpl {
    #[tracing::instrument(skip_all, fields(request_type = %request.request_type))]
    async fn submit(&self, request: SupportRequest) -> Result<(), SubmissionError> {
        tokio::time::sleep(self.config.delay).await;

        info!(
            email = %request.contact.email,
            attachment = request.attachment.as_ref().map(|x| x.name.as_str()),
            "accepted support request"
        );

        Ok(())
    }
}
