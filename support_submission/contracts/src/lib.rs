use std::future::Future;

use support_models::request::SupportRequest;
use thiserror::Error;

/// Delivers a validated support request to the support backend.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait SubmissionService: Send + Sync + 'static {
    fn submit(
        &self,
        request: SupportRequest,
    ) -> impl Future<Output = Result<(), SubmissionError>> + Send;
}

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("The support backend rejected the request: {reason}")]
    Rejected { reason: String },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockSubmissionService {
    pub fn with_submit(
        mut self,
        request: SupportRequest,
        result: Result<(), SubmissionError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
