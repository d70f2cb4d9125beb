use std::future::Future;

use support_models::{
    attachment::Attachment,
    draft::{FieldErrors, FormField, SubmissionDraft},
};
use support_submission_contracts::SubmissionError;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait SupportFormService: Send + Sync + 'static {
    /// Store a value entered into one of the inputs.
    ///
    /// Nothing is validated until the form is submitted.
    fn update_field(&self, field: FormField, value: String) -> impl Future<Output = ()> + Send;

    /// Replace the selected file. `None` keeps the current selection.
    fn select_file(&self, file: Option<Attachment>) -> impl Future<Output = ()> + Send;

    /// Validate the draft and hand it to the submission backend.
    ///
    /// On success the form is reset and a success notification is shown. If
    /// the backend fails, an error notification is shown and the draft is
    /// kept so the user can retry.
    fn submit(&self) -> impl Future<Output = Result<(), SupportFormSubmitError>> + Send;

    /// Return the current state of the form for presentation.
    fn snapshot(&self) -> impl Future<Output = SupportFormSnapshot> + Send;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupportFormSnapshot {
    pub draft: SubmissionDraft,
    pub errors: FieldErrors,
    pub selected_file: Option<Attachment>,
    pub is_submitting: bool,
}

impl SupportFormSnapshot {
    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting {
            "Submitting..."
        } else {
            "Submit"
        }
    }
}

#[derive(Debug, Error)]
pub enum SupportFormSubmitError {
    #[error("The form contains invalid fields: {0}")]
    Invalid(FieldErrors),
    #[error("A submission is already in progress.")]
    InProgress,
    #[error("Failed to submit the support request.")]
    Submission(#[source] SubmissionError),
}

#[cfg(feature = "mock")]
impl MockSupportFormService {
    pub fn with_update_field(mut self, field: FormField, value: String) -> Self {
        self.expect_update_field()
            .once()
            .with(
                mockall::predicate::eq(field),
                mockall::predicate::eq(value),
            )
            .return_once(|_, _| Box::pin(std::future::ready(())));
        self
    }

    pub fn with_select_file(mut self, file: Option<Attachment>) -> Self {
        self.expect_select_file()
            .once()
            .with(mockall::predicate::eq(file))
            .return_once(|_| Box::pin(std::future::ready(())));
        self
    }

    pub fn with_submit(mut self, result: Result<(), SupportFormSubmitError>) -> Self {
        self.expect_submit()
            .once()
            .return_once(|| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_snapshot(mut self, snapshot: SupportFormSnapshot) -> Self {
        self.expect_snapshot()
            .once()
            .return_once(|| Box::pin(std::future::ready(snapshot)));
        self
    }
}
