use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use support_core_form_contracts::{
    SupportFormService, SupportFormSnapshot, SupportFormSubmitError,
};
use support_models::{
    attachment::Attachment,
    draft::{FieldErrors, FormField, SubmissionDraft},
    notification::Notification,
};
use support_notification_contracts::NotificationService;
use support_submission_contracts::SubmissionService;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

#[cfg(test)]
mod tests;

#[derive(Debug, Clone)]
#[cfg_attr(test, derive(Default))]
pub struct SupportFormServiceImpl<Submission, Notify> {
    submission: Submission,
    notification: Notify,
    state: Arc<Shared>,
}

#[derive(Debug, Default)]
struct Shared {
    form: RwLock<State>,
    is_submitting: AtomicBool,
}

#[derive(Debug, Default)]
struct State {
    draft: SubmissionDraft,
    errors: FieldErrors,
    selected_file: Option<Attachment>,
}

/// Marks a submission as in flight until dropped.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        (!flag.swap(true, Ordering::AcqRel)).then_some(Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<Submission, Notify> SupportFormServiceImpl<Submission, Notify> {
    pub fn new(submission: Submission, notification: Notify) -> Self {
        Self {
            submission,
            notification,
            state: Default::default(),
        }
    }
}

impl<Submission, Notify> SupportFormService for SupportFormServiceImpl<Submission, Notify>
where
    Submission: SubmissionService,
    Notify: NotificationService,
{
    #[tracing::instrument(skip(self, value))]
    async fn update_field(&self, field: FormField, value: String) {
        self.state.form.write().await.draft.set(field, value);
    }

    #[tracing::instrument(skip_all, fields(name = file.as_ref().map(|x| x.name.as_str())))]
    async fn select_file(&self, file: Option<Attachment>) {
        if let Some(file) = file {
            self.state.form.write().await.selected_file = Some(file);
        }
    }

    #[tracing::instrument(skip(self))]
    async fn submit(&self) -> Result<(), SupportFormSubmitError> {
        let (request, in_flight) = {
            let mut state = self.state.form.write().await;

            let validated = state.draft.validate(state.selected_file.clone());
            let request = match validated {
                Ok(request) => request,
                Err(errors) => {
                    debug!(%errors, "submission blocked by invalid fields");
                    state.errors = errors.clone();
                    return Err(SupportFormSubmitError::Invalid(errors));
                }
            };

            let Some(in_flight) = InFlight::acquire(&self.state.is_submitting) else {
                return Err(SupportFormSubmitError::InProgress);
            };
            state.errors = FieldErrors::default();
            (request, in_flight)
        };

        debug!(?request, "submitting support request");

        let result = self.submission.submit(request).await;

        let mut state = self.state.form.write().await;
        drop(in_flight);

        match result {
            Ok(()) => {
                info!("support request submitted");
                self.notification.notify(Notification::submitted());
                state.draft = SubmissionDraft::default();
                state.selected_file = None;
                Ok(())
            }
            Err(err) => {
                error!("Failed to submit support request: {err}");
                self.notification.notify(Notification::submission_failed());
                Err(SupportFormSubmitError::Submission(err))
            }
        }
    }

    async fn snapshot(&self) -> SupportFormSnapshot {
        let state = self.state.form.read().await;
        SupportFormSnapshot {
            draft: state.draft.clone(),
            errors: state.errors.clone(),
            selected_file: state.selected_file.clone(),
            is_submitting: self.state.is_submitting.load(Ordering::Acquire),
        }
    }
}
