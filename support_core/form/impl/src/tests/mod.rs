use support_core_form_contracts::{SupportFormService, SupportFormSnapshot};
use support_models::draft::{FormField, SubmissionDraft};
use support_notification_contracts::MockNotificationService;
use support_submission_contracts::MockSubmissionService;

use crate::SupportFormServiceImpl;

mod select_file;
mod update_field;

type Sut = SupportFormServiceImpl<MockSubmissionService, MockNotificationService>;

async fn fill(sut: &Sut, draft: &SubmissionDraft) {
    for field in FormField::ALL {
        sut.update_field(field, draft.get(field).into()).await;
    }
}

async fn wait_until_submitting(sut: &Sut) -> SupportFormSnapshot {
    loop {
        let snapshot = sut.snapshot().await;
        if snapshot.is_submitting {
            return snapshot;
        }
        tokio::task::yield_now().await;
    }
}
