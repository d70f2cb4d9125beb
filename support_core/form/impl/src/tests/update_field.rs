use pretty_assertions::assert_eq;
use support_core_form_contracts::{SupportFormService, SupportFormSnapshot};
use support_demo::{JANE_DRAFT, MAX_DRAFT};
use support_models::draft::{FormField, SubmissionDraft};

use crate::tests::{fill, Sut};

#[tokio::test]
async fn initially_empty() {
    // Arrange
    let sut = Sut::default();

    // Act
    let result = sut.snapshot().await;

    // Assert
    assert_eq!(result, SupportFormSnapshot::default());
    assert_eq!(result.submit_label(), "Submit");
}

#[tokio::test]
async fn ok() {
    // Arrange
    let sut = Sut::default();

    // Act
    fill(&sut, &JANE_DRAFT).await;

    // Assert
    let snapshot = sut.snapshot().await;
    assert_eq!(snapshot.draft, *JANE_DRAFT);
    assert!(snapshot.errors.is_empty());
    assert!(!snapshot.is_submitting);
}

#[tokio::test]
async fn overwrite() {
    // Arrange
    let sut = Sut::default();
    fill(&sut, &JANE_DRAFT).await;

    // Act
    fill(&sut, &MAX_DRAFT).await;

    // Assert
    assert_eq!(sut.snapshot().await.draft, *MAX_DRAFT);
}

#[tokio::test]
async fn no_validation() {
    // Arrange
    let sut = Sut::default();

    // Act
    sut.update_field(FormField::Email, "not an email".into()).await;

    // Assert
    let snapshot = sut.snapshot().await;
    assert_eq!(
        snapshot.draft,
        SubmissionDraft::new().with(FormField::Email, "not an email")
    );
    assert!(snapshot.errors.is_empty());
}
