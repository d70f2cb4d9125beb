use pretty_assertions::assert_eq;
use support_core_form_contracts::SupportFormService;
use support_demo::{RECORDING, SCREENSHOT};

use crate::tests::Sut;

#[tokio::test]
async fn ok() {
    // Arrange
    let sut = Sut::default();

    // Act
    sut.select_file(Some(SCREENSHOT.clone())).await;

    // Assert
    assert_eq!(sut.snapshot().await.selected_file, Some(SCREENSHOT.clone()));
}

#[tokio::test]
async fn replace() {
    // Arrange
    let sut = Sut::default();
    sut.select_file(Some(SCREENSHOT.clone())).await;

    // Act
    sut.select_file(Some(RECORDING.clone())).await;

    // Assert
    assert_eq!(sut.snapshot().await.selected_file, Some(RECORDING.clone()));
}

#[tokio::test]
async fn none_keeps_selection() {
    // Arrange
    let sut = Sut::default();
    sut.select_file(Some(SCREENSHOT.clone())).await;

    // Act
    sut.select_file(None).await;

    // Assert
    assert_eq!(sut.snapshot().await.selected_file, Some(SCREENSHOT.clone()));
}

#[tokio::test]
async fn none_without_selection() {
    // Arrange
    let sut = Sut::default();

    // Act
    sut.select_file(None).await;

    // Assert
    assert_eq!(sut.snapshot().await.selected_file, None);
}
