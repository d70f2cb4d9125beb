use std::sync::LazyLock;

use support_models::{
    attachment::Attachment,
    draft::{FormField, SubmissionDraft},
    request::SupportRequest,
};

pub static JANE_DRAFT: LazyLock<SubmissionDraft> = LazyLock::new(|| {
    SubmissionDraft::new()
        .with(FormField::FullName, "Jane Doe")
        .with(FormField::Email, "jane@example.com")
        .with(FormField::Phone, "5551234")
        .with(FormField::RequestType, "Technical Issue")
        .with(FormField::BriefDescription, "Login fails")
        .with(FormField::DetailedDescription, "Cannot log in since yesterday")
});

pub static JANE_REQUEST: LazyLock<SupportRequest> =
    LazyLock::new(|| JANE_DRAFT.validate(None).unwrap());

pub static MAX_DRAFT: LazyLock<SubmissionDraft> = LazyLock::new(|| {
    SubmissionDraft::new()
        .with(FormField::FullName, "Max Mustermann")
        .with(FormField::Email, "max.mustermann@example.de")
        .with(FormField::Phone, "(555) 010-4477")
        .with(FormField::RequestType, "billing question")
        .with(FormField::BriefDescription, "Charged twice")
        .with(
            FormField::DetailedDescription,
            "My card was charged twice for the March invoice.",
        )
});

pub static SCREENSHOT: LazyLock<Attachment> = LazyLock::new(|| {
    Attachment::new(
        "screenshot.png",
        &b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR"[..],
    )
});

pub static RECORDING: LazyLock<Attachment> =
    LazyLock::new(|| Attachment::new("recording.webm", vec![0x1a, 0x45, 0xdf, 0xa3]));

/// Returns [`JANE_REQUEST`] with the given attachment.
pub fn jane_request_with(attachment: Option<Attachment>) -> SupportRequest {
    SupportRequest {
        attachment,
        ..JANE_REQUEST.clone()
    }
}
