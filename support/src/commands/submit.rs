use std::path::PathBuf;

use anyhow::{anyhow, bail};
use clap::Args;
use support_config::Config;
use support_core_form_contracts::{SupportFormService, SupportFormSubmitError};
use support_models::{attachment::Attachment, draft::FormField};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use super::{load_attachment, Session};

/// Fill in the support form from the command line and submit it
#[derive(Debug, Args)]
pub struct SubmitCommand {
    /// Full name of the person requesting support
    #[arg(long)]
    pub full_name: Option<String>,
    /// Contact email address
    #[arg(long)]
    pub email: Option<String>,
    /// Phone number, without the +1 country code
    #[arg(long)]
    pub phone: Option<String>,
    /// Technical Issue, Account Access, Billing Question, Feature Request or
    /// Other
    #[arg(long)]
    pub request_type: Option<String>,
    /// How can we help?
    #[arg(long)]
    pub brief_description: Option<String>,
    /// Everything we should know about the problem
    #[arg(long)]
    pub detailed_description: Option<String>,
    /// Screenshot, video or any other file that shows the problem
    #[arg(long, value_name = "PATH")]
    pub attach: Option<PathBuf>,
}

impl SubmitCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let attachment = match &self.attach {
            Some(path) => Some(load_attachment(path).await?),
            None => None,
        };

        let session = Session::start(&config);
        let result = run(
            &session.form,
            self.fields(),
            attachment,
            tokio::io::stderr(),
        )
        .await;
        session.finish().await?;
        result
    }

    /// The fields given on the command line.
    pub fn fields(&self) -> Vec<(FormField, String)> {
        [
            (FormField::FullName, &self.full_name),
            (FormField::Email, &self.email),
            (FormField::Phone, &self.phone),
            (FormField::RequestType, &self.request_type),
            (FormField::BriefDescription, &self.brief_description),
            (FormField::DetailedDescription, &self.detailed_description),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.clone().map(|value| (field, value)))
        .collect()
    }
}

pub async fn run(
    form: &impl SupportFormService,
    fields: Vec<(FormField, String)>,
    attachment: Option<Attachment>,
    mut errors: impl AsyncWrite + Unpin,
) -> anyhow::Result<()> {
    for (field, value) in fields {
        form.update_field(field, value).await;
    }
    form.select_file(attachment).await;

    match form.submit().await {
        Ok(()) => Ok(()),
        Err(SupportFormSubmitError::Invalid(field_errors)) => {
            for (field, message) in field_errors.iter() {
                errors
                    .write_all(format!("{field}: {message}\n").as_bytes())
                    .await?;
            }
            errors.flush().await?;
            bail!("The support request is incomplete")
        }
        Err(err @ SupportFormSubmitError::InProgress) => Err(err.into()),
        Err(SupportFormSubmitError::Submission(err)) => {
            Err(anyhow!(err).context("Failed to submit the support request"))
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use support_core_form_contracts::MockSupportFormService;
    use support_demo::{JANE_DRAFT, SCREENSHOT};
    use support_models::draft::SubmissionDraft;
    use support_submission_contracts::SubmissionError;

    use super::*;

    fn fields(draft: &SubmissionDraft) -> Vec<(FormField, String)> {
        FormField::ALL
            .into_iter()
            .map(|field| (field, draft.get(field).to_owned()))
            .collect()
    }

    fn expect_fields(
        form: MockSupportFormService,
        fields: &[(FormField, String)],
    ) -> MockSupportFormService {
        fields.iter().fold(form, |form, (field, value)| {
            form.with_update_field(*field, value.clone())
        })
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let fields = fields(&JANE_DRAFT);
        let form = expect_fields(MockSupportFormService::new(), &fields)
            .with_select_file(Some(SCREENSHOT.clone()))
            .with_submit(Ok(()));
        let mut output = Vec::new();

        // Act
        let result = run(&form, fields, Some(SCREENSHOT.clone()), &mut output).await;

        // Assert
        result.unwrap();
        assert!(output.is_empty());
    }

    #[tokio::test]
    async fn invalid() {
        // Arrange
        let fields = vec![(FormField::Email, "jane".to_owned())];
        let errors = SubmissionDraft::new()
            .with(FormField::Email, "jane")
            .errors();
        let form = expect_fields(MockSupportFormService::new(), &fields)
            .with_select_file(None)
            .with_submit(Err(SupportFormSubmitError::Invalid(errors)));
        let mut output = Vec::new();

        // Act
        let result = run(&form, fields, None, &mut output).await;

        // Assert
        assert_eq!(
            result.unwrap_err().to_string(),
            "The support request is incomplete"
        );
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Full name: Full name is required\n\
             Email: Invalid email address\n\
             Phone: Phone number is required\n\
             Request type: Request type is required\n\
             How can we help?: Brief description is required\n\
             Tell us everything about your problem: Detailed description is required\n"
        );
    }

    #[tokio::test]
    async fn backend_error() {
        // Arrange
        let fields = fields(&JANE_DRAFT);
        let form = expect_fields(MockSupportFormService::new(), &fields)
            .with_select_file(None)
            .with_submit(Err(SupportFormSubmitError::Submission(
                SubmissionError::Rejected {
                    reason: "Service unavailable".into(),
                },
            )));

        // Act
        let result = run(&form, fields, None, Vec::new()).await;

        // Assert
        assert_eq!(
            result.unwrap_err().to_string(),
            "Failed to submit the support request"
        );
    }

    #[test]
    fn only_given_fields() {
        let command = SubmitCommand {
            full_name: Some("Jane Doe".into()),
            email: None,
            phone: Some("5551234".into()),
            request_type: None,
            brief_description: None,
            detailed_description: Some("".into()),
            attach: None,
        };

        assert_eq!(
            command.fields(),
            [
                (FormField::FullName, "Jane Doe".to_owned()),
                (FormField::Phone, "5551234".to_owned()),
                (FormField::DetailedDescription, String::new()),
            ]
        );
    }
}
