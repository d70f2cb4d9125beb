use std::path::Path;

use anyhow::bail;
use support_config::Config;
use support_core_form_contracts::{SupportFormService, SupportFormSubmitError};
use support_models::{
    draft::FormField,
    request::{CountryCode, RequestType},
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use super::{load_attachment, Session};

pub async fn invoke(config: Config) -> anyhow::Result<()> {
    let session = Session::start(&config);
    let terminal = Terminal {
        input: BufReader::new(tokio::io::stdin()),
        output: tokio::io::stdout(),
    };
    let result = run(&session.form, terminal).await;
    session.finish().await?;
    result
}

pub struct Terminal<R, W> {
    pub input: R,
    pub output: W,
}

impl<R: AsyncBufRead + Unpin, W: AsyncWrite + Unpin> Terminal<R, W> {
    async fn print(&mut self, text: &str) -> anyhow::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }

    async fn prompt(&mut self, prompt: &str) -> anyhow::Result<String> {
        self.print(prompt).await?;
        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            bail!("Unexpected end of input");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_owned())
    }
}

/// Asks for every field, submits the form and keeps asking for the invalid
/// fields until the request is accepted or the user gives up.
pub async fn run<R, W>(
    form: &impl SupportFormService,
    mut terminal: Terminal<R, W>,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut fields = FormField::ALL.to_vec();
    let mut ask_attachment = true;

    loop {
        for &field in &fields {
            let value = ask_field(&mut terminal, field).await?;
            form.update_field(field, value).await;
        }

        if ask_attachment {
            ask_attachment = false;
            select_attachment(form, &mut terminal).await?;
        }

        terminal.print("Submitting...\n").await?;
        match form.submit().await {
            Ok(()) => return Ok(()),
            Err(SupportFormSubmitError::Invalid(errors)) => {
                for (field, message) in errors.iter() {
                    terminal.print(&format!("{field}: {message}\n")).await?;
                }
                fields = errors.fields().collect();
            }
            Err(err @ SupportFormSubmitError::InProgress) => return Err(err.into()),
            Err(SupportFormSubmitError::Submission(err)) => {
                let retry = terminal.prompt("Retry? [y/N] ").await?;
                if !matches!(retry.trim(), "y" | "Y" | "yes") {
                    return Err(anyhow::Error::new(err)
                        .context("Failed to submit the support request"));
                }
                fields.clear();
            }
        }
    }
}

async fn ask_field<R, W>(terminal: &mut Terminal<R, W>, field: FormField) -> anyhow::Result<String>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    match field {
        FormField::Phone => {
            let prompt = format!("{field} ({}): ", CountryCode::default().dial_prefix());
            terminal.prompt(&prompt).await
        }
        FormField::RequestType => {
            let mut options = String::new();
            for (i, request_type) in RequestType::ALL.into_iter().enumerate() {
                options.push_str(&format!("  {}) {request_type}\n", i + 1));
            }
            terminal.print(&options).await?;
            let value = terminal.prompt(&format!("{field}: ")).await?;
            Ok(request_type_choice(&value).map_or(value, |x| x.label().into()))
        }
        _ => terminal.prompt(&format!("{field}: ")).await,
    }
}

/// Maps a menu number to its request type.
fn request_type_choice(value: &str) -> Option<RequestType> {
    let index = value.trim().parse::<usize>().ok()?;
    RequestType::ALL.get(index.checked_sub(1)?).copied()
}

async fn select_attachment<R, W>(
    form: &impl SupportFormService,
    terminal: &mut Terminal<R, W>,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        let path = terminal
            .prompt("Attachment (path, leave empty to skip): ")
            .await?;
        let path = path.trim();
        if path.is_empty() {
            return Ok(());
        }

        match load_attachment(Path::new(path)).await {
            Ok(attachment) => {
                form.select_file(Some(attachment)).await;
                return Ok(());
            }
            Err(err) => terminal.print(&format!("{err:#}\n")).await?,
        }
    }
}
