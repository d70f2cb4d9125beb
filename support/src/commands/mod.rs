use std::path::Path;

use anyhow::Context;
use support_config::Config;
use support_models::attachment::Attachment;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::{
    environment::{Environment, SupportForm},
    presenter,
};

pub mod interactive;
pub mod submit;

/// A support form whose notifications are printed to stdout.
struct Session {
    form: SupportForm,
    presenter: JoinHandle<std::io::Result<()>>,
}

impl Session {
    fn start(config: &Config) -> Self {
        let Environment {
            form,
            notifications,
        } = Environment::new(config);
        let presenter = tokio::spawn(presenter::present(notifications, tokio::io::stdout()));
        Self { form, presenter }
    }

    /// Drops the form and waits until all of its notifications are printed.
    async fn finish(self) -> anyhow::Result<()> {
        drop(self.form);
        self.presenter
            .await?
            .context("Failed to print notifications")
    }
}

/// Reads the file at `path` into an attachment named after the file.
pub async fn load_attachment(path: &Path) -> anyhow::Result<Attachment> {
    let content = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read attachment at {}", path.display()))?;
    let name = path
        .file_name()
        .map(|x| x.to_string_lossy().into_owned())
        .with_context(|| format!("{} is not a file", path.display()))?;
    let attachment = Attachment::new(name, content);
    debug!(?attachment, "loaded attachment");
    Ok(attachment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn load_manifest() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");

        let attachment = load_attachment(&path).await.unwrap();

        assert_eq!(attachment.name, "Cargo.toml");
        assert!(std::str::from_utf8(&attachment.content)
            .unwrap()
            .contains("name = \"support\""));
    }

    #[tokio::test]
    async fn load_missing() {
        let err = load_attachment(Path::new("/nonexistent/screenshot.png"))
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Failed to read attachment at /nonexistent/screenshot.png"
        );
    }
}
