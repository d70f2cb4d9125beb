use std::path::Path;

use anyhow::Context;
use config::{File, FileFormat};
pub use duration::Duration;
use serde::Deserialize;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Loads the configuration by merging the given TOML files in order. Later
/// files override values of earlier ones.
pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub submission: SubmissionConfig,
}

#[derive(Debug, Deserialize)]
pub struct SubmissionConfig {
    /// How long the simulated backend takes to accept a request.
    pub delay: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        let config = load(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap();

        assert_eq!(*config.submission.delay, std::time::Duration::from_millis(1500));
    }

    #[test]
    fn missing_file() {
        let err = load(&[Path::new("/nonexistent/support.toml")]).unwrap_err();

        assert!(err.to_string().contains("/nonexistent/support.toml"));
    }
}
