//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use finsent_core::{ClassifyStrategy, OutputFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Classifier configuration
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Classifier-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ClassifierConfig {
    /// Lexicon file; the embedded financial lexicon is used when unset
    #[serde(default)]
    pub lexicon: Option<PathBuf>,

    /// How sentences are handed to the classifier
    #[serde(default)]
    pub strategy: ClassifyStrategy,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    #[serde(default)]
    pub default_format: OutputFormat,

    /// Escape sentence text in HTML output
    #[serde(default = "default_true")]
    pub escape_html: bool,

    /// Heading above HTML tables
    #[serde(default)]
    pub title: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            escape_html: true,
            title: None,
        }
    }
}

fn default_true() -> bool {
    true
}

impl CliConfig {
    /// Load a configuration file.
    ///
    /// A relative lexicon path is resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;

        if let (Some(lexicon), Some(dir)) = (&config.classifier.lexicon, path.parent()) {
            if lexicon.is_relative() {
                config.classifier.lexicon = Some(dir.join(lexicon));
            }
        }

        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }
}
