//! Pipeline configuration

use crate::error::{PipelineError, Result};
use crate::render::{OutputFormat, RenderOptions};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How sentences are handed to the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifyStrategy {
    /// One call per sentence, in order
    #[default]
    Sequential,
    /// One batch call for the whole input
    Batched,
    /// Concurrent per-sentence calls, reassembled in order; needs a `Sync`
    /// classifier
    Parallel,
}

impl ClassifyStrategy {
    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassifyStrategy::Sequential => "sequential",
            ClassifyStrategy::Batched => "batched",
            ClassifyStrategy::Parallel => "parallel",
        }
    }
}

impl fmt::Display for ClassifyStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClassifyStrategy {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sequential" => Ok(ClassifyStrategy::Sequential),
            "batched" | "batch" => Ok(ClassifyStrategy::Batched),
            "parallel" => Ok(ClassifyStrategy::Parallel),
            other => Err(PipelineError::Config(format!(
                "unknown classify strategy '{other}'"
            ))),
        }
    }
}

/// Configuration for a [`SentimentPipeline`](crate::SentimentPipeline)
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    /// Classifier invocation strategy
    pub strategy: ClassifyStrategy,
    /// Format used by [`SentimentPipeline::render`](crate::SentimentPipeline::render)
    pub format: OutputFormat,
    /// Rendering options
    pub render: RenderOptions,
}

impl PipelineConfig {
    /// Create a builder
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct PipelineConfigBuilder {
    config: PipelineConfig,
}

impl PipelineConfigBuilder {
    /// Set the classify strategy
    pub fn strategy(mut self, strategy: ClassifyStrategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    /// Set the default output format
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.config.format = format;
        self
    }

    /// Toggle HTML escaping of sentence text in tables
    pub fn escape_html(mut self, escape: bool) -> Self {
        self.config.render.table.escape_text = escape;
        self
    }

    /// Heading rendered above the table
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.render.table.title = Some(title.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<PipelineConfig> {
        #[cfg(not(feature = "parallel"))]
        if self.config.strategy == ClassifyStrategy::Parallel {
            return Err(PipelineError::Config(
                "parallel strategy requires the `parallel` feature".to_string(),
            ));
        }

        #[cfg(not(feature = "json"))]
        if self.config.format == OutputFormat::Json {
            return Err(PipelineError::Config(
                "json output requires the `json` feature".to_string(),
            ));
        }

        Ok(self.config)
    }
}
