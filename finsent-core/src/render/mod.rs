//! Output rendering
//!
//! Every renderer is a pure function of the ordered rows. Scores are always
//! printed with exactly four decimals.

use crate::{
    aggregator::ResultRow,
    error::{PipelineError, Result},
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod html;
#[cfg(feature = "json")]
pub mod json;
pub mod markdown;
pub mod text;

pub use html::{escape_html, render_table, render_table_with, TableOptions};
#[cfg(feature = "json")]
pub use json::render_json;
pub use markdown::render_markdown;
pub use text::render_text;

/// Format a score the way every renderer prints it
pub fn format_score(score: f32) -> String {
    format!("{score:.4}")
}

/// Options shared by all renderers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// HTML table options
    #[serde(default)]
    pub table: TableOptions,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `Text:` / `Sentiment:` blocks
    #[default]
    Text,
    /// Styled HTML table with category badges
    Html,
    /// JSON array of rows
    Json,
    /// Markdown table
    Markdown,
}

impl OutputFormat {
    /// All formats, in listing order
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Text,
        OutputFormat::Html,
        OutputFormat::Json,
        OutputFormat::Markdown,
    ];

    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// One-line description for listings
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Plain text, one Text/Sentiment block per sentence",
            OutputFormat::Html => "Styled HTML table with sentiment badges",
            OutputFormat::Json => "JSON array of classified sentences",
            OutputFormat::Markdown => "Markdown table with a sentence count",
        }
    }

    /// Render `rows` in this format
    pub fn render(&self, rows: &[ResultRow], options: &RenderOptions) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(render_text(rows)),
            OutputFormat::Html => Ok(render_table_with(rows, &options.table)),
            #[cfg(feature = "json")]
            OutputFormat::Json => render_json(rows),
            #[cfg(not(feature = "json"))]
            OutputFormat::Json => Err(PipelineError::Config(
                "json output requires the `json` feature".to_string(),
            )),
            OutputFormat::Markdown => Ok(render_markdown(rows)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "html" | "table" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => Err(PipelineError::Config(format!(
                "unknown output format '{other}'"
            ))),
        }
    }
}
