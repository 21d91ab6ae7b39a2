//! Sentence-level sentiment pipeline
//!
//! Splits a block of `|`-delimited text into sentences, classifies each one
//! with an injected [`Classifier`], maps the classifier's label onto a closed
//! [`Category`] scheme and renders the ordered results as plain text, a
//! styled HTML table, JSON or Markdown.
//!
//! ```
//! use finsent_core::{from_fn, Classification, SentimentPipeline};
//!
//! let classifier = from_fn(|sentence: &str| {
//!     if sentence.contains("strong") {
//!         Ok(Classification::new("Positive", 0.97))
//!     } else {
//!         Ok(Classification::new("Negative", 0.88))
//!     }
//! });
//!
//! let pipeline = SentimentPipeline::new(classifier);
//! let text = pipeline
//!     .generate_text("growth is strong|there is a shortage of capital")
//!     .unwrap();
//!
//! assert!(text.contains("Score: 0.9700"));
//! assert!(text.contains("Score: 0.8800"));
//! ```

#![warn(missing_docs)]

pub mod aggregator;
pub mod category;
pub mod classifier;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod pipeline;
pub mod render;
pub mod segmenter;

// Re-export key types
pub use aggregator::{aggregate, aggregate_batch, ResultRow};
#[cfg(feature = "parallel")]
pub use aggregator::aggregate_parallel;
pub use category::Category;
pub use classifier::{from_fn, Classification, Classifier, ClassifierError, FnClassifier};
pub use config::{ClassifyStrategy, PipelineConfig, PipelineConfigBuilder};
pub use error::{PipelineError, Result};
pub use lexicon::{LexiconClassifier, LexiconConfig};
pub use pipeline::{Analysis, AnalysisMetadata, SentimentPipeline};
pub use render::{render_markdown, render_table, render_table_with, render_text};
#[cfg(feature = "json")]
pub use render::render_json;
pub use render::{OutputFormat, RenderOptions, TableOptions};
pub use segmenter::{segment, DELIMITER};
