//! Layered error types
//!
//! Classifier implementations report [`ClassifierError`]; the pipeline wraps
//! it in [`PipelineError`] together with the sentence that failed, or as a
//! batch-level failure when the whole batch call went wrong.

use thiserror::Error;

/// Errors reported by a classifier implementation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifierError {
    /// The model or service behind the classifier cannot be reached
    #[error("classifier unavailable: {0}")]
    Unavailable(String),

    /// The classifier refused the input
    #[error("input rejected by classifier: {0}")]
    Rejected(String),

    /// The classifier produced a confidence outside `[0, 1]`
    #[error("classifier returned score {score} outside [0, 1]")]
    ScoreOutOfRange {
        /// The offending score
        score: f32,
    },

    /// A batch call did not return exactly one result per input
    #[error("classifier returned {returned} results for {expected} inputs")]
    BatchMismatch {
        /// Number of sentences sent
        expected: usize,
        /// Number of results received
        returned: usize,
    },
}

/// Pipeline-level errors
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Classification of one sentence failed; the whole request is aborted
    #[error("classification failed for sentence {index} ({sentence:?}): {source}")]
    Classification {
        /// Zero-based position of the sentence in the input
        index: usize,
        /// The sentence text as handed to the classifier
        sentence: String,
        /// Underlying classifier failure
        #[source]
        source: ClassifierError,
    },

    /// A batch call failed as a whole; no single sentence is to blame
    #[error("batch classification of {sentences} sentence(s) failed: {source}")]
    Batch {
        /// Number of sentences in the batch
        sentences: usize,
        /// Underlying classifier failure
        #[source]
        source: ClassifierError,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[cfg(feature = "json")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl PipelineError {
    /// Position of the failing sentence, if one sentence is to blame
    pub fn sentence_index(&self) -> Option<usize> {
        match self {
            PipelineError::Classification { index, .. } => Some(*index),
            _ => None,
        }
    }
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;
