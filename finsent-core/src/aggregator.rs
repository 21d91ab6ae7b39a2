//! Per-sentence classification and category mapping
//!
//! Every entry point returns exactly one [`ResultRow`] per input sentence, in
//! input order, or fails as a whole. There is no partial result.

use crate::{
    category::Category,
    classifier::{Classification, Classifier, ClassifierError},
    error::{PipelineError, Result},
};
use serde::{Deserialize, Serialize};

/// One classified sentence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    /// The trimmed sentence text
    pub text: String,
    /// Raw label from the classifier
    pub label: String,
    /// Classifier confidence in `[0, 1]`
    pub score: f32,
    /// Display bucket derived from `label`
    pub category: Category,
}

impl ResultRow {
    /// Build a row, deriving the category from the label
    pub fn new(text: impl Into<String>, classification: Classification) -> Self {
        let category = Category::from_label(&classification.label);
        Self {
            text: text.into(),
            label: classification.label,
            score: classification.score,
            category,
        }
    }
}

fn classification_failed(index: usize, sentence: &str, source: ClassifierError) -> PipelineError {
    log::warn!("classification aborted at sentence {index}: {source}");
    PipelineError::Classification {
        index,
        sentence: sentence.to_string(),
        source,
    }
}

fn batch_failed(sentences: usize, source: ClassifierError) -> PipelineError {
    log::warn!("batch classification of {sentences} sentence(s) aborted: {source}");
    PipelineError::Batch { sentences, source }
}

/// Classify each sentence with one call per sentence, in order.
///
/// Stops at the first failure; sentences after it are never sent to the
/// classifier.
pub fn aggregate<C>(sentences: &[String], classifier: &C) -> Result<Vec<ResultRow>>
where
    C: Classifier + ?Sized,
{
    let mut rows = Vec::with_capacity(sentences.len());

    for (index, sentence) in sentences.iter().enumerate() {
        let classification = classifier
            .classify(sentence)
            .and_then(Classification::checked)
            .map_err(|e| classification_failed(index, sentence, e))?;

        log::debug!(
            "sentence {index}: {} ({:.4})",
            classification.label,
            classification.score
        );
        rows.push(ResultRow::new(sentence.as_str(), classification));
    }

    Ok(rows)
}

/// Classify all sentences with a single batch call.
///
/// The classifier must hand back one result per sentence in the same order;
/// anything else fails the request. A failed batch call is reported as
/// [`PipelineError::Batch`] since it names no sentence; a bad score in an
/// otherwise complete batch is reported against its sentence.
pub fn aggregate_batch<C>(sentences: &[String], classifier: &C) -> Result<Vec<ResultRow>>
where
    C: Classifier + ?Sized,
{
    let inputs: Vec<&str> = sentences.iter().map(String::as_str).collect();

    let results = classifier
        .classify_batch(&inputs)
        .map_err(|e| batch_failed(sentences.len(), e))?;

    if results.len() != sentences.len() {
        return Err(batch_failed(
            sentences.len(),
            ClassifierError::BatchMismatch {
                expected: sentences.len(),
                returned: results.len(),
            },
        ));
    }

    sentences
        .iter()
        .zip(results)
        .enumerate()
        .map(|(index, (sentence, classification))| {
            let classification = classification
                .checked()
                .map_err(|e| classification_failed(index, sentence, e))?;
            Ok(ResultRow::new(sentence.as_str(), classification))
        })
        .collect()
}

/// Classify sentences concurrently, reassembling rows in input order.
///
/// Any failure fails the request. When several sentences fail, which one is
/// reported is unspecified.
#[cfg(feature = "parallel")]
pub fn aggregate_parallel<C>(sentences: &[String], classifier: &C) -> Result<Vec<ResultRow>>
where
    C: Classifier + Sync + ?Sized,
{
    use rayon::prelude::*;

    sentences
        .par_iter()
        .enumerate()
        .map(|(index, sentence)| {
            let classification = classifier
                .classify(sentence)
                .and_then(Classification::checked)
                .map_err(|e| classification_failed(index, sentence, e))?;
            Ok(ResultRow::new(sentence.as_str(), classification))
        })
        .collect()
}
