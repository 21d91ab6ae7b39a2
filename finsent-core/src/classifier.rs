//! The classifier capability consumed by the pipeline
//!
//! The pipeline never loads a model itself. Callers construct a classifier
//! once and hand it in; anything implementing [`Classifier`] works, from a
//! wrapped inference session to the built-in
//! [`LexiconClassifier`](crate::LexiconClassifier) or a closure via
//! [`from_fn`].

use std::sync::Arc;

pub use crate::error::ClassifierError;

/// A label and confidence returned for one sentence
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// Label from the model's own vocabulary (e.g. `Positive`)
    pub label: String,
    /// Confidence in `[0, 1]`
    pub score: f32,
}

impl Classification {
    /// Create a new classification
    pub fn new(label: impl Into<String>, score: f32) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }

    /// Reject NaN and scores outside `[0, 1]`
    pub(crate) fn checked(self) -> Result<Self, ClassifierError> {
        if (0.0..=1.0).contains(&self.score) {
            Ok(self)
        } else {
            Err(ClassifierError::ScoreOutOfRange { score: self.score })
        }
    }
}

/// Sentence-level sentiment classifier
pub trait Classifier {
    /// Classify a single sentence
    fn classify(&self, sentence: &str) -> Result<Classification, ClassifierError>;

    /// Classify an ordered batch of sentences.
    ///
    /// Must return exactly one result per input, in input order. The
    /// default calls [`Classifier::classify`] once per sentence and stops at
    /// the first failure.
    fn classify_batch(&self, sentences: &[&str]) -> Result<Vec<Classification>, ClassifierError> {
        sentences
            .iter()
            .map(|sentence| self.classify(sentence))
            .collect()
    }

    /// Human-readable name, used in logs and metadata
    fn name(&self) -> &str {
        "classifier"
    }
}

impl<C: Classifier + ?Sized> Classifier for &C {
    fn classify(&self, sentence: &str) -> Result<Classification, ClassifierError> {
        (**self).classify(sentence)
    }

    fn classify_batch(&self, sentences: &[&str]) -> Result<Vec<Classification>, ClassifierError> {
        (**self).classify_batch(sentences)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<C: Classifier + ?Sized> Classifier for Box<C> {
    fn classify(&self, sentence: &str) -> Result<Classification, ClassifierError> {
        (**self).classify(sentence)
    }

    fn classify_batch(&self, sentences: &[&str]) -> Result<Vec<Classification>, ClassifierError> {
        (**self).classify_batch(sentences)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<C: Classifier + ?Sized> Classifier for Arc<C> {
    fn classify(&self, sentence: &str) -> Result<Classification, ClassifierError> {
        (**self).classify(sentence)
    }

    fn classify_batch(&self, sentences: &[&str]) -> Result<Vec<Classification>, ClassifierError> {
        (**self).classify_batch(sentences)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Classifier backed by a closure. Construct with [`from_fn`].
#[derive(Clone)]
pub struct FnClassifier<F> {
    f: F,
    name: String,
}

impl<F> FnClassifier<F> {
    /// Set the name reported by [`Classifier::name`]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl<F> std::fmt::Debug for FnClassifier<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnClassifier")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<F> Classifier for FnClassifier<F>
where
    F: Fn(&str) -> Result<Classification, ClassifierError>,
{
    fn classify(&self, sentence: &str) -> Result<Classification, ClassifierError> {
        (self.f)(sentence)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Wrap a closure as a [`Classifier`]
pub fn from_fn<F>(f: F) -> FnClassifier<F>
where
    F: Fn(&str) -> Result<Classification, ClassifierError>,
{
    FnClassifier {
        f,
        name: "fn".to_string(),
    }
}
