//! Deterministic lexicon-based classifier
//!
//! Lets the pipeline run without a model runtime. Words are looked up in a
//! TOML-configured table of positive and negative weights; the clamped sum
//! decides the label and the confidence.

use crate::{
    classifier::{Classification, Classifier, ClassifierError},
    error::{PipelineError, Result},
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

/// The embedded financial-news lexicon
pub const FINANCIAL_LEXICON_TOML: &str = include_str!("../lexicons/financial.toml");

/// Lexicon configuration as stored in TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// Name and description
    pub metadata: LexiconMetadata,
    /// Labels emitted by the classifier
    #[serde(default)]
    pub labels: LabelConfig,
    /// Score thresholds
    #[serde(default)]
    pub scoring: ScoringConfig,
    /// Negation handling
    #[serde(default)]
    pub negation: NegationConfig,
    /// Weighted terms
    pub terms: TermConfig,
}

/// Lexicon metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconMetadata {
    /// Short name, reported as the classifier name
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
}

/// Labels emitted for each outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelConfig {
    /// Label for a positive sum
    pub positive: String,
    /// Label for a negative sum
    pub negative: String,
    /// Label for a sum inside the neutral band
    pub neutral: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            positive: "Positive".to_string(),
            negative: "Negative".to_string(),
            neutral: "Neutral".to_string(),
        }
    }
}

/// Scoring parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Absolute sums below this are neutral
    #[serde(default = "default_neutral_threshold")]
    pub neutral_threshold: f32,
    /// Number of words after a negation that a term may appear in to be flipped
    #[serde(default = "default_negation_window")]
    pub negation_window: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            neutral_threshold: default_neutral_threshold(),
            negation_window: default_negation_window(),
        }
    }
}

fn default_neutral_threshold() -> f32 {
    0.1
}

fn default_negation_window() -> usize {
    3
}

/// Negation words
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NegationConfig {
    /// Words that flip the sign of the next matched term
    #[serde(default)]
    pub words: Vec<String>,
}

/// Weighted term tables; weights are magnitudes in `(0, 1]`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TermConfig {
    /// Terms contributing a positive weight
    #[serde(default)]
    pub positive: BTreeMap<String, f32>,
    /// Terms contributing a negative weight
    #[serde(default)]
    pub negative: BTreeMap<String, f32>,
}

impl LexiconConfig {
    /// Parse and validate the embedded financial lexicon
    pub fn financial() -> Result<Self> {
        Self::from_toml_str(FINANCIAL_LEXICON_TOML)
            .map_err(|e| PipelineError::Config(format!("embedded financial lexicon: {e}")))
    }

    /// Parse and validate a lexicon from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: LexiconConfig = toml::from_str(content)
            .map_err(|e| PipelineError::Config(format!("Failed to parse lexicon TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a lexicon file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PipelineError::Config(format!("Failed to read file '{}': {}", path.display(), e))
        })?;

        Self::from_toml_str(&content).map_err(|e| match e {
            PipelineError::Config(msg) => {
                PipelineError::Config(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Check the configuration for values the classifier cannot use
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(PipelineError::Config(msg));

        if self.metadata.name.trim().is_empty() {
            return invalid("lexicon name must not be empty".to_string());
        }

        let labels = [
            &self.labels.positive,
            &self.labels.negative,
            &self.labels.neutral,
        ];
        if labels.iter().any(|l| l.trim().is_empty()) {
            return invalid("labels must not be empty".to_string());
        }
        if labels[0] == labels[1] || labels[0] == labels[2] || labels[1] == labels[2] {
            return invalid("positive, negative and neutral labels must differ".to_string());
        }

        let threshold = self.scoring.neutral_threshold;
        if !(0.0..1.0).contains(&threshold) {
            return invalid(format!(
                "neutral_threshold must be in [0, 1), got {threshold}"
            ));
        }

        if self.terms.positive.is_empty() && self.terms.negative.is_empty() {
            return invalid("lexicon defines no terms".to_string());
        }

        let mut seen = HashSet::new();
        for (table, terms) in [
            ("positive", &self.terms.positive),
            ("negative", &self.terms.negative),
        ] {
            for (term, &weight) in terms {
                let normalized = term.to_lowercase();
                if normalized.is_empty() || normalized.contains(char::is_whitespace) {
                    return invalid(format!("{table} term {term:?} must be a single word"));
                }
                if !(weight > 0.0 && weight <= 1.0) {
                    return invalid(format!(
                        "{table} term '{term}' has weight {weight}, expected (0, 1]"
                    ));
                }
                if !seen.insert(normalized) {
                    return invalid(format!("term '{term}' appears more than once"));
                }
            }
        }

        Ok(())
    }
}

/// Classifier scoring sentences against a [`LexiconConfig`]
#[derive(Debug, Clone)]
pub struct LexiconClassifier {
    name: String,
    labels: LabelConfig,
    neutral_threshold: f32,
    negation_window: usize,
    weights: HashMap<String, f32>,
    negations: HashSet<String>,
}

fn normalize(word: &str) -> String {
    word.trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

impl LexiconClassifier {
    /// Build a classifier from a validated configuration
    pub fn new(config: LexiconConfig) -> Result<Self> {
        config.validate()?;

        let weights = config
            .terms
            .positive
            .iter()
            .map(|(term, &w)| (term.to_lowercase(), w))
            .chain(
                config
                    .terms
                    .negative
                    .iter()
                    .map(|(term, &w)| (term.to_lowercase(), -w)),
            )
            .collect();

        let negations = config
            .negation
            .words
            .iter()
            .map(|w| normalize(w))
            .filter(|w| !w.is_empty())
            .collect();

        Ok(Self {
            name: format!("lexicon:{}", config.metadata.name),
            labels: config.labels,
            neutral_threshold: config.scoring.neutral_threshold,
            negation_window: config.scoring.negation_window,
            weights,
            negations,
        })
    }

    /// Classifier using the embedded financial lexicon
    pub fn financial() -> Result<Self> {
        Self::new(LexiconConfig::financial()?)
    }

    /// Classifier using a lexicon file
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::new(LexiconConfig::from_file(path)?)
    }

    /// Labels this classifier emits
    pub fn labels(&self) -> &LabelConfig {
        &self.labels
    }

    /// Signed lexicon sum for `text`, clamped to `[-1, 1]`
    pub fn raw_score(&self, text: &str) -> f32 {
        let mut score = 0.0_f32;
        let mut negation_left = 0usize;

        for word in text.split_whitespace() {
            let word = normalize(word);
            if word.is_empty() {
                continue;
            }

            if self.negations.contains(&word) {
                negation_left = self.negation_window;
                continue;
            }

            match self.weights.get(&word) {
                Some(&weight) => {
                    score += if negation_left > 0 { -weight } else { weight };
                    negation_left = 0;
                }
                None => negation_left = negation_left.saturating_sub(1),
            }
        }

        score.clamp(-1.0, 1.0)
    }
}

impl Classifier for LexiconClassifier {
    fn classify(&self, sentence: &str) -> std::result::Result<Classification, ClassifierError> {
        let raw = self.raw_score(sentence);
        let magnitude = raw.abs();

        let classification = if magnitude < self.neutral_threshold {
            Classification::new(self.labels.neutral.as_str(), 1.0 - magnitude)
        } else if raw > 0.0 {
            Classification::new(self.labels.positive.as_str(), 0.5 + magnitude / 2.0)
        } else {
            Classification::new(self.labels.negative.as_str(), 0.5 + magnitude / 2.0)
        };

        Ok(classification)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
