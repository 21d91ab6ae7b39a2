//! Display categories derived from classifier labels

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label the classifier uses for positive sentiment
pub const POSITIVE_LABEL: &str = "Positive";

/// Label the classifier uses for negative sentiment
pub const NEGATIVE_LABEL: &str = "Negative";

/// One of the three canonical display buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Label was exactly `Positive`
    Positive,
    /// Label was exactly `Negative`
    Negative,
    /// Any other label
    Neutral,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 3] = [Category::Positive, Category::Negative, Category::Neutral];

    /// Map a raw classifier label onto a category.
    ///
    /// Matching is exact and case-sensitive. Unknown labels fall back to
    /// [`Category::Neutral`].
    pub fn from_label(label: &str) -> Self {
        match label {
            POSITIVE_LABEL => Category::Positive,
            NEGATIVE_LABEL => Category::Negative,
            _ => Category::Neutral,
        }
    }

    /// Lowercase name, also used as the CSS class of the badge
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Positive => "positive",
            Category::Negative => "negative",
            Category::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
