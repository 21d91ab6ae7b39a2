//! Splitting raw input into classification units

/// The only input-format contract: sentences are separated by `|`
pub const DELIMITER: char = '|';

/// Split `raw` into trimmed sentences.
///
/// Every `|` produces a split, so `n` delimiters always yield `n + 1`
/// sentences. Empty pieces (leading, trailing or between adjacent
/// delimiters) are kept and handed to the classifier as-is.
pub fn segment(raw: &str) -> Vec<String> {
    raw.split(DELIMITER)
        .map(|sentence| sentence.trim().to_string())
        .collect()
}
