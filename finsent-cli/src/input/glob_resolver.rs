//! Resolving `--input` patterns to input sources

use super::InputSource;
use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;

/// Resolve file patterns to input sources, in pattern order.
///
/// `-` stands for stdin. Files matched by a glob are sorted; a file matched
/// by more than one pattern is only read once.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<InputSource>> {
    let mut sources = Vec::new();

    for pattern in patterns {
        if pattern == "-" {
            if !sources.contains(&InputSource::Stdin) {
                sources.push(InputSource::Stdin);
            }
            continue;
        }

        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        let mut matched = Vec::new();
        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                matched.push(path);
            }
        }
        matched.sort();

        for path in matched {
            let source = InputSource::File(path);
            if !sources.contains(&source) {
                sources.push(source);
            }
        }
    }

    if sources.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    Ok(sources)
}
