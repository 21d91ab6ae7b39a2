//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::Result;
use std::fmt;
use std::path::PathBuf;

/// One raw input document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Text given on the command line
    Text(String),
    /// A file on disk
    File(PathBuf),
    /// Standard input
    Stdin,
}

impl InputSource {
    /// Read the raw text of this source
    pub fn read(&self) -> Result<String> {
        match self {
            InputSource::Text(text) => Ok(text.clone()),
            InputSource::File(path) => FileReader::read_text(path),
            InputSource::Stdin => FileReader::read_stdin(),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Text(_) => write!(f, "<text>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
            InputSource::Stdin => write!(f, "<stdin>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_source_reads_verbatim() {
        let source = InputSource::Text(" a | b ".to_string());
        assert_eq!(source.read().unwrap(), " a | b ");
        assert_eq!(source.to_string(), "<text>");
    }

    #[test]
    fn test_display_names() {
        assert_eq!(InputSource::Stdin.to_string(), "<stdin>");
        assert_eq!(
            InputSource::File(PathBuf::from("news/q1.txt")).to_string(),
            "news/q1.txt"
        );
    }
}
