//! Output handling module

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes rendered documents, one after another, separated by a blank line
pub struct DocumentWriter<W: Write> {
    writer: W,
    written: usize,
}

impl DocumentWriter<Box<dyn Write>> {
    /// Write to `path`, or to stdout when no path is given
    pub fn create(path: Option<&Path>) -> Result<Self> {
        let writer: Box<dyn Write> = match path {
            Some(path) => {
                let file = File::create(path).with_context(|| {
                    format!("Failed to create output file: {}", path.display())
                })?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(BufWriter::new(io::stdout())),
        };
        Ok(Self::new(writer))
    }
}

impl<W: Write> DocumentWriter<W> {
    /// Wrap an existing writer
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Write one rendered document.
    ///
    /// A trailing newline is added when the document lacks one.
    pub fn write_document(&mut self, rendered: &str) -> Result<()> {
        if self.written > 0 {
            writeln!(self.writer)?;
        }

        self.writer.write_all(rendered.as_bytes())?;
        if !rendered.is_empty() && !rendered.ends_with('\n') {
            writeln!(self.writer)?;
        }

        self.written += 1;
        Ok(())
    }

    /// Number of documents written so far
    pub fn documents_written(&self) -> usize {
        self.written
    }

    /// Flush and return the inner writer
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush().context("Failed to flush output")?;
        Ok(self.writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_single_document_gets_newline() {
        let mut writer = DocumentWriter::new(Vec::new());
        writer.write_document("<table></table>").unwrap();
        let out = writer.finish().unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "<table></table>\n");
    }

    #[test]
    fn test_documents_separated_by_blank_line() {
        let mut writer = DocumentWriter::new(Vec::new());
        writer
            .write_document("Text: a\nSentiment: Positive, Score: 0.9700\n")
            .unwrap();
        writer
            .write_document("Text: b\nSentiment: Negative, Score: 0.8800\n")
            .unwrap();
        assert_eq!(writer.documents_written(), 2);

        let out = String::from_utf8(writer.finish().unwrap()).unwrap();
        assert_eq!(
            out,
            "Text: a\nSentiment: Positive, Score: 0.9700\n\nText: b\nSentiment: Negative, Score: 0.8800\n"
        );
    }

    #[test]
    fn test_empty_document_writes_nothing() {
        let mut writer = DocumentWriter::new(Vec::new());
        writer.write_document("").unwrap();
        assert!(writer.finish().unwrap().is_empty());
    }

    #[test]
    fn test_create_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.html");

        let mut writer = DocumentWriter::create(Some(&path)).unwrap();
        writer.write_document("<div></div>").unwrap();
        writer.finish().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<div></div>\n");
    }
}
