//! Markdown table renderer

use super::format_score;
use crate::aggregator::ResultRow;
use std::fmt::Write;

/// Keep a value on one table line: line breaks become spaces, pipes are escaped
fn cell(text: &str) -> String {
    text.replace("\r\n", " ")
        .replace(['\r', '\n'], " ")
        .replace('|', "\\|")
}

/// Render rows as a Markdown table followed by a sentence count
pub fn render_markdown(rows: &[ResultRow]) -> String {
    let mut md = String::from("| Text | Score | Sentiment |\n|------|-------|-----------|\n");

    for row in rows {
        let _ = writeln!(
            md,
            "| {} | {} | {} ({}) |",
            cell(&row.text),
            format_score(row.score),
            cell(&row.label),
            row.category
        );
    }

    md.push('\n');
    md.push_str("---\n");
    let _ = writeln!(md, "*Total sentences: {}*", rows.len());
    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Classification;

    #[test]
    fn test_markdown_table() {
        let rows = vec![
            ResultRow::new("growth is strong", Classification::new("Positive", 0.97)),
            ResultRow::new("shortage", Classification::new("Negative", 0.88)),
        ];
        let md = render_markdown(&rows);

        assert!(md.starts_with("| Text | Score | Sentiment |\n"));
        assert!(md.contains("| growth is strong | 0.9700 | Positive (positive) |\n"));
        assert!(md.contains("| shortage | 0.8800 | Negative (negative) |\n"));
        assert!(md.ends_with("---\n*Total sentences: 2*\n"));
    }

    #[test]
    fn test_pipes_are_escaped() {
        let rows = vec![ResultRow::new("a|b", Classification::new("Neutral", 0.5))];
        assert!(render_markdown(&rows).contains("| a\\|b |"));
    }

    #[test]
    fn test_multiline_sentence_stays_on_one_row() {
        use crate::{aggregate, from_fn, segment};

        let classifier = from_fn(|_: &str| Ok(Classification::new("Neutral", 0.5)));
        let rows = aggregate(&segment("growth is strong\nand liquid|shortage\r\nahead"), &classifier)
            .unwrap();
        let md = render_markdown(&rows);

        assert!(md.contains("| growth is strong and liquid | 0.5000 | Neutral (neutral) |\n"));
        assert!(md.contains("| shortage ahead | 0.5000 | Neutral (neutral) |\n"));
        assert_eq!(md.lines().filter(|l| l.starts_with("| ")).count(), 3);
    }

    #[test]
    fn test_label_line_breaks_removed() {
        let rows = vec![ResultRow::new("x", Classification::new("Very\nPositive", 0.5))];
        assert!(render_markdown(&rows).contains("| x | 0.5000 | Very Positive (neutral) |\n"));
    }
}
