//! Plain text renderer

use super::format_score;
use crate::aggregator::ResultRow;

/// Render rows as `Text:` / `Sentiment:` blocks separated by blank lines
pub fn render_text(rows: &[ResultRow]) -> String {
    rows.iter()
        .map(|row| {
            format!(
                "Text: {}\nSentiment: {}, Score: {}\n",
                row.text,
                row.label,
                format_score(row.score)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Classification;

    #[test]
    fn test_single_row_exact_format() {
        let rows = vec![ResultRow::new(
            "growth is strong",
            Classification::new("Positive", 0.97),
        )];
        assert_eq!(
            render_text(&rows),
            "Text: growth is strong\nSentiment: Positive, Score: 0.9700\n"
        );
    }

    #[test]
    fn test_blocks_separated_by_one_blank_line() {
        let rows = vec![
            ResultRow::new("a", Classification::new("Positive", 0.5)),
            ResultRow::new("b", Classification::new("Negative", 0.25)),
        ];
        assert_eq!(
            render_text(&rows),
            "Text: a\nSentiment: Positive, Score: 0.5000\n\nText: b\nSentiment: Negative, Score: 0.2500\n"
        );
    }

    #[test]
    fn test_one_text_and_sentiment_line_per_row() {
        let rows: Vec<ResultRow> = ["x", "", "z"]
            .iter()
            .map(|s| ResultRow::new(*s, Classification::new("Neutral", 0.1)))
            .collect();
        let output = render_text(&rows);

        let texts: Vec<&str> = output.lines().filter(|l| l.starts_with("Text:")).collect();
        let sentiments = output
            .lines()
            .filter(|l| l.starts_with("Sentiment:"))
            .count();

        assert_eq!(texts, vec!["Text: x", "Text: ", "Text: z"]);
        assert_eq!(sentiments, 3);
    }

    #[test]
    fn test_label_printed_raw() {
        let rows = vec![ResultRow::new(
            "meh",
            Classification::new("Somewhat Positive", 0.6),
        )];
        assert!(render_text(&rows).contains("Sentiment: Somewhat Positive, Score: 0.6000"));
    }

    #[test]
    fn test_no_rows_is_empty() {
        assert_eq!(render_text(&[]), "");
    }
}
