//! Property tests for segmentation, aggregation and rendering

use finsent_core::*;
use proptest::prelude::*;

fn by_length() -> impl Classifier + Sync {
    from_fn(|sentence: &str| {
        let label = match sentence.len() % 4 {
            0 => "Positive",
            1 => "Negative",
            2 => "Neutral",
            _ => "Other",
        };
        Ok(Classification::new(label, (sentence.len() % 11) as f32 / 10.0))
    })
}

proptest! {
    #[test]
    fn segment_count_is_delimiters_plus_one(raw in ".*") {
        prop_assert_eq!(segment(&raw).len(), raw.matches('|').count() + 1);
    }

    #[test]
    fn segments_are_trimmed_and_delimiter_free(raw in "[ a-z|\\t]{0,40}") {
        for sentence in segment(&raw) {
            prop_assert_eq!(sentence.trim(), sentence.as_str());
            prop_assert!(!sentence.contains(DELIMITER));
        }
    }

    #[test]
    fn aggregate_preserves_count_and_order(raw in "[a-z ]{0,12}(\\|[a-z ]{0,12}){0,8}") {
        let sentences = segment(&raw);
        let rows = aggregate(&sentences, &by_length()).unwrap();

        prop_assert_eq!(rows.len(), sentences.len());
        for (row, sentence) in rows.iter().zip(&sentences) {
            prop_assert_eq!(&row.text, sentence);
            prop_assert_eq!(row.category, Category::from_label(&row.label));
        }
    }

    #[test]
    fn renderers_emit_one_entry_per_row(raw in "[a-z ]{0,12}(\\|[a-z ]{0,12}){0,8}") {
        let rows = aggregate(&segment(&raw), &by_length()).unwrap();

        let text = render_text(&rows);
        prop_assert_eq!(text.lines().filter(|l| l.starts_with("Text:")).count(), rows.len());
        prop_assert_eq!(text.lines().filter(|l| l.starts_with("Sentiment:")).count(), rows.len());

        let html = render_table(&rows);
        prop_assert_eq!(html.matches("<tr>").count(), rows.len() + 1);
        for row in &rows {
            let badge = format!("class=\"badge {}\"", row.category);
            prop_assert!(html.contains(&badge));
        }
    }
}
