//! Styled HTML table renderer

use super::format_score;
use crate::aggregator::ResultRow;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::Write;

const STYLE: &str = r#"<style>
  .sentiment-table { border-collapse: collapse; width: 100%; font-family: Arial, sans-serif; }
  .sentiment-table th, .sentiment-table td { border: 1px solid #ddd; padding: 8px; text-align: left; }
  .sentiment-table th { background-color: #f2f2f2; font-weight: bold; }
  .sentiment-table tr:nth-child(even) { background-color: #fafafa; }
  .badge { display: inline-block; padding: 2px 10px; border-radius: 12px; color: #fff; font-size: 0.9em; }
  .positive { background-color: #2e7d32; }
  .negative { background-color: #c62828; }
  .neutral { background-color: #757575; }
</style>
"#;

/// Options for [`render_table_with`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableOptions {
    /// Escape sentence text and labels. Turning this off emits them verbatim.
    #[serde(default = "default_true")]
    pub escape_text: bool,
    /// Optional heading above the table
    #[serde(default)]
    pub title: Option<String>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            escape_text: true,
            title: None,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Escape the five HTML-significant characters
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

/// Render rows as a styled table with default options
pub fn render_table(rows: &[ResultRow]) -> String {
    render_table_with(rows, &TableOptions::default())
}

/// Render rows as a styled table.
///
/// The badge in the last column carries exactly one of the `positive`,
/// `negative` or `neutral` classes, taken from the row's category.
pub fn render_table_with(rows: &[ResultRow], options: &TableOptions) -> String {
    let cell = |text: &str| -> String {
        if options.escape_text {
            escape_html(text).into_owned()
        } else {
            text.to_string()
        }
    };

    let mut html = String::from(STYLE);
    html.push_str("<div class=\"sentiment-results\">\n");

    if let Some(title) = &options.title {
        let _ = writeln!(html, "<h2>{}</h2>", escape_html(title));
    }

    html.push_str("<table class=\"sentiment-table\">\n");
    html.push_str("<thead>\n<tr><th>Text</th><th>Score</th><th>Sentiment</th></tr>\n</thead>\n");
    html.push_str("<tbody>\n");

    for row in rows {
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td><span class=\"badge {}\">{}</span></td></tr>",
            cell(&row.text),
            format_score(row.score),
            row.category.as_str(),
            cell(&row.label),
        );
    }

    html.push_str("</tbody>\n</table>\n</div>\n");
    html
}
