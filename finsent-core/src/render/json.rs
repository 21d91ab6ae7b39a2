//! JSON renderer

use crate::aggregator::ResultRow;
use crate::error::Result;

/// Render rows as a pretty-printed JSON array
pub fn render_json(rows: &[ResultRow]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(rows)?;
    json.push('\n');
    Ok(json)
}
