//! Text and JSON rendering of sorted row groups

use crate::error::Result;
use crate::grid::model::RowGroup;
use serde::Serialize;

/// Renders one row group as a line of `max_x + 1` columns
///
/// Column `i` shows the character stored under the key `i.to_string()`.
/// Missing or empty entries become a single space. Trailing spaces are kept.
pub fn render_row(group: &RowGroup) -> String {
    let mut line = String::new();
    let mut column: u64 = 0;

    while (column as f64) <= group.max_x() {
        match group.get(&column.to_string()) {
            Some(ch) if !ch.is_empty() => line.push_str(ch),
            _ => line.push(' '),
        }
        column += 1;
    }

    line
}

/// Renders every row group in order
pub fn render_grid(sorted: &[(String, RowGroup)]) -> Vec<String> {
    sorted.iter().map(|(_, group)| render_row(group)).collect()
}

/// One rendered row in JSON output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridLine {
    pub y: String,
    pub max_x: f64,
    pub line: String,
}

/// Serializes the sorted grid as a pretty-printed JSON array
pub fn grid_to_json(sorted: &[(String, RowGroup)]) -> Result<String> {
    let lines: Vec<GridLine> = sorted
        .iter()
        .map(|(y, group)| GridLine {
            y: y.clone(),
            max_x: group.max_x(),
            line: render_row(group),
        })
        .collect();

    Ok(serde_json::to_string_pretty(&lines)?)
}
