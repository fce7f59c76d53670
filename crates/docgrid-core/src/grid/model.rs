//! Cell, RowGroup and Grid types

use crate::number::{coerce_number, is_coercion_whitespace};
use std::collections::HashMap;

/// Column index every row group starts from
pub const INITIAL_MAX_X: f64 = 1.0;

/// Largest column a row may reach before the grid is rejected
pub const MAX_COLUMN: f64 = 1_000_000.0;

/// One `(x, char, y)` triple read positionally from a table row
///
/// All three values are kept as trimmed text. A non-numeric `x` or `y` is
/// not an error here; the grid builder decides what to do with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub x: String,
    pub ch: String,
    pub y: String,
}

impl Cell {
    /// Reads a cell from the first three cell texts of a row
    ///
    /// # Returns
    ///
    /// `None` if the row has fewer than three cells
    pub fn from_texts<S: AsRef<str>>(texts: &[S]) -> Option<Self> {
        match texts {
            [x, ch, y, ..] => Some(Self {
                x: trim_text(x.as_ref()),
                ch: trim_text(ch.as_ref()),
                y: trim_text(y.as_ref()),
            }),
            _ => None,
        }
    }
}

fn trim_text(text: &str) -> String {
    text.trim_matches(is_coercion_whitespace).to_string()
}

/// Characters placed on one row of the grid
#[derive(Debug, Clone, PartialEq)]
pub struct RowGroup {
    max_x: f64,
    chars: HashMap<String, String>,
}

impl Default for RowGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl RowGroup {
    pub fn new() -> Self {
        Self {
            max_x: INITIAL_MAX_X,
            chars: HashMap::new(),
        }
    }

    /// Largest numeric column seen on this row (at least 1)
    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    /// Character stored under the raw column key `x`
    pub fn get(&self, x: &str) -> Option<&str> {
        self.chars.get(x).map(String::as_str)
    }

    /// Number of distinct column keys stored
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Stores `ch` under the raw key `x`, replacing any earlier value
    ///
    /// `max_x` only grows when `x` coerces to a finite number larger than
    /// the current maximum. Keys such as `"abc"` or `"01"` are still stored
    /// even though rendering never looks them up.
    pub fn insert(&mut self, x: String, ch: String) {
        if let Some(value) = coerce_number(&x) {
            if value.is_finite() && value > self.max_x {
                self.max_x = value;
            }
        }
        self.chars.insert(x, ch);
    }
}

/// Row groups keyed by the raw `y` text, in first-seen order
#[derive(Debug, Clone, Default)]
pub struct Grid {
    rows: Vec<(String, RowGroup)>,
    index: HashMap<String, usize>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a cell on its row, creating the row group on first sight of `y`
    pub fn insert(&mut self, cell: Cell) {
        let Cell { x, ch, y } = cell;
        self.row_mut(y).insert(x, ch);
    }

    fn row_mut(&mut self, y: String) -> &mut RowGroup {
        let position = match self.index.get(&y) {
            Some(&position) => position,
            None => {
                let position = self.rows.len();
                self.index.insert(y.clone(), position);
                self.rows.push((y, RowGroup::new()));
                position
            }
        };
        &mut self.rows[position].1
    }

    pub fn get(&self, y: &str) -> Option<&RowGroup> {
        self.index.get(y).map(|&position| &self.rows[position].1)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RowGroup)> {
        self.rows.iter().map(|(y, group)| (y.as_str(), group))
    }

    pub fn into_entries(self) -> Vec<(String, RowGroup)> {
        self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_from_texts_trims() {
        let cell = Cell::from_texts(&[" 3 ", "\nZ ", "0"]).unwrap();
        assert_eq!(
            cell,
            Cell {
                x: "3".to_string(),
                ch: "Z".to_string(),
                y: "0".to_string(),
            }
        );
    }

    #[test]
    fn test_cell_from_texts_trims_byte_order_mark() {
        let cell = Cell::from_texts(&["\u{feff}1", "Z\u{feff}", " \u{feff}0"]).unwrap();
        assert_eq!(cell.x, "1");
        assert_eq!(cell.ch, "Z");
        assert_eq!(cell.y, "0");
    }

    #[test]
    fn test_cell_from_texts_ignores_extra_cells() {
        let cell = Cell::from_texts(&["1", "A", "2", "ignored"]).unwrap();
        assert_eq!(cell.y, "2");
    }

    #[test]
    fn test_cell_from_short_row() {
        assert!(Cell::from_texts(&["1", "A"]).is_none());
        assert!(Cell::from_texts::<&str>(&[]).is_none());
    }

    #[test]
    fn test_row_group_starts_at_one() {
        let group = RowGroup::new();
        assert_eq!(group.max_x(), 1.0);
        assert!(group.is_empty());
    }

    #[test]
    fn test_row_group_max_x_numeric_comparison() {
        let mut group = RowGroup::new();
        group.insert("9".to_string(), "a".to_string());
        group.insert("10".to_string(), "b".to_string());
        // "9" > "10" as strings, but not as numbers
        assert_eq!(group.max_x(), 10.0);

        group.insert("2".to_string(), "c".to_string());
        assert_eq!(group.max_x(), 10.0);
    }

    #[test]
    fn test_row_group_stores_non_numeric_x_without_growing() {
        let mut group = RowGroup::new();
        group.insert("abc".to_string(), "q".to_string());
        assert_eq!(group.max_x(), 1.0);
        assert_eq!(group.get("abc"), Some("q"));
    }

    #[test]
    fn test_row_group_ignores_infinite_x_for_width() {
        let mut group = RowGroup::new();
        group.insert("Infinity".to_string(), "q".to_string());
        assert_eq!(group.max_x(), 1.0);
        assert_eq!(group.get("Infinity"), Some("q"));
    }

    #[test]
    fn test_row_group_last_write_wins() {
        let mut group = RowGroup::new();
        group.insert("0".to_string(), "a".to_string());
        group.insert("0".to_string(), "b".to_string());
        assert_eq!(group.get("0"), Some("b"));
        assert_eq!(group.len(), 1);
    }

    #[test]
    fn test_grid_keeps_first_seen_order() {
        let mut grid = Grid::new();
        for (x, y) in [("0", "5"), ("0", "1"), ("1", "5")] {
            grid.insert(Cell {
                x: x.to_string(),
                ch: "#".to_string(),
                y: y.to_string(),
            });
        }

        let keys: Vec<&str> = grid.iter().map(|(y, _)| y).collect();
        assert_eq!(keys, vec!["5", "1"]);
        assert_eq!(grid.get("5").map(RowGroup::len), Some(2));
        assert!(grid.get("7").is_none());
    }
}
