//! Ordering of row groups by numeric y

use crate::grid::model::{Grid, RowGroup};
use crate::number::coerce_number;
use std::cmp::Ordering;

/// Orders row groups by ascending numeric value of their y key
///
/// Distinct keys with the same value (`"1"` and `"01"`, `"0"` and `"-0"`)
/// keep their first-seen order.
pub fn sort_grid(grid: Grid) -> Vec<(String, RowGroup)> {
    let mut entries = grid.into_entries();
    entries.sort_by(|(a, _), (b, _)| {
        numeric_key(a)
            .partial_cmp(&numeric_key(b))
            .unwrap_or(Ordering::Equal)
    });
    entries
}

fn numeric_key(y: &str) -> f64 {
    // Grid only holds keys that passed the number check
    coerce_number(y).unwrap_or(f64::NAN)
}
