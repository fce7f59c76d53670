//! Grid model and transformations for docgrid.
//!
//! A table of `(x, char, y)` rows is turned into text in three steps:
//!
//! ```text
//! build_grid(rows)      rows with numeric y grouped by y key
//!     ↓
//! sort_grid(grid)       groups ordered by ascending numeric y
//!     ↓
//! render_row(group)     one space-padded line per group
//! ```
//!
//! Numeric tests go through [`number::coerce_number`], which accepts the
//! same loose literals a dynamic-language `Number()` conversion would
//! (surrounding whitespace, empty string as zero, hex/octal/binary and
//! exponent forms).
//!
//! # Example
//!
//! ```
//! use docgrid_core::{RowPolicy, build_grid, render_row, sort_grid};
//!
//! let rows = vec![
//!     vec!["0".to_string(), "H".to_string(), "0".to_string()],
//!     vec!["1".to_string(), "I".to_string(), "0".to_string()],
//!     vec!["0".to_string(), "X".to_string(), "1".to_string()],
//! ];
//!
//! let grid = build_grid(&rows, RowPolicy::Fail).unwrap();
//! let lines: Vec<String> = sort_grid(grid)
//!     .iter()
//!     .map(|(_, group)| render_row(group))
//!     .collect();
//!
//! assert_eq!(lines, vec!["HI", "X "]);
//! ```

pub mod error;
pub mod grid;
pub mod number;

// Re-export commonly used types
pub use error::{GridError, Result};
pub use grid::{
    Cell, Grid, GridLine, MAX_COLUMN, RowGroup, RowPolicy, build_grid, grid_to_json, render_grid,
    render_row, sort_grid,
};
pub use number::{coerce_number, is_number};
