//! Sparse character grid built from table rows

mod build;
mod model;
mod render;
mod sort;

pub use build::{RowPolicy, build_grid};
pub use model::{Cell, Grid, MAX_COLUMN, RowGroup};
pub use render::{GridLine, grid_to_json, render_grid, render_row};
pub use sort::sort_grid;
