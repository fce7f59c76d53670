//! Grouping of table rows into a Grid

use crate::error::{GridError, Result};
use crate::grid::model::{Cell, Grid, MAX_COLUMN};
use crate::number::{coerce_number, is_number};
use tracing::{debug, warn};

/// What to do with a row that has fewer than three cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowPolicy {
    /// Abort the whole build with [`GridError::MalformedRow`]
    #[default]
    Fail,
    /// Drop the row and log a warning
    Skip,
}

/// Builds a Grid from rows of cell texts
///
/// Cell 0 is read as x, cell 1 as the character and cell 2 as y. Rows whose
/// y does not coerce to a number are dropped silently. For a repeated
/// `(x, y)` pair the last row wins.
///
/// # Errors
///
/// Returns [`GridError::MalformedRow`] for the first short row when `policy`
/// is [`RowPolicy::Fail`], and [`GridError::RowTooWide`] for a row whose x
/// is past [`MAX_COLUMN`] regardless of `policy`
pub fn build_grid<I, R>(rows: I, policy: RowPolicy) -> Result<Grid>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[String]>,
{
    let mut grid = Grid::new();
    let mut dropped = 0usize;

    for (index, row) in rows.into_iter().enumerate() {
        let texts = row.as_ref();

        let Some(cell) = Cell::from_texts(texts) else {
            let found = texts.len();
            match policy {
                RowPolicy::Fail => return Err(GridError::MalformedRow { index, found }),
                RowPolicy::Skip => {
                    warn!(index, found, "skipping row with fewer than 3 cells");
                    continue;
                }
            }
        };

        if !is_number(&cell.y) {
            dropped += 1;
            continue;
        }

        let too_wide = coerce_number(&cell.x).filter(|x| x.is_finite() && *x > MAX_COLUMN);
        if let Some(max_x) = too_wide {
            return Err(GridError::RowTooWide { y: cell.y, max_x });
        }

        grid.insert(cell);
    }

    debug!(rows = grid.len(), dropped, "grid built");
    Ok(grid)
}
