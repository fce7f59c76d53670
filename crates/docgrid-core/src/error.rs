use crate::grid::MAX_COLUMN;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("Malformed row {index}: expected at least 3 cells, found {found}")]
    MalformedRow { index: usize, found: usize },

    #[error("Row {y} is too wide: column {max_x} exceeds the limit of {limit}", limit = MAX_COLUMN)]
    RowTooWide { y: String, max_x: f64 },

    #[error("Failed to serialize grid: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GridError>;
