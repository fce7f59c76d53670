//! HTML parsing and table extraction

mod helpers;
pub mod parse;
pub mod table;

use thiserror::Error;

// Re-exports
pub use parse::{HtmlDocument, parse_html};
pub use table::{TableRow, extract_rows};

/// HTML processing errors
#[derive(Debug, Error)]
pub enum HtmlError {
    /// Markup could not be read into a document tree
    #[error("Failed to parse document: {0}")]
    ParseError(String),

    /// Document has no `<table>` element
    #[error("No table found in the document")]
    NoTable,
}
