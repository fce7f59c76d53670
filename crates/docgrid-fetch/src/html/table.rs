//! Table row extraction

use crate::html::helpers::{collect_text, descendants_by_tag};
use crate::html::{HtmlDocument, HtmlError};
use markup5ever_rcdom::Handle;
use tracing::debug;

/// Text content of the `<td>` cells of one `<tr>`, in document order
///
/// Texts are kept untrimmed; the grid builder trims them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableRow {
    cells: Vec<String>,
}

impl TableRow {
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    fn from_handle(row: &Handle) -> Self {
        let cells = descendants_by_tag(row, "td")
            .iter()
            .map(collect_text)
            .collect();
        Self { cells }
    }
}

impl AsRef<[String]> for TableRow {
    fn as_ref(&self) -> &[String] {
        &self.cells
    }
}

/// Extracts the rows of the first table in the document
///
/// Every descendant `<tr>` of the first `<table>` is returned, header rows
/// included. Cell counts are not validated.
///
/// # Errors
///
/// Returns [`HtmlError::NoTable`] if the document has no `<table>`
pub fn extract_rows(document: &HtmlDocument) -> Result<Vec<TableRow>, HtmlError> {
    let table = document.select_first("table").ok_or(HtmlError::NoTable)?;

    let rows: Vec<TableRow> = descendants_by_tag(&table, "tr")
        .iter()
        .map(TableRow::from_handle)
        .collect();

    debug!(rows = rows.len(), "extracted table rows");
    Ok(rows)
}
