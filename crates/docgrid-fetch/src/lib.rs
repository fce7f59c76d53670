//! Document retrieval and table extraction for docgrid.
//!
//! - [`http`]: blocking HTTP client, URL validation and document download
//! - [`html`]: permissive HTML parsing and table row extraction
//!
//! # Flow
//!
//! ```text
//! parse_document_url(input)
//!     ↓
//! fetch_document(client, url)    → markup text
//!     ↓
//! parse_html(text)               → HtmlDocument
//!     ↓
//! extract_rows(document)         → Vec<TableRow>
//! ```
//!
//! # Example
//!
//! ```no_run
//! use docgrid_fetch::{build_default_client, extract_rows, fetch_document, parse_document_url, parse_html};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let url = parse_document_url("https://example.com/grid.html")?;
//! let client = build_default_client()?;
//! let html = fetch_document(&client, &url)?;
//! let rows = extract_rows(&parse_html(&html)?)?;
//! println!("{} rows", rows.len());
//! # Ok(())
//! # }
//! ```

pub mod html;
pub mod http;

// Re-export commonly used types
pub use html::{HtmlDocument, HtmlError, TableRow, extract_rows, parse_html};
pub use http::{
    FetchError, USER_AGENT, UrlError, build_client, build_default_client, fetch_document,
    parse_document_url,
};
