//! HTTP retrieval of HTML documents
//!
//! - HTTP client construction with a docgrid user agent
//! - Blocking document download with status checking
//! - URL validation

pub mod client;
pub mod download;
pub mod url;

// Re-exports for convenient access
pub use client::{USER_AGENT, build_client, build_default_client};
pub use download::{FetchError, fetch_document};
pub use self::url::{UrlError, parse_document_url};
