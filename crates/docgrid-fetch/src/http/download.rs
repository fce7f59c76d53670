//! Blocking document download

use crate::http::url::UrlError;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Downloads the document at `url` and returns its body as text
///
/// The body is decoded using the charset from the response headers,
/// falling back to UTF-8.
///
/// # Errors
///
/// Returns error if:
/// - The request fails at the transport level (DNS, connection, timeout)
/// - Response status is not success
/// - The body cannot be read
pub fn fetch_document(client: &Client, url: &Url) -> Result<String, FetchError> {
    debug!(%url, "fetching document");

    let response = client
        .get(url.as_str())
        .send()
        .map_err(FetchError::Network)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status { status });
    }

    let body = response.text().map_err(FetchError::Network)?;

    debug!(%status, bytes = body.len(), "document fetched");
    Ok(body)
}

/// Reason phrase for `status`, or its numeric code when it has none
fn status_text(status: &StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_u16().to_string())
}

/// Document retrieval errors
#[derive(Debug, Error)]
pub enum FetchError {
    /// Server answered with a non-success status
    #[error("Failed to fetch document: {}", status_text(.status))]
    Status {
        /// Response status
        status: StatusCode,
    },

    /// Transport failure or unreadable body
    #[error("Failed to fetch document: {0}")]
    Network(#[source] reqwest::Error),

    /// Document URL rejected before any request was made
    #[error(transparent)]
    Url(#[from] UrlError),
}
