//! Document URL validation

use thiserror::Error;
use url::Url;

/// Parses a user-supplied document URL
///
/// Surrounding whitespace is ignored. Only `http` and `https` are accepted.
///
/// # Errors
///
/// Returns error if the input is not an absolute URL or uses another scheme
pub fn parse_document_url(input: &str) -> Result<Url, UrlError> {
    let url = Url::parse(input.trim())?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(UrlError::UnsupportedScheme {
            scheme: other.to_string(),
        }),
    }
}

/// URL validation errors
#[derive(Debug, Error)]
pub enum UrlError {
    /// Input does not parse as an absolute URL
    #[error("Invalid URL: {0}")]
    ParseError(#[from] url::ParseError),

    /// Scheme other than http/https
    #[error("Unsupported URL scheme '{scheme}': expected http or https")]
    UnsupportedScheme {
        /// The rejected scheme
        scheme: String,
    },
}
