//! HTTP client construction for document retrieval

use reqwest::blocking::Client;
use std::time::Duration;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("docgrid/", env!("CARGO_PKG_VERSION"));

/// Builds HTTP client for document retrieval
///
/// # Arguments
///
/// * `timeout` - Total request timeout, or `None` to wait indefinitely
///
/// # Errors
///
/// Returns error if client construction fails
pub fn build_client(timeout: Option<Duration>) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
}

/// Builds HTTP client without a request timeout
pub fn build_default_client() -> Result<Client, reqwest::Error> {
    build_client(None)
}
