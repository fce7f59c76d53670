//! Mock server infrastructure for testing
//!
//! This module provides a shared mockito server for parallel test execution.

use lazy_static::lazy_static;
use mockito::{Mock, Server, ServerGuard};
use std::sync::Mutex;

lazy_static! {
    /// Global shared mockito server for all tests
    ///
    /// This server is initialized once and shared across all test threads.
    pub static ref SHARED_MOCK_SERVER: Mutex<ServerGuard> = Mutex::new(Server::new());
}

/// Get reference to shared mock server
///
/// Tests sharing the server must mock distinct paths. Acquire the lock only
/// while creating mocks, not for the whole test.
///
/// # Examples
///
/// ```no_run
/// use docgrid_testkit::get_shared_mock_server;
///
/// let (mock, url) = {
///     let mut server = get_shared_mock_server();
///     let mock = server
///         .mock("GET", "/unique-path/doc")
///         .with_status(200)
///         .create();
///     (mock, format!("{}/unique-path/doc", server.url()))
/// }; // Lock released here
/// ```
pub fn get_shared_mock_server() -> std::sync::MutexGuard<'static, ServerGuard> {
    // A panicking test leaves the server usable; mock paths keep tests apart
    SHARED_MOCK_SERVER
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Mocks a GET of `path` on the shared server
///
/// # Returns
///
/// The mock (removed from the server when dropped) and the full URL to request
pub fn mock_document(path: &str, status: usize, body: &str) -> (Mock, String) {
    let mut server = get_shared_mock_server();
    let mock = server
        .mock("GET", path)
        .with_status(status)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(body)
        .create();
    let url = format!("{}{}", server.url(), path);
    (mock, url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_server_url_is_stable() {
        let first = get_shared_mock_server().url();
        let second = get_shared_mock_server().url();
        assert_eq!(first, second);
    }

    #[test]
    fn test_mock_document_url() {
        let (_mock, url) = mock_document("/testkit/mock-document", 200, "<p>hi</p>");
        assert!(url.starts_with("http://"));
        assert!(url.ends_with("/testkit/mock-document"));
    }
}
