//! Test utilities and fixtures for lastfm-client tests.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::mock_client;
//! use crate::transport::mocks::MockTransport;
//!
//! #[tokio::test]
//! async fn test_something() {
//!     let (client, mock) = mock_client(MockTransport::new().json(200, "{}"));
//!     // ... call the client, then inspect mock.requests()
//! }
//! ```

use std::sync::Arc;

use crate::client::Client;
use crate::transport::HttpRequest;
use crate::transport::mocks::MockTransport;

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_SECRET: &str = "test-api-secret";

/// Creates a client backed by `mock`.
///
/// Returns the mock as well so tests can inspect the requests it received.
pub fn mock_client(mock: MockTransport) -> (Client, Arc<MockTransport>) {
    let mock = Arc::new(mock);
    let client = Client::with_transport(TEST_API_KEY, TEST_SECRET, mock.clone());
    (client, mock)
}

/// Returns the single request the mock received, panicking otherwise.
pub fn only_request(mock: &MockTransport) -> HttpRequest {
    let requests = mock.requests();
    assert_eq!(requests.len(), 1, "expected exactly one request: {requests:?}");
    requests.into_iter().next().expect("one request")
}

/// The `<lfm>` envelope around an XML payload.
pub fn lfm_ok(inner: &str) -> String {
    format!(r#"<?xml version="1.0" encoding="utf-8"?><lfm status="ok">{inner}</lfm>"#)
}
