//! HTTP transport behind the dispatcher.
//!
//! The dispatcher builds a fully assembled [`HttpRequest`] and hands it to a
//! [`Transport`]. Production code uses [`ReqwestTransport`]; tests substitute
//! [`mocks::MockTransport`] to script responses and inspect what was sent.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::request::Verb;

/// Fixed per-request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// A request ready to go on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub verb: Verb,
    pub url: String,
    /// Query parameters for GET, form body for POST
    pub params: Vec<(String, String)>,
    pub user_agent: Option<String>,
}

impl HttpRequest {
    /// First value for `key`, if present.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// What came back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Raw `Content-Type` header, if the server sent one
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

/// Sends assembled requests.
///
/// Implement this trait to swap the HTTP stack or to mock the service.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform the exchange. Any failure to obtain a complete response
    /// (DNS, connect, TLS, timeout, truncated body) is an [`Error::Network`].
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// [`Transport`] over a shared `reqwest::Client`.
pub struct ReqwestTransport {
    http_client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build the shared client with the fixed timeout.
    ///
    /// The client accepts gzip-compressed responses.
    pub fn new() -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(Error::network)?;

        Ok(Self { http_client })
    }

    /// Wrap an existing client (its own timeout settings apply).
    pub fn from_client(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let builder = match request.verb {
            Verb::Get => self.http_client.get(&request.url).query(&request.params),
            // .form() sets application/x-www-form-urlencoded
            Verb::Post => self.http_client.post(&request.url).form(&request.params),
        };

        let builder = match &request.user_agent {
            Some(agent) => builder.header(reqwest::header::USER_AGENT, agent),
            None => builder,
        };

        let response = builder.send().await?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(ToOwned::to_owned);
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse {
            status,
            content_type,
            body,
        })
    }
}
