//! Last.fm API client and request dispatcher.
//!
//! Handles communication with the Last.fm web service.
//! See: https://www.last.fm/api/intro
//!
//! Every remote method goes through [`Client::dispatch`]:
//!
//! 1. `method` and `api_key` first, then the call's parameters
//! 2. GET asks for JSON; POST adds the session key and the `api_sig`
//! 3. the request goes out through the [`Transport`] (10 s timeout)
//! 4. non-200 bodies become a classified [`RemoteError`], 200 bodies are
//!    decoded into the requested type

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::Deserialize;

use crate::decode::{self, Decode};
use crate::error::{DecodeError, Error, RemoteError, Result};
use crate::request::{Request, Verb, bool_signal};
use crate::signature::sign;
use crate::transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};

/// Last.fm 2.0 API endpoint
pub const API_BASE_URL: &str = "https://ws.audioscrobbler.com/2.0/";

/// Page size used when none (or a non-positive one) is set
pub const DEFAULT_LIMIT: i64 = 50;

/// Parameter names the dispatcher owns.
const RESERVED_PARAMS: [&str; 2] = ["method", "api_key"];

/// Mutable per-client settings.
#[derive(Debug, Clone)]
struct ClientState {
    session_key: String,
    limit: i64,
    user_agent: Option<String>,
}

impl Default for ClientState {
    fn default() -> Self {
        Self {
            session_key: String::new(),
            limit: DEFAULT_LIMIT,
            user_agent: None,
        }
    }
}

/// Last.fm API client.
///
/// Credentials are fixed at construction. Session key, page limit and user
/// agent can change at any time; the client is `Send + Sync` and can be
/// shared behind an `Arc`.
pub struct Client {
    api_key: String,
    api_secret: String,
    base_url: String,
    transport: Arc<dyn Transport>,
    state: RwLock<ClientState>,
}

impl Client {
    /// Create a client talking to Last.fm over HTTPS.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Result<Self> {
        let transport = ReqwestTransport::new()?;
        Ok(Self::with_transport(api_key, api_secret, Arc::new(transport)))
    }

    /// Create a client over a custom transport.
    pub fn with_transport(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            base_url: API_BASE_URL.to_string(),
            transport,
            state: RwLock::new(ClientState::default()),
        }
    }

    /// Point the client at another endpoint (proxies, test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Set the `User-Agent` sent with every request. An empty string unsets it.
    pub fn set_user_agent(&self, user_agent: impl Into<String>) {
        let user_agent = user_agent.into();
        self.state.write().user_agent = (!user_agent.is_empty()).then_some(user_agent);
    }

    pub fn user_agent(&self) -> Option<String> {
        self.state.read().user_agent.clone()
    }

    /// Set the page size for paged calls. Values `<= 0` reset it to 50.
    pub fn set_limit(&self, limit: i64) {
        self.state.write().limit = if limit <= 0 { DEFAULT_LIMIT } else { limit };
    }

    /// Current page size, formatted for the `limit` parameter.
    pub fn limit(&self) -> String {
        self.state.read().limit.to_string()
    }

    /// String form of a flag parameter, see [`bool_signal`].
    pub fn bool_signal(&self, flag: bool) -> &'static str {
        bool_signal(flag)
    }

    pub(crate) fn replace_session_key(&self, key: String) {
        self.state.write().session_key = key;
    }

    pub(crate) fn current_session_key(&self) -> String {
        self.state.read().session_key.clone()
    }

    /// Assemble the wire request for a call without sending it.
    pub fn prepare(&self, request: &Request) -> HttpRequest {
        let state = self.state.read().clone();

        let mut params: Vec<(String, String)> = vec![
            ("method".to_string(), request.method.clone()),
            ("api_key".to_string(), self.api_key.clone()),
        ];
        for (key, value) in request.params.iter() {
            if RESERVED_PARAMS.contains(&key) {
                tracing::warn!(method = %request.method, key, "Ignoring reserved parameter");
                continue;
            }
            params.push((key.to_string(), value.to_string()));
        }

        match request.verb {
            Verb::Get => params.push(("format".to_string(), "json".to_string())),
            Verb::Post => {
                if !state.session_key.is_empty() {
                    params.push(("sk".to_string(), state.session_key));
                }
                let signature = sign(
                    params.iter().map(|(k, v)| (k.as_str(), v.as_str())),
                    &self.api_secret,
                );
                params.push(("api_sig".to_string(), signature));
            }
        }

        HttpRequest {
            verb: request.verb,
            url: self.base_url.clone(),
            params,
            user_agent: state.user_agent,
        }
    }

    /// Send a call and decode its payload.
    ///
    /// `Ok(None)` means the service answered with an empty envelope.
    pub async fn dispatch<T: Decode>(&self, request: Request) -> Result<Option<T>> {
        let response = self.send(&request).await?;
        decode::decode_body(response.content_type.as_deref(), &response.body).map_err(|e| {
            tracing::debug!(method = %request.method, error = %e, "Failed to decode response");
            Error::Decode(e)
        })
    }

    /// Send a call and discard the payload.
    pub async fn execute(&self, request: Request) -> Result<()> {
        self.send(&request).await.map(|_| ())
    }

    /// Like [`dispatch`](Self::dispatch), for calls that always carry a payload.
    pub(crate) async fn fetch<T: Decode>(&self, request: Request) -> Result<T> {
        let method = request.method.clone();
        self.dispatch(request)
            .await?
            .ok_or_else(|| Error::Decode(DecodeError::EmptyPayload { method }))
    }

    async fn send(&self, request: &Request) -> Result<HttpResponse> {
        let http_request = self.prepare(request);
        tracing::debug!(method = %request.method, verb = %request.verb, "Sending request");

        let response = self.transport.send(http_request).await?;

        if response.status != 200 {
            return Err(self.remote_error(request, &response));
        }
        Ok(response)
    }

    /// Turn a non-200 response into an error.
    fn remote_error(&self, request: &Request, response: &HttpResponse) -> Error {
        let body = match decode::decode_body::<ErrorBody>(
            response.content_type.as_deref(),
            &response.body,
        ) {
            Ok(Some(body)) => body,
            Ok(None) => ErrorBody {
                code: 0,
                message: format!("HTTP {}", response.status),
            },
            Err(e) => return Error::Decode(e),
        };

        let err = RemoteError::classify(body.code, body.message, &request.method, &self.api_key);
        tracing::warn!(
            method = %request.method,
            status = response.status,
            code = err.code(),
            "Last.fm returned an error: {}",
            err.message()
        );
        Error::Remote(err)
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("Client")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("authenticated", &!state.session_key.is_empty())
            .field("limit", &state.limit)
            .field("user_agent", &state.user_agent)
            .finish()
    }
}

/// Error payload: `{"error": 6, "message": "..."}` in JSON,
/// `<error code="6">...</error>` in XML.
#[derive(Debug, PartialEq, Eq)]
struct ErrorBody {
    code: u32,
    message: String,
}

#[derive(Deserialize)]
struct JsonErrorBody {
    #[serde(deserialize_with = "decode::de::lenient_u64")]
    error: u64,
    #[serde(default)]
    message: String,
}

impl Decode for ErrorBody {
    fn from_json(body: &[u8]) -> std::result::Result<Self, DecodeError> {
        let raw: JsonErrorBody = serde_json::from_slice(body)?;
        Ok(Self {
            code: u32::try_from(raw.error).unwrap_or(u32::MAX),
            message: raw.message,
        })
    }

    fn from_xml(envelope: roxmltree::Node<'_, '_>) -> std::result::Result<Self, DecodeError> {
        let node = envelope
            .children()
            .find(|n| n.has_tag_name("error"))
            .ok_or_else(|| DecodeError::Envelope("missing <error> element".to_string()))?;
        let code = node
            .attribute("code")
            .ok_or_else(|| DecodeError::Envelope("missing error code".to_string()))?
            .trim()
            .parse()
            .map_err(|_| DecodeError::Envelope("non-numeric error code".to_string()))?;
        Ok(Self {
            code,
            message: node.text().unwrap_or_default().trim().to_string(),
        })
    }
}
