//! Authentication and session handling.
//!
//! Mobile-style login exchanges a username and password for a session key
//! (`auth.getMobileSession`). The key is kept on the [`Client`] and attached
//! to every POST call until [`Client::logout`].
//!
//! See: https://www.last.fm/api/mobileauth

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::decode::de;
use crate::error::Result;
use crate::request::{Params, Request};

/// Web authentication page
pub const AUTH_URL: &str = "https://www.last.fm/api/auth/";

/// `auth.getMobileSession` response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionResponse {
    pub session: Session,
}

/// An authenticated user session
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Session {
    /// Username the session belongs to
    #[serde(default)]
    pub name: String,
    /// Session key to send as `sk`
    #[serde(default)]
    pub key: String,
    #[serde(default, deserialize_with = "de::lenient_bool")]
    pub subscriber: bool,
}

impl Client {
    /// Log in and store the returned session key on the client.
    ///
    /// Any previous session is dropped first, so on failure the client is
    /// left unauthenticated.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session> {
        self.replace_session_key(String::new());

        let params = Params::new()
            .with("username", username)
            .with("password", password);
        let response: SessionResponse = self
            .fetch(Request::post("auth.getmobilesession", params))
            .await?;

        self.replace_session_key(response.session.key.clone());
        tracing::info!(user = %response.session.name, "Logged in to Last.fm");
        Ok(response.session)
    }

    /// Forget the session key. The session is not revoked on the service.
    pub fn logout(&self) {
        self.replace_session_key(String::new());
    }

    /// Current session key, empty when logged out.
    pub fn session_key(&self) -> String {
        self.current_session_key()
    }

    /// Restore a session key obtained earlier (e.g. loaded from config).
    pub fn set_session_key(&self, key: impl Into<String>) {
        self.replace_session_key(key.into());
    }

    pub fn is_authenticated(&self) -> bool {
        !self.current_session_key().is_empty()
    }

    /// URL of the web authentication page for this API key, with an
    /// optional callback the user is sent back to.
    pub fn auth_url(&self, callback: Option<&str>) -> String {
        let mut url = format!("{AUTH_URL}?api_key={}", urlencoding::encode(self.api_key()));
        if let Some(cb) = callback {
            url.push_str("&cb=");
            url.push_str(&urlencoding::encode(cb));
        }
        url
    }
}
