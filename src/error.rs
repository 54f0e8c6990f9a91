//! Error types for the Last.fm client.
//!
//! Every call through the dispatcher ends in one of three network-facing
//! failures, plus a local validation failure raised before anything is sent:
//!
//! - [`Error::Network`]: the transport could not complete the exchange
//! - [`Error::Remote`]: the service answered with a structured error
//! - [`Error::Decode`]: the body could not be decoded
//! - [`Error::Validation`]: a precondition failed locally
//!
//! # Example
//!
//! ```ignore
//! use lastfm_client::{Client, Error};
//!
//! match client.track("rj", true).love("Soundgarden", "Outshined").await {
//!     Ok(()) => {}
//!     Err(Error::Remote(e)) if e.code() == 9 => relogin().await?,
//!     Err(e) => return Err(e.into()),
//! }
//! ```

/// Library-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error used to carry transport failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level client error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// DNS, connect, TLS or timeout failure
    #[error("Network error: {0}")]
    Network(#[source] BoxError),

    /// Non-200 response carrying a Last.fm error payload
    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// Response body did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(#[from] DecodeError),

    /// Rejected locally, nothing was sent
    #[error("Invalid request: {0}")]
    Validation(#[from] ValidationError),
}

impl Error {
    /// Wrap a transport failure.
    pub fn network(source: impl Into<BoxError>) -> Self {
        Self::Network(source.into())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::network(e)
    }
}

/// Error reported by the Last.fm service.
///
/// The variant only decides which entity is named next to the message;
/// all three mean the service rejected the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    /// Invalid service, method, parameters or signature (2, 3, 5, 6, 7, 13)
    #[error("{method}: {message}")]
    Method {
        code: u32,
        method: String,
        message: String,
    },

    /// Invalid or suspended API key (10, 26)
    #[error("{api_key}: {message}")]
    ApiKey {
        code: u32,
        api_key: String,
        message: String,
    },

    #[error("error code {code}: {message}")]
    Other { code: u32, message: String },
}

impl RemoteError {
    /// Classify a remote error code for the call that produced it.
    pub fn classify(code: u32, message: impl Into<String>, method: &str, api_key: &str) -> Self {
        let message = message.into();
        match code {
            2 | 3 | 5 | 6 | 7 | 13 => Self::Method {
                code,
                method: method.to_string(),
                message,
            },
            10 | 26 => Self::ApiKey {
                code,
                api_key: api_key.to_string(),
                message,
            },
            _ => Self::Other { code, message },
        }
    }

    /// Numeric Last.fm error code.
    pub fn code(&self) -> u32 {
        match self {
            Self::Method { code, .. } | Self::ApiKey { code, .. } | Self::Other { code, .. } => {
                *code
            }
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Method { message, .. }
            | Self::ApiKey { message, .. }
            | Self::Other { message, .. } => message,
        }
    }
}

/// Failures while turning a response body into a typed value.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid XML: {0}")]
    Xml(#[from] roxmltree::Error),

    /// XML parsed but the `<lfm>` envelope or a required element is missing
    #[error("malformed envelope: {0}")]
    Envelope(String),

    /// The call needs a payload but the response carried none
    #[error("{method} returned an empty response")]
    EmptyPayload { method: String },
}

/// Preconditions checked before a request is dispatched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("too many tags for {target}: {count} given, at most {max} allowed")]
    TooManyTags {
        target: String,
        count: usize,
        max: usize,
    },

    #[error("scrobble {index}: artist, track and timestamp are mandatory")]
    IncompleteScrobble { index: usize },

    #[error("artist and track are mandatory to update now playing")]
    IncompleteNowPlaying,

    #[error("scrobble batch of {count} exceeds the limit of {max}")]
    BatchTooLarge { count: usize, max: usize },

    #[error("scrobble batch is empty")]
    EmptyBatch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_class_names_method() {
        for code in [2, 3, 5, 6, 7, 13] {
            let err = RemoteError::classify(code, "Invalid parameters", "album.getinfo", "KEY");
            let msg = err.to_string();
            assert!(msg.contains("album.getinfo"), "code {code}: {msg}");
            assert!(msg.contains("Invalid parameters"));
            assert!(!msg.contains("KEY"));
        }
    }

    #[test]
    fn test_api_key_class_names_key() {
        for code in [10, 26] {
            let err = RemoteError::classify(code, "Invalid API key", "album.getinfo", "abc123");
            let msg = err.to_string();
            assert!(msg.contains("abc123"), "code {code}: {msg}");
            assert!(msg.contains("Invalid API key"));
        }
    }

    #[test]
    fn test_other_codes_name_code() {
        let err = RemoteError::classify(29, "Rate limit exceeded", "user.getinfo", "KEY");
        assert_eq!(err.to_string(), "error code 29: Rate limit exceeded");
        assert_eq!(err.code(), 29);
        assert_eq!(err.message(), "Rate limit exceeded");
    }

    #[test]
    fn test_remote_error_is_transparent() {
        let err: Error = RemoteError::classify(6, "Track not found", "track.getinfo", "k").into();
        assert_eq!(err.to_string(), "track.getinfo: Track not found");
    }

    #[test]
    fn test_validation_display() {
        let err = ValidationError::TooManyTags {
            target: "Soundgarden".to_string(),
            count: 11,
            max: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("Soundgarden"));
        assert!(msg.contains("11"));
    }

    #[test]
    fn test_network_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
        let err = Error::network(io);
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("timed out"));
    }
}
