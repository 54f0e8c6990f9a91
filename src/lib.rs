//! Last.fm web service client.
//!
//! The core is a request dispatcher: every API method is a method name, a
//! parameter map and an HTTP verb. Reads go out as GET and come back as JSON;
//! writes go out as signed POST (an MD5 `api_sig` over the sorted
//! parameters and the shared secret) and come back as XML. Both formats end
//! up in the same typed responses.
//!
//! # Example
//!
//! ```no_run
//! use lastfm_client::{Client, Scrobble};
//!
//! # async fn run() -> lastfm_client::Result<()> {
//! let client = Client::new("api-key", "api-secret")?;
//! client.login("rj", "password").await?;
//!
//! let scrobbles = client
//!     .track("rj", false)
//!     .scrobble(&[Scrobble::new("Soundgarden", "Outshined", 1_287_140_447)])
//!     .await?;
//! println!("{} accepted", scrobbles.attr.accepted);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod request;
pub mod signature;
pub mod transport;

#[cfg(test)]
pub mod test_utils;

pub use api::{Period, Scrobble, TaggingType};
pub use auth::Session;
pub use client::{API_BASE_URL, Client, DEFAULT_LIMIT};
pub use decode::Decode;
pub use error::{DecodeError, Error, RemoteError, Result, ValidationError};
pub use request::{Params, Request, Verb, bool_signal};
pub use signature::sign;
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
