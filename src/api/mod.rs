//! Typed wrappers for the Last.fm API methods, one module per resource.
//!
//! Each resource borrows the [`Client`] together with its per-resource
//! settings (username, autocorrect, country) and only builds parameter maps;
//! signing, transport and decoding happen in [`Client::dispatch`].
//!
//! # Usage
//!
//! ```ignore
//! let client = Client::new(api_key, api_secret)?;
//! let info = client.album("rj", true).get_info("Soundgarden", "Badmotorfinger", "", None).await?;
//! println!("{} listeners", info.listeners);
//! ```
//!
//! API docs: https://www.last.fm/api

pub mod album;
pub mod artist;
pub mod chart;
pub mod common;
pub mod geo;
pub mod library;
pub mod tag;
pub mod track;
pub mod user;

use crate::client::Client;
use crate::error::{Result, ValidationError};
use crate::request::Params;

pub use album::Album;
pub use artist::Artist;
pub use chart::Chart;
pub use common::{Image, Period, Tag};
pub use geo::Geo;
pub use library::Library;
pub use tag::TagApi;
pub use track::{Scrobble, Track};
pub use user::{TaggingType, User};

/// Most tags `*.addTags` accepts per call
pub const MAX_TAGS: usize = 10;

/// Language used for biographies and wikis when none is given
pub const DEFAULT_LANG: &str = "en";

impl Client {
    pub fn album(&self, username: impl Into<String>, autocorrect: bool) -> Album<'_> {
        Album::new(self, username, autocorrect)
    }

    pub fn artist(&self, username: impl Into<String>, autocorrect: bool) -> Artist<'_> {
        Artist::new(self, username, autocorrect)
    }

    pub fn chart(&self) -> Chart<'_> {
        Chart::new(self)
    }

    pub fn geo(&self, country: impl Into<String>) -> Geo<'_> {
        Geo::new(self, country)
    }

    pub fn library(&self, username: impl Into<String>) -> Library<'_> {
        Library::new(self, username)
    }

    pub fn tag(&self) -> TagApi<'_> {
        TagApi::new(self)
    }

    pub fn track(&self, username: impl Into<String>, autocorrect: bool) -> Track<'_> {
        Track::new(self, username, autocorrect)
    }

    pub fn user(&self, username: impl Into<String>) -> User<'_> {
        User::new(self, username)
    }
}

/// `limit` and `page` for a paged call.
pub(crate) fn paged(client: &Client, page: u32) -> Params {
    Params::new()
        .with("limit", client.limit())
        .with("page", page.to_string())
}

/// Comma-joined tag list, rejecting more than [`MAX_TAGS`].
pub(crate) fn tag_list<S: AsRef<str>>(target: &str, tags: &[S]) -> Result<String> {
    if tags.len() > MAX_TAGS {
        return Err(ValidationError::TooManyTags {
            target: target.to_string(),
            count: tags.len(),
            max: MAX_TAGS,
        }
        .into());
    }
    Ok(tags
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(","))
}
