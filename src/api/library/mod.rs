//! `library.*` methods.

use serde::{Deserialize, Serialize};

use crate::api::common::{Image, PageAttr};
use crate::api::paged;
use crate::client::Client;
use crate::decode::de;
use crate::error::Result;
use crate::request::Request;

/// A user's library.
pub struct Library<'a> {
    client: &'a Client,
    pub username: String,
}

/// `library.getArtists`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LibraryArtistsResponse {
    #[serde(deserialize_with = "de::empty_as_default")]
    pub artists: LibraryArtists,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LibraryArtists {
    #[serde(deserialize_with = "de::one_or_many")]
    pub artist: Vec<LibraryArtist>,
    #[serde(rename = "@attr", deserialize_with = "de::empty_as_default")]
    pub attr: PageAttr,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LibraryArtist {
    pub name: String,
    pub mbid: String,
    pub url: String,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub playcount: u64,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub tagcount: u64,
    pub streamable: String,
    #[serde(deserialize_with = "de::one_or_many")]
    pub image: Vec<Image>,
}

impl<'a> Library<'a> {
    pub fn new(client: &'a Client, username: impl Into<String>) -> Self {
        Self {
            client,
            username: username.into(),
        }
    }

    /// Every artist in the library with play and tag counts.
    pub async fn get_artists(&self, page: u32) -> Result<LibraryArtists> {
        let params = paged(self.client, page).with("user", self.username.as_str());
        let response: LibraryArtistsResponse = self
            .client
            .fetch(Request::get("library.getartists", params))
            .await?;
        Ok(response.artists)
    }
}
