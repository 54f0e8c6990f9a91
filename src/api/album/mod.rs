//! `album.*` methods.
//!
//! API docs: https://www.last.fm/api/show/album.getInfo

pub mod dto;

use crate::api::common::Tags;
use crate::api::{DEFAULT_LANG, paged, tag_list};
use crate::client::Client;
use crate::error::Result;
use crate::request::{Params, Request};

use dto::{
    AlbumInfo, AlbumInfoResponse, AlbumSearchResponse, AlbumTagsResponse, AlbumTopTagsResponse,
};

/// Album methods for one user.
pub struct Album<'a> {
    client: &'a Client,
    /// User whose tags and playcounts are returned
    pub username: String,
    autocorrect: bool,
}

impl<'a> Album<'a> {
    pub fn new(client: &'a Client, username: impl Into<String>, autocorrect: bool) -> Self {
        Self {
            client,
            username: username.into(),
            autocorrect,
        }
    }

    fn autocorrect(&self) -> &'static str {
        self.client.bool_signal(self.autocorrect)
    }

    /// Tag an album (at most 10 tags). Requires a session.
    pub async fn add_tags<S: AsRef<str>>(&self, artist: &str, album: &str, tags: &[S]) -> Result<()> {
        let tags = tag_list(&format!("{artist} - {album}"), tags)?;
        let params = Params::new()
            .with("album", album)
            .with("artist", artist)
            .with("tags", tags);
        self.client
            .execute(Request::post("album.addtags", params))
            .await
    }

    /// Album metadata by artist and album name, or by MusicBrainz ID.
    ///
    /// `lang` is an ISO 639 alpha-2 code for the wiki text (default `en`).
    pub async fn get_info(
        &self,
        artist: &str,
        album: &str,
        mbid: &str,
        lang: Option<&str>,
    ) -> Result<AlbumInfo> {
        let params = Params::new()
            .with("album", album)
            .with("artist", artist)
            .with("autocorrect", self.autocorrect())
            .with("lang", lang.unwrap_or(DEFAULT_LANG))
            .with("mbid", mbid)
            .with("username", self.username.as_str());
        let response: AlbumInfoResponse = self
            .client
            .fetch(Request::get("album.getinfo", params))
            .await?;
        Ok(response.album)
    }

    /// Tags this user applied to the album.
    pub async fn get_tags(&self, artist: &str, album: &str, mbid: &str) -> Result<Tags> {
        let params = Params::new()
            .with("album", album)
            .with("artist", artist)
            .with("autocorrect", self.autocorrect())
            .with("mbid", mbid)
            .with("user", self.username.as_str());
        let response: AlbumTagsResponse = self
            .client
            .fetch(Request::get("album.gettags", params))
            .await?;
        Ok(response.tags)
    }

    /// Most applied tags, ordered by count.
    pub async fn get_top_tags(&self, artist: &str, album: &str, mbid: &str) -> Result<Tags> {
        let params = Params::new()
            .with("album", album)
            .with("artist", artist)
            .with("autocorrect", self.autocorrect())
            .with("mbid", mbid);
        let response: AlbumTopTagsResponse = self
            .client
            .fetch(Request::get("album.gettoptags", params))
            .await?;
        Ok(response.toptags)
    }

    /// Remove one of this user's tags from the album. Requires a session.
    pub async fn remove_tag(&self, artist: &str, album: &str, tag: &str) -> Result<()> {
        let params = Params::new()
            .with("album", album)
            .with("artist", artist)
            .with("tag", tag);
        self.client
            .execute(Request::post("album.removetag", params))
            .await
    }

    /// Search albums by name.
    pub async fn search(&self, artist: &str, album: &str, page: u32) -> Result<AlbumSearchResponse> {
        let params = paged(self.client, page)
            .with("album", album)
            .with("artist", artist);
        self.client.fetch(Request::get("album.search", params)).await
    }
}
