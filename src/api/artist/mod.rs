//! `artist.*` methods.

pub mod dto;

use crate::api::common::Tags;
use crate::api::{DEFAULT_LANG, paged, tag_list};
use crate::client::Client;
use crate::error::Result;
use crate::request::{Params, Request};

use dto::{
    ArtistCorrection, ArtistCorrectionResponse, ArtistInfo, ArtistInfoResponse,
    ArtistSearchResponse, ArtistSimilarResponse, ArtistTagsResponse, ArtistTopAlbums,
    ArtistTopAlbumsResponse, ArtistTopTagsResponse, ArtistTopTracks, ArtistTopTracksResponse,
    SimilarArtists,
};

/// Artist methods for one user.
pub struct Artist<'a> {
    client: &'a Client,
    pub username: String,
    autocorrect: bool,
}

impl<'a> Artist<'a> {
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

    /// Name-or-MBID lookup parameters shared by most getters.
    fn lookup(&self, artist: &str, mbid: &str) -> Params {
        Params::new()
            .with("artist", artist)
            .with("autocorrect", self.autocorrect())
            .with("mbid", mbid)
    }

    /// Tag an artist (at most 10 tags). Requires a session.
    pub async fn add_tags<S: AsRef<str>>(&self, artist: &str, tags: &[S]) -> Result<()> {
        let tags = tag_list(artist, tags)?;
        let params = Params::new().with("artist", artist).with("tags", tags);
        self.client
            .execute(Request::post("artist.addtags", params))
            .await
    }

    /// Canonical spelling of a possibly misspelled artist name.
    pub async fn get_correction(&self, artist: &str) -> Result<ArtistCorrection> {
        let params = Params::new().with("artist", artist);
        let response: ArtistCorrectionResponse = self
            .client
            .fetch(Request::get("artist.getcorrection", params))
            .await?;
        Ok(response.corrections.correction)
    }

    /// Artist metadata including biography in `lang` (default `en`).
    pub async fn get_info(&self, artist: &str, mbid: &str, lang: Option<&str>) -> Result<ArtistInfo> {
        let params = self
            .lookup(artist, mbid)
            .with("lang", lang.unwrap_or(DEFAULT_LANG))
            .with("username", self.username.as_str());
        let response: ArtistInfoResponse = self
            .client
            .fetch(Request::get("artist.getinfo", params))
            .await?;
        Ok(response.artist)
    }

    pub async fn get_similar(&self, artist: &str, mbid: &str) -> Result<SimilarArtists> {
        let params = self.lookup(artist, mbid).with("limit", self.client.limit());
        let response: ArtistSimilarResponse = self
            .client
            .fetch(Request::get("artist.getsimilar", params))
            .await?;
        Ok(response.similar_artists)
    }

    /// Tags this user applied to the artist.
    pub async fn get_tags(&self, artist: &str, mbid: &str) -> Result<Tags> {
        let params = self
            .lookup(artist, mbid)
            .with("user", self.username.as_str());
        let response: ArtistTagsResponse = self
            .client
            .fetch(Request::get("artist.gettags", params))
            .await?;
        Ok(response.tags)
    }

    pub async fn get_top_albums(&self, artist: &str, mbid: &str, page: u32) -> Result<ArtistTopAlbums> {
        let params = paged(self.client, page)
            .with("artist", artist)
            .with("autocorrect", self.autocorrect())
            .with("mbid", mbid);
        let response: ArtistTopAlbumsResponse = self
            .client
            .fetch(Request::get("artist.gettopalbums", params))
            .await?;
        Ok(response.top_albums)
    }

    /// Most applied tags, ordered by count.
    pub async fn get_top_tags(&self, artist: &str, mbid: &str) -> Result<Tags> {
        let response: ArtistTopTagsResponse = self
            .client
            .fetch(Request::get("artist.gettoptags", self.lookup(artist, mbid)))
            .await?;
        Ok(response.toptags)
    }

    pub async fn get_top_tracks(&self, artist: &str, mbid: &str, page: u32) -> Result<ArtistTopTracks> {
        let params = paged(self.client, page)
            .with("artist", artist)
            .with("autocorrect", self.autocorrect())
            .with("mbid", mbid);
        let response: ArtistTopTracksResponse = self
            .client
            .fetch(Request::get("artist.gettoptracks", params))
            .await?;
        Ok(response.top_tracks)
    }

    /// Remove one of this user's tags from the artist. Requires a session.
    pub async fn remove_tag(&self, artist: &str, tag: &str) -> Result<()> {
        let params = Params::new().with("artist", artist).with("tag", tag);
        self.client
            .execute(Request::post("artist.removetag", params))
            .await
    }

    pub async fn search(&self, artist: &str, page: u32) -> Result<ArtistSearchResponse> {
        let params = paged(self.client, page).with("artist", artist);
        self.client.fetch(Request::get("artist.search", params)).await
    }
}
