//! `track.*` methods, including scrobbling.
//!
//! Scrobbling docs: https://www.last.fm/api/scrobbling

pub mod dto;

use serde::{Deserialize, Serialize};

use crate::api::common::Tags;
use crate::api::{paged, tag_list};
use crate::client::Client;
use crate::error::{Result, ValidationError};
use crate::request::{Params, Request};

use dto::{
    NowPlaying, NowPlayingResponse, ScrobbleResponse, Scrobbles, SimilarTracks, TrackCorrection,
    TrackCorrectionResponse, TrackInfo, TrackInfoResponse, TrackSearchResponse,
    TrackSimilarResponse, TrackTagsResponse, TrackTopTagsResponse,
};

/// Most scrobbles `track.scrobble` accepts in one call
pub const MAX_SCROBBLES: usize = 50;

/// One play to report.
///
/// `artist`, `track` and `timestamp` are mandatory for scrobbling; only
/// `artist` and `track` are needed for now playing. Unset optional fields are
/// not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Scrobble {
    pub artist: String,
    pub track: String,
    /// Unix time the track started playing
    pub timestamp: i64,
    pub album: String,
    pub album_artist: String,
    /// Whether the user picked the track, as opposed to a radio or shuffle
    pub chosen_by_user: Option<bool>,
    pub context: String,
    /// Seconds
    pub duration: Option<u32>,
    pub mbid: String,
    pub stream_id: String,
    pub track_number: Option<u32>,
}

impl Scrobble {
    pub fn new(artist: impl Into<String>, track: impl Into<String>, timestamp: i64) -> Self {
        Self {
            artist: artist.into(),
            track: track.into(),
            timestamp,
            ..Self::default()
        }
    }

    pub fn album(mut self, album: impl Into<String>) -> Self {
        self.album = album.into();
        self
    }

    pub fn album_artist(mut self, album_artist: impl Into<String>) -> Self {
        self.album_artist = album_artist.into();
        self
    }

    pub fn duration(mut self, seconds: u32) -> Self {
        self.duration = Some(seconds);
        self
    }

    pub fn track_number(mut self, number: u32) -> Self {
        self.track_number = Some(number);
        self
    }

    pub fn mbid(mut self, mbid: impl Into<String>) -> Self {
        self.mbid = mbid.into();
        self
    }

    pub fn chosen_by_user(mut self, chosen: bool) -> Self {
        self.chosen_by_user = Some(chosen);
        self
    }

    fn is_complete(&self) -> bool {
        !self.artist.is_empty() && !self.track.is_empty() && self.timestamp > 0
    }

    /// Write the fields into `params`, each name passed through `key`.
    fn write_params(&self, params: &mut Params, key: impl Fn(&str) -> String, kind: ParamSet) {
        params.insert(key("artist"), self.artist.as_str());
        params.insert(key("track"), self.track.as_str());

        let mut optional = vec![
            ("album", &self.album),
            ("albumArtist", &self.album_artist),
            ("context", &self.context),
            ("mbid", &self.mbid),
        ];
        if kind == ParamSet::Scrobble {
            params.insert(key("timestamp"), self.timestamp.to_string());
            optional.push(("streamId", &self.stream_id));
            if let Some(chosen) = self.chosen_by_user {
                params.insert(key("chosenByUser"), crate::request::bool_signal(chosen));
            }
        }
        for (name, value) in optional {
            if !value.is_empty() {
                params.insert(key(name), value.as_str());
            }
        }
        if let Some(duration) = self.duration {
            params.insert(key("duration"), duration.to_string());
        }
        if let Some(number) = self.track_number {
            params.insert(key("trackNumber"), number.to_string());
        }
    }
}

/// Fields accepted by `track.scrobble` versus `track.updateNowPlaying`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParamSet {
    Scrobble,
    NowPlaying,
}

/// Track methods for one user.
pub struct Track<'a> {
    client: &'a Client,
    pub username: String,
    autocorrect: bool,
}

impl<'a> Track<'a> {
    pub fn new(client: &'a Client, username: impl Into<String>, autocorrect: bool) -> Self {
        Self {
            client,
            username: username.into(),
            autocorrect,
        }
    }

    fn lookup(&self, artist: &str, track: &str, mbid: &str) -> Params {
        Params::new()
            .with("artist", artist)
            .with("autocorrect", self.client.bool_signal(self.autocorrect))
            .with("mbid", mbid)
            .with("track", track)
    }

    /// Tag a track (at most 10 tags). Requires a session.
    pub async fn add_tags<S: AsRef<str>>(&self, artist: &str, track: &str, tags: &[S]) -> Result<()> {
        let tags = tag_list(&format!("{artist} - {track}"), tags)?;
        let params = Params::new()
            .with("artist", artist)
            .with("tags", tags)
            .with("track", track);
        self.client
            .execute(Request::post("track.addtags", params))
            .await
    }

    pub async fn get_correction(&self, artist: &str, track: &str) -> Result<TrackCorrection> {
        let params = Params::new().with("artist", artist).with("track", track);
        let response: TrackCorrectionResponse = self
            .client
            .fetch(Request::get("track.getcorrection", params))
            .await?;
        Ok(response.corrections.correction)
    }

    /// Track metadata, with this user's playcount and loved flag.
    pub async fn get_info(&self, artist: &str, track: &str, mbid: &str) -> Result<TrackInfo> {
        let params = self
            .lookup(artist, track, mbid)
            .with("username", self.username.as_str());
        let response: TrackInfoResponse = self
            .client
            .fetch(Request::get("track.getinfo", params))
            .await?;
        Ok(response.track)
    }

    pub async fn get_similar(&self, artist: &str, track: &str, mbid: &str) -> Result<SimilarTracks> {
        let params = self
            .lookup(artist, track, mbid)
            .with("limit", self.client.limit());
        let response: TrackSimilarResponse = self
            .client
            .fetch(Request::get("track.getsimilar", params))
            .await?;
        Ok(response.similar_tracks)
    }

    pub async fn get_tags(&self, artist: &str, track: &str, mbid: &str) -> Result<Tags> {
        let params = self
            .lookup(artist, track, mbid)
            .with("user", self.username.as_str());
        let response: TrackTagsResponse = self
            .client
            .fetch(Request::get("track.gettags", params))
            .await?;
        Ok(response.tags)
    }

    pub async fn get_top_tags(&self, artist: &str, track: &str, mbid: &str) -> Result<Tags> {
        let response: TrackTopTagsResponse = self
            .client
            .fetch(Request::get("track.gettoptags", self.lookup(artist, track, mbid)))
            .await?;
        Ok(response.toptags)
    }

    /// Mark a track as loved. Requires a session.
    pub async fn love(&self, artist: &str, track: &str) -> Result<()> {
        let params = Params::new().with("artist", artist).with("track", track);
        self.client.execute(Request::post("track.love", params)).await
    }

    pub async fn remove_tag(&self, artist: &str, track: &str, tag: &str) -> Result<()> {
        let params = Params::new()
            .with("artist", artist)
            .with("tag", tag)
            .with("track", track);
        self.client
            .execute(Request::post("track.removetag", params))
            .await
    }

    /// Report a batch of plays. Requires a session.
    ///
    /// Entries are sent as `artist[1]`, `track[1]`, ... in batch order. The
    /// whole batch is checked before anything is sent.
    pub async fn scrobble(&self, batch: &[Scrobble]) -> Result<Scrobbles> {
        if batch.is_empty() {
            return Err(ValidationError::EmptyBatch.into());
        }
        if batch.len() > MAX_SCROBBLES {
            return Err(ValidationError::BatchTooLarge {
                count: batch.len(),
                max: MAX_SCROBBLES,
            }
            .into());
        }

        let mut params = Params::new();
        for (i, scrobble) in batch.iter().enumerate() {
            let index = i + 1;
            if !scrobble.is_complete() {
                return Err(ValidationError::IncompleteScrobble { index }.into());
            }
            scrobble.write_params(&mut params, |name| format!("{name}[{index}]"), ParamSet::Scrobble);
        }

        let response: ScrobbleResponse = self
            .client
            .fetch(Request::post("track.scrobble", params))
            .await?;
        tracing::info!(
            accepted = response.scrobbles.attr.accepted,
            ignored = response.scrobbles.attr.ignored,
            "Scrobbled batch of {}",
            batch.len()
        );
        Ok(response.scrobbles)
    }

    pub async fn search(&self, artist: &str, track: &str, page: u32) -> Result<TrackSearchResponse> {
        let params = paged(self.client, page)
            .with("artist", artist)
            .with("track", track);
        self.client.fetch(Request::get("track.search", params)).await
    }

    /// Remove the loved mark from a track. Requires a session.
    pub async fn unlove(&self, artist: &str, track: &str) -> Result<()> {
        let params = Params::new().with("artist", artist).with("track", track);
        self.client.execute(Request::post("track.unlove", params)).await
    }

    /// Tell the service what the user started listening to. The timestamp
    /// is ignored. Requires a session.
    pub async fn update_now_playing(&self, scrobble: &Scrobble) -> Result<NowPlaying> {
        if scrobble.artist.is_empty() || scrobble.track.is_empty() {
            return Err(ValidationError::IncompleteNowPlaying.into());
        }

        let mut params = Params::new();
        scrobble.write_params(&mut params, str::to_string, ParamSet::NowPlaying);

        let response: NowPlayingResponse = self
            .client
            .fetch(Request::post("track.updatenowplaying", params))
            .await?;
        Ok(response.now_playing)
    }
}
