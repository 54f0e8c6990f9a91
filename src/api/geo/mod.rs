//! `geo.*` methods: charts for one country.
//!
//! Countries are ISO 3166-1 names, e.g. `"spain"` or `"united kingdom"`.

use serde::{Deserialize, Serialize};

use crate::api::chart::dto::{ChartArtist, ChartTrack};
use crate::api::common::PageAttr;
use crate::api::paged;
use crate::client::Client;
use crate::decode::de;
use crate::error::Result;
use crate::request::Request;

pub struct Geo<'a> {
    client: &'a Client,
    pub country: String,
}

/// `geo.getTopArtists`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GeoTopArtistsResponse {
    #[serde(rename = "topartists", deserialize_with = "de::empty_as_default")]
    pub top_artists: GeoArtists,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GeoArtists {
    #[serde(deserialize_with = "de::one_or_many")]
    pub artist: Vec<ChartArtist>,
    #[serde(rename = "@attr", deserialize_with = "de::empty_as_default")]
    pub attr: PageAttr,
}

/// `geo.getTopTracks`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GeoTopTracksResponse {
    #[serde(deserialize_with = "de::empty_as_default")]
    pub tracks: GeoTracks,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GeoTracks {
    #[serde(deserialize_with = "de::one_or_many")]
    pub track: Vec<ChartTrack>,
    #[serde(rename = "@attr", deserialize_with = "de::empty_as_default")]
    pub attr: PageAttr,
}

impl<'a> Geo<'a> {
    pub fn new(client: &'a Client, country: impl Into<String>) -> Self {
        Self {
            client,
            country: country.into(),
        }
    }

    /// Most popular artists in the country.
    pub async fn get_top_artists(&self, page: u32) -> Result<GeoArtists> {
        let params = paged(self.client, page).with("country", self.country.as_str());
        let response: GeoTopArtistsResponse = self
            .client
            .fetch(Request::get("geo.gettopartists", params))
            .await?;
        Ok(response.top_artists)
    }

    /// Most popular tracks in the last week, optionally narrowed to a
    /// metro `location` within the country.
    pub async fn get_top_tracks(&self, location: &str, page: u32) -> Result<GeoTracks> {
        let params = paged(self.client, page)
            .with("country", self.country.as_str())
            .with("location", location);
        let response: GeoTopTracksResponse = self
            .client
            .fetch(Request::get("geo.gettoptracks", params))
            .await?;
        Ok(response.tracks)
    }
}
