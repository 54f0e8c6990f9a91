//! Chart response shapes. The artist and track entries are shared with `geo`.

use serde::{Deserialize, Serialize};

use crate::api::common::{ArtistRef, Image, PageAttr, RankAttr, Streamable};
use crate::decode::de;

/// Artist entry in a popularity chart
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ChartArtist {
    pub name: String,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub playcount: u64,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub listeners: u64,
    pub mbid: String,
    pub url: String,
    pub streamable: String,
    #[serde(deserialize_with = "de::one_or_many")]
    pub image: Vec<Image>,
}

/// Track entry in a popularity chart
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ChartTrack {
    pub name: String,
    /// Seconds
    #[serde(deserialize_with = "de::lenient_u64")]
    pub duration: u64,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub playcount: u64,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub listeners: u64,
    pub mbid: String,
    pub url: String,
    pub streamable: Streamable,
    #[serde(deserialize_with = "de::empty_as_default")]
    pub artist: ArtistRef,
    #[serde(deserialize_with = "de::one_or_many")]
    pub image: Vec<Image>,
    /// Only set in geo charts
    #[serde(rename = "@attr", deserialize_with = "de::empty_as_default")]
    pub attr: RankAttr,
}

/// Tag entry in the global tag chart
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ChartTag {
    pub name: String,
    pub url: String,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub reach: u64,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub taggings: u64,
    pub streamable: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ChartArtists {
    #[serde(deserialize_with = "de::one_or_many")]
    pub artist: Vec<ChartArtist>,
    #[serde(rename = "@attr", deserialize_with = "de::empty_as_default")]
    pub attr: PageAttr,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ChartTracks {
    #[serde(deserialize_with = "de::one_or_many")]
    pub track: Vec<ChartTrack>,
    #[serde(rename = "@attr", deserialize_with = "de::empty_as_default")]
    pub attr: PageAttr,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ChartTags {
    #[serde(deserialize_with = "de::one_or_many")]
    pub tag: Vec<ChartTag>,
    #[serde(rename = "@attr", deserialize_with = "de::empty_as_default")]
    pub attr: PageAttr,
}

/// `chart.getTopArtists`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ChartTopArtistsResponse {
    #[serde(deserialize_with = "de::empty_as_default")]
    pub artists: ChartArtists,
}

/// `chart.getTopTags`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ChartTopTagsResponse {
    #[serde(deserialize_with = "de::empty_as_default")]
    pub tags: ChartTags,
}

/// `chart.getTopTracks`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ChartTopTracksResponse {
    #[serde(deserialize_with = "de::empty_as_default")]
    pub tracks: ChartTracks,
}

// ============================================================================
// CONTRACT TESTS
// ============================================================================
