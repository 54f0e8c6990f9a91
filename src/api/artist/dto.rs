//! Artist response shapes.

use serde::{Deserialize, Serialize};

use crate::api::common::{
    ArtistRef, Image, PageAttr, RankAttr, SearchResults, TagList, Tags, TagsAttr,
};
use crate::decode::de;

/// Artist as it appears in similar lists and search matches
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ArtistSummary {
    pub name: String,
    pub mbid: String,
    pub url: String,
    #[serde(deserialize_with = "de::one_or_many")]
    pub image: Vec<Image>,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub listeners: u64,
    /// Similarity in `0.0..=1.0`; only set in similar lists
    #[serde(rename = "match", deserialize_with = "de::lenient_f64")]
    pub similarity: f64,
    pub streamable: String,
}

/// `artist.getCorrection`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ArtistCorrectionResponse {
    #[serde(deserialize_with = "de::empty_as_default")]
    pub corrections: ArtistCorrections,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ArtistCorrections {
    #[serde(deserialize_with = "de::empty_as_default")]
    pub correction: ArtistCorrection,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ArtistCorrection {
    #[serde(deserialize_with = "de::empty_as_default")]
    pub artist: ArtistRef,
    #[serde(rename = "@attr", deserialize_with = "de::empty_as_default")]
    pub attr: CorrectionAttr,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CorrectionAttr {
    #[serde(deserialize_with = "de::lenient_u64")]
    pub index: u64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ArtistInfoResponse {
    #[serde(deserialize_with = "de::empty_as_default")]
    pub artist: ArtistInfo,
}

/// `artist.getInfo`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ArtistInfo {
    pub name: String,
    pub mbid: String,
    pub url: String,
    #[serde(deserialize_with = "de::one_or_many")]
    pub image: Vec<Image>,
    pub streamable: String,
    #[serde(deserialize_with = "de::lenient_bool")]
    pub ontour: bool,
    #[serde(deserialize_with = "de::empty_as_default")]
    pub stats: ArtistStats,
    #[serde(deserialize_with = "de::empty_as_default")]
    pub similar: SimilarList,
    #[serde(deserialize_with = "de::empty_as_default")]
    pub tags: TagList,
    #[serde(deserialize_with = "de::empty_as_default")]
    pub bio: Bio,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ArtistStats {
    #[serde(deserialize_with = "de::lenient_u64")]
    pub listeners: u64,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub playcount: u64,
    /// Only present when a username was given
    #[serde(deserialize_with = "de::lenient_u64")]
    pub userplaycount: u64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SimilarList {
    #[serde(deserialize_with = "de::one_or_many")]
    pub artist: Vec<ArtistSummary>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Bio {
    #[serde(deserialize_with = "de::empty_as_default")]
    pub links: BioLinks,
    pub published: String,
    pub summary: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct BioLinks {
    #[serde(deserialize_with = "de::one_or_many")]
    pub link: Vec<Link>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Link {
    #[serde(rename = "#text")]
    pub text: String,
    pub rel: String,
    pub href: String,
}

/// `artist.getSimilar`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ArtistSimilarResponse {
    #[serde(rename = "similarartists", deserialize_with = "de::empty_as_default")]
    pub similar_artists: SimilarArtists,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SimilarArtists {
    #[serde(deserialize_with = "de::one_or_many")]
    pub artist: Vec<ArtistSummary>,
    #[serde(rename = "@attr", deserialize_with = "de::empty_as_default")]
    pub attr: TagsAttr,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ArtistTagsResponse {
    #[serde(deserialize_with = "de::empty_as_default")]
    pub tags: Tags,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ArtistTopTagsResponse {
    #[serde(deserialize_with = "de::empty_as_default")]
    pub toptags: Tags,
}

/// `artist.getTopAlbums`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ArtistTopAlbumsResponse {
    #[serde(rename = "topalbums", deserialize_with = "de::empty_as_default")]
    pub top_albums: ArtistTopAlbums,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ArtistTopAlbums {
    #[serde(deserialize_with = "de::one_or_many")]
    pub album: Vec<ArtistAlbum>,
    #[serde(rename = "@attr", deserialize_with = "de::empty_as_default")]
    pub attr: PageAttr,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ArtistAlbum {
    pub name: String,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub playcount: u64,
    pub mbid: String,
    pub url: String,
    #[serde(deserialize_with = "de::empty_as_default")]
    pub artist: ArtistRef,
    #[serde(deserialize_with = "de::one_or_many")]
    pub image: Vec<Image>,
}

/// `artist.getTopTracks`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ArtistTopTracksResponse {
    #[serde(rename = "toptracks", deserialize_with = "de::empty_as_default")]
    pub top_tracks: ArtistTopTracks,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ArtistTopTracks {
    #[serde(deserialize_with = "de::one_or_many")]
    pub track: Vec<ArtistTrack>,
    #[serde(rename = "@attr", deserialize_with = "de::empty_as_default")]
    pub attr: PageAttr,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ArtistTrack {
    pub name: String,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub playcount: u64,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub listeners: u64,
    pub mbid: String,
    pub url: String,
    pub streamable: String,
    #[serde(deserialize_with = "de::empty_as_default")]
    pub artist: ArtistRef,
    #[serde(deserialize_with = "de::one_or_many")]
    pub image: Vec<Image>,
    #[serde(rename = "@attr", deserialize_with = "de::empty_as_default")]
    pub attr: RankAttr,
}

/// `artist.search`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ArtistSearchResponse {
    #[serde(deserialize_with = "de::empty_as_default")]
    pub results: SearchResults<ArtistMatches>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ArtistMatches {
    #[serde(deserialize_with = "de::one_or_many")]
    pub artist: Vec<ArtistSummary>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// ============================================================================
