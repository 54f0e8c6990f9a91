//! Track response shapes.

use serde::{Deserialize, Deserializer, Serialize};

use crate::api::common::{ArtistRef, Image, SearchResults, Streamable, TagList, Tags, TagsAttr, Wiki};
use crate::decode::de;

/// `track.getCorrection`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TrackCorrectionResponse {
    #[serde(deserialize_with = "de::empty_as_default")]
    pub corrections: TrackCorrections,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TrackCorrections {
    #[serde(deserialize_with = "de::empty_as_default")]
    pub correction: TrackCorrection,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TrackCorrection {
    #[serde(deserialize_with = "de::empty_as_default")]
    pub track: CorrectedTrack,
    #[serde(rename = "@attr", deserialize_with = "de::empty_as_default")]
    pub attr: TrackCorrectionAttr,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CorrectedTrack {
    pub name: String,
    pub mbid: String,
    pub url: String,
    #[serde(deserialize_with = "de::empty_as_default")]
    pub artist: ArtistRef,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TrackCorrectionAttr {
    #[serde(deserialize_with = "de::lenient_u64")]
    pub index: u64,
    #[serde(rename = "artistcorrected", deserialize_with = "de::lenient_bool")]
    pub artist_corrected: bool,
    #[serde(rename = "trackcorrected", deserialize_with = "de::lenient_bool")]
    pub track_corrected: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TrackInfoResponse {
    #[serde(deserialize_with = "de::empty_as_default")]
    pub track: TrackInfo,
}

/// `track.getInfo`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TrackInfo {
    pub name: String,
    pub mbid: String,
    pub url: String,
    /// Milliseconds
    #[serde(deserialize_with = "de::lenient_u64")]
    pub duration: u64,
    pub streamable: Streamable,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub listeners: u64,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub playcount: u64,
    #[serde(deserialize_with = "de::empty_as_default")]
    pub artist: ArtistRef,
    #[serde(deserialize_with = "de::empty_as_default")]
    pub album: TrackAlbum,
    /// Only present when a username was given
    #[serde(deserialize_with = "de::lenient_u64")]
    pub userplaycount: u64,
    #[serde(deserialize_with = "de::lenient_bool")]
    pub userloved: bool,
    #[serde(deserialize_with = "de::empty_as_default")]
    pub toptags: TagList,
    #[serde(deserialize_with = "de::empty_as_default")]
    pub wiki: Wiki,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TrackAlbum {
    pub artist: String,
    pub title: String,
    pub mbid: String,
    pub url: String,
    #[serde(deserialize_with = "de::one_or_many")]
    pub image: Vec<Image>,
    #[serde(rename = "@attr", deserialize_with = "de::empty_as_default")]
    pub attr: AlbumPosition,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AlbumPosition {
    #[serde(deserialize_with = "de::lenient_u64")]
    pub position: u64,
}

/// `track.getSimilar`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TrackSimilarResponse {
    #[serde(rename = "similartracks", deserialize_with = "de::empty_as_default")]
    pub similar_tracks: SimilarTracks,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SimilarTracks {
    #[serde(deserialize_with = "de::one_or_many")]
    pub track: Vec<SimilarTrack>,
    #[serde(rename = "@attr", deserialize_with = "de::empty_as_default")]
    pub attr: TagsAttr,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SimilarTrack {
    pub name: String,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub playcount: u64,
    pub mbid: String,
    #[serde(rename = "match", deserialize_with = "de::lenient_f64")]
    pub similarity: f64,
    pub url: String,
    pub streamable: Streamable,
    /// Seconds
    #[serde(deserialize_with = "de::lenient_u64")]
    pub duration: u64,
    #[serde(deserialize_with = "de::empty_as_default")]
    pub artist: ArtistRef,
    #[serde(deserialize_with = "de::one_or_many")]
    pub image: Vec<Image>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TrackTagsResponse {
    #[serde(deserialize_with = "de::empty_as_default")]
    pub tags: Tags,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TrackTopTagsResponse {
    #[serde(deserialize_with = "de::empty_as_default")]
    pub toptags: Tags,
}

/// `track.search`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TrackSearchResponse {
    #[serde(deserialize_with = "de::empty_as_default")]
    pub results: SearchResults<TrackMatches>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TrackMatches {
    #[serde(deserialize_with = "de::one_or_many")]
    pub track: Vec<TrackMatch>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TrackMatch {
    pub name: String,
    pub artist: String,
    pub url: String,
    pub streamable: String,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub listeners: u64,
    #[serde(deserialize_with = "de::one_or_many")]
    pub image: Vec<Image>,
    pub mbid: String,
}

/// A value the service may have auto-corrected, e.g.
/// `<artist corrected="1">Guns N' Roses</artist>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Corrected {
    #[serde(rename = "#text")]
    pub text: String,
    pub corrected: bool,
}

impl<'de> Deserialize<'de> for Corrected {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Plain(String),
            Tagged {
                #[serde(rename = "#text", default)]
                text: String,
                #[serde(default, deserialize_with = "de::lenient_bool")]
                corrected: bool,
            },
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Plain(text) => Self {
                text,
                corrected: false,
            },
            Raw::Tagged { text, corrected } => Self { text, corrected },
        })
    }
}

/// Why the service dropped a scrobble; code `0` means it was accepted.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct IgnoredMessage {
    #[serde(deserialize_with = "de::lenient_u64")]
    pub code: u64,
    #[serde(rename = "#text")]
    pub text: String,
}

/// `track.scrobble`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ScrobbleResponse {
    #[serde(deserialize_with = "de::empty_as_default")]
    pub scrobbles: Scrobbles,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Scrobbles {
    #[serde(deserialize_with = "de::one_or_many")]
    pub scrobble: Vec<ScrobbleResult>,
    #[serde(rename = "@attr", deserialize_with = "de::empty_as_default")]
    pub attr: ScrobbleCounts,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ScrobbleCounts {
    #[serde(deserialize_with = "de::lenient_u64")]
    pub accepted: u64,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub ignored: u64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ScrobbleResult {
    pub track: Corrected,
    pub artist: Corrected,
    pub album: Corrected,
    #[serde(rename = "albumArtist")]
    pub album_artist: Corrected,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub timestamp: u64,
    #[serde(rename = "ignoredMessage")]
    pub ignored_message: IgnoredMessage,
}

/// `track.updateNowPlaying`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct NowPlayingResponse {
    #[serde(rename = "nowplaying", deserialize_with = "de::empty_as_default")]
    pub now_playing: NowPlaying,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct NowPlaying {
    pub track: Corrected,
    pub artist: Corrected,
    pub album: Corrected,
    #[serde(rename = "albumArtist")]
    pub album_artist: Corrected,
    #[serde(rename = "ignoredMessage")]
    pub ignored_message: IgnoredMessage,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::decode::decode_body;

    #[test]
    fn test_parse_scrobble_xml() {
        let xml = r#"<?xml version="1.0" encoding="utf-8"?>
        <lfm status="ok">
            <scrobbles accepted="1" ignored="1">
                <scrobble>
                    <track corrected="0">Outshined</track>
                    <artist corrected="0">Soundgarden</artist>
                    <album corrected="0"></album>
                    <albumArtist corrected="0"></albumArtist>
                    <timestamp>1287140447</timestamp>
                    <ignoredMessage code="0"></ignoredMessage>
                </scrobble>
                <scrobble>
                    <track corrected="1">Rusty Cage</track>
                    <artist corrected="0">Soundgarden</artist>
                    <album corrected="0"></album>
                    <albumArtist corrected="0"></albumArtist>
                    <timestamp>1287140448</timestamp>
                    <ignoredMessage code="1">Artist was ignored</ignoredMessage>
                </scrobble>
            </scrobbles>
        </lfm>"#;
        let response: ScrobbleResponse = decode_body(Some("text/xml"), xml.as_bytes())
            .unwrap()
            .unwrap();
        let scrobbles = response.scrobbles;
        assert_eq!(scrobbles.attr.accepted, 1);
        assert_eq!(scrobbles.attr.ignored, 1);
        assert_eq!(scrobbles.scrobble.len(), 2);
        assert_eq!(scrobbles.scrobble[0].track.text, "Outshined");
        assert!(!scrobbles.scrobble[0].track.corrected);
        assert!(scrobbles.scrobble[1].track.corrected);
        assert_eq!(scrobbles.scrobble[1].ignored_message.code, 1);
        assert_eq!(scrobbles.scrobble[1].ignored_message.text, "Artist was ignored");
        assert_eq!(scrobbles.scrobble[0].album.text, "");
    }

    #[test]
    fn test_parse_single_scrobble_json() {
        let json = r##"{"scrobbles": {
            "scrobble": {
                "track": {"corrected": "0", "#text": "Outshined"},
                "artist": {"corrected": "0", "#text": "Soundgarden"},
                "album": {"corrected": "0"},
                "albumArtist": {"corrected": "0", "#text": ""},
                "timestamp": "1287140447",
                "ignoredMessage": {"code": "0", "#text": ""}
            },
            "@attr": {"accepted": 1, "ignored": 0}
        }}"##;
        let response: ScrobbleResponse = serde_json::from_str(json).expect("Should parse scrobble");
        assert_eq!(response.scrobbles.scrobble.len(), 1);
        assert_eq!(response.scrobbles.scrobble[0].timestamp, 1_287_140_447);
        assert_eq!(response.scrobbles.attr.accepted, 1);
    }

    #[test]
    fn test_parse_now_playing_xml() {
        let xml = r#"<lfm status="ok">
            <nowplaying>
                <track corrected="0">Outshined</track>
                <artist corrected="0">Soundgarden</artist>
                <album corrected="0">Badmotorfinger</album>
                <albumArtist corrected="0"></albumArtist>
                <ignoredMessage code="0"></ignoredMessage>
            </nowplaying>
        </lfm>"#;
        let response: NowPlayingResponse = decode_body(None, xml.as_bytes()).unwrap().unwrap();
        assert_eq!(response.now_playing.album.text, "Badmotorfinger");
        assert_eq!(response.now_playing.ignored_message.code, 0);
    }

    #[test]
    fn test_parse_track_info() {
        let json = r##"{"track": {
            "name": "Believe",
            "mbid": "32ca187e",
            "url": "https://www.last.fm/music/Cher/_/Believe",
            "duration": "240000",
            "streamable": {"#text": "0", "fulltrack": "0"},
            "listeners": "949281",
            "playcount": "6919432",
            "artist": {"name": "Cher", "mbid": "bfcc6d75", "url": "https://www.last.fm/music/Cher"},
            "album": {"artist": "Cher", "title": "Believe", "mbid": "63b3a8ca", "url": "u",
                      "image": [{"#text": "s.png", "size": "small"}], "@attr": {"position": "1"}},
            "userplaycount": "12",
            "userloved": "1",
            "toptags": {"tag": [{"name": "pop", "url": "p"}]},
            "wiki": {"published": "27 Jul 2008", "summary": "s", "content": "c"}
        }}"##;
        let info: TrackInfoResponse = serde_json::from_str(json).expect("Should parse track info");
        let track = info.track;
        assert_eq!(track.duration, 240_000);
        assert_eq!(track.album.attr.position, 1);
        assert_eq!(track.userplaycount, 12);
        assert!(track.userloved);
        assert_eq!(track.toptags.tag[0].name, "pop");
    }

    #[test]
    fn test_parse_correction() {
        let json = r#"{"corrections": {"correction": {
            "track": {"name": "Mr. Brownstone", "mbid": "", "url": "u",
                      "artist": {"name": "Guns N' Roses", "mbid": "eeb1195b", "url": "g"}},
            "@attr": {"index": "0", "artistcorrected": "1", "trackcorrected": "0"}
        }}}"#;
        let response: TrackCorrectionResponse = serde_json::from_str(json).expect("Should parse correction");
        let correction = response.corrections.correction;
        assert_eq!(correction.track.artist.name, "Guns N' Roses");
        assert!(correction.attr.artist_corrected);
        assert!(!correction.attr.track_corrected);
    }

    #[test]
    fn test_parse_similar_numeric_fields() {
        let json = r##"{"similartracks": {"track": [
            {"name": "Strong Enough", "playcount": 459391, "match": 1.0, "url": "u",
             "streamable": {"#text": "0", "fulltrack": "0"}, "duration": 223,
             "artist": {"name": "Cher", "url": "c"}}
        ], "@attr": {"artist": "Cher"}}}"##;
        let response: TrackSimilarResponse = serde_json::from_str(json).expect("Should parse similar");
        let similar = response.similar_tracks;
        assert_eq!(similar.track[0].playcount, 459_391);
        assert_eq!(similar.track[0].duration, 223);
        assert_eq!(similar.attr.artist, "Cher");
    }
}
