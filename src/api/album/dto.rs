//! Album response shapes.

use serde::{Deserialize, Serialize};

use crate::api::common::{ArtistRef, Image, RankAttr, SearchResults, Streamable, TagList, Tags, Wiki};
use crate::decode::de;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AlbumInfoResponse {
    #[serde(deserialize_with = "de::empty_as_default")]
    pub album: AlbumInfo,
}

/// `album.getInfo`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AlbumInfo {
    pub name: String,
    pub artist: String,
    pub mbid: String,
    pub url: String,
    #[serde(deserialize_with = "de::one_or_many")]
    pub image: Vec<Image>,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub listeners: u64,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub playcount: u64,
    /// Only present when a username was given
    #[serde(deserialize_with = "de::lenient_u64")]
    pub userplaycount: u64,
    #[serde(deserialize_with = "de::empty_as_default")]
    pub tracks: AlbumTracks,
    #[serde(deserialize_with = "de::empty_as_default")]
    pub tags: TagList,
    #[serde(deserialize_with = "de::empty_as_default")]
    pub wiki: Wiki,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AlbumTracks {
    #[serde(deserialize_with = "de::one_or_many")]
    pub track: Vec<AlbumTrack>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AlbumTrack {
    pub name: String,
    pub url: String,
    /// Seconds
    #[serde(deserialize_with = "de::lenient_u64")]
    pub duration: u64,
    pub streamable: Streamable,
    #[serde(deserialize_with = "de::empty_as_default")]
    pub artist: ArtistRef,
    #[serde(rename = "@attr", deserialize_with = "de::empty_as_default")]
    pub attr: RankAttr,
}

/// `album.getTags`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AlbumTagsResponse {
    #[serde(deserialize_with = "de::empty_as_default")]
    pub tags: Tags,
}

/// `album.getTopTags`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AlbumTopTagsResponse {
    #[serde(deserialize_with = "de::empty_as_default")]
    pub toptags: Tags,
}

/// `album.search`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AlbumSearchResponse {
    #[serde(deserialize_with = "de::empty_as_default")]
    pub results: SearchResults<AlbumMatches>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AlbumMatches {
    #[serde(deserialize_with = "de::one_or_many")]
    pub album: Vec<AlbumMatch>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AlbumMatch {
    pub name: String,
    pub artist: String,
    pub url: String,
    #[serde(deserialize_with = "de::one_or_many")]
    pub image: Vec<Image>,
    pub streamable: String,
    pub mbid: String,
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
    fn test_parse_album_info_json() {
        let json = r##"{"album": {
            "name": "Badmotorfinger",
            "artist": "Soundgarden",
            "mbid": "",
            "url": "https://www.last.fm/music/Soundgarden/Badmotorfinger",
            "image": [{"#text": "https://img/s.png", "size": "small"}, {"#text": "https://img/m.png", "size": "medium"}],
            "listeners": "512345",
            "playcount": "9876543",
            "tracks": {"track": [
                {"name": "Rusty Cage", "url": "u1", "duration": 266,
                 "streamable": {"#text": "0", "fulltrack": "0"},
                 "artist": {"name": "Soundgarden", "mbid": "153c", "url": "a"},
                 "@attr": {"rank": 1}},
                {"name": "Outshined", "url": "u2", "duration": null,
                 "streamable": {"#text": "0", "fulltrack": "0"},
                 "artist": {"name": "Soundgarden", "mbid": "153c", "url": "a"},
                 "@attr": {"rank": 2}}
            ]},
            "tags": {"tag": [{"name": "grunge", "url": "t"}]},
            "wiki": {"published": "01 Jan 2009", "summary": "s", "content": "c"}
        }}"##;

        let info: AlbumInfoResponse = serde_json::from_str(json).expect("Should parse album info");
        let album = info.album;
        assert_eq!(album.name, "Badmotorfinger");
        assert_eq!(album.listeners, 512_345);
        assert_eq!(album.image[1].size, "medium");
        assert_eq!(album.tracks.track.len(), 2);
        assert_eq!(album.tracks.track[0].duration, 266);
        assert_eq!(album.tracks.track[1].duration, 0);
        assert_eq!(album.tracks.track[1].attr.rank, 2);
        assert_eq!(album.tags.tag[0].name, "grunge");
    }

    #[test]
    fn test_parse_album_info_empty_sections() {
        let json = r#"{"album": {"name": "Demo", "artist": "X", "tags": "", "tracks": {"track": {"name": "Only", "@attr": {"rank": "1"}}}}}"#;
        let info: AlbumInfoResponse = serde_json::from_str(json).expect("Should parse sparse album");
        assert!(info.album.tags.tag.is_empty());
        assert_eq!(info.album.tracks.track.len(), 1);
        assert_eq!(info.album.tracks.track[0].attr.rank, 1);
    }

    #[test]
    fn test_parse_album_info_xml() {
        let xml = r#"<lfm status="ok"><album>
            <name>Badmotorfinger</name>
            <artist>Soundgarden</artist>
            <image size="small">https://img/s.png</image>
            <listeners>512345</listeners>
            <tracks>
                <track rank="1"><name>Rusty Cage</name><duration>266</duration>
                    <streamable fulltrack="0">0</streamable>
                    <artist><name>Soundgarden</name><mbid/><url>a</url></artist>
                </track>
            </tracks>
            <tags></tags>
        </album></lfm>"#;
        let info: AlbumInfoResponse = decode_body(None, xml.as_bytes()).unwrap().unwrap();
        assert_eq!(info.album.artist, "Soundgarden");
        assert_eq!(info.album.image.len(), 1);
        assert_eq!(info.album.image[0].url, "https://img/s.png");
        assert_eq!(info.album.tracks.track[0].attr.rank, 1);
        assert_eq!(info.album.tracks.track[0].artist.name, "Soundgarden");
        assert!(info.album.tags.tag.is_empty());
    }

    #[test]
    fn test_parse_album_search() {
        let json = r##"{"results": {
            "opensearch:Query": {"#text": "", "role": "request", "searchTerms": "believe", "startPage": "1"},
            "opensearch:totalResults": "120",
            "opensearch:startIndex": "0",
            "opensearch:itemsPerPage": "50",
            "albummatches": {"album": [{"name": "Believe", "artist": "Cher", "url": "u", "image": [], "streamable": "0", "mbid": "m"}]},
            "@attr": {"for": "believe"}
        }}"##;
        let search: AlbumSearchResponse = serde_json::from_str(json).expect("Should parse search");
        assert_eq!(search.results.total_results, 120);
        assert_eq!(search.results.matches.album[0].artist, "Cher");
    }
}
