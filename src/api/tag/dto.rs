//! Tag response shapes.

use serde::{Deserialize, Serialize};

use crate::api::common::{ArtistRef, Image, PageAttr, RankAttr, Streamable, TagsAttr};
use crate::decode::de;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TagInfoResponse {
    #[serde(deserialize_with = "de::empty_as_default")]
    pub tag: TagInfo,
}

/// `tag.getInfo`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TagInfo {
    pub name: String,
    /// Times the tag was applied
    #[serde(deserialize_with = "de::lenient_u64")]
    pub total: u64,
    /// Distinct users who applied it
    #[serde(deserialize_with = "de::lenient_u64")]
    pub reach: u64,
    #[serde(deserialize_with = "de::empty_as_default")]
    pub wiki: TagWiki,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TagWiki {
    pub summary: String,
    pub content: String,
}

/// `tag.getSimilar`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TagSimilarResponse {
    #[serde(rename = "similartags", deserialize_with = "de::empty_as_default")]
    pub similar_tags: SimilarTags,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SimilarTags {
    #[serde(deserialize_with = "de::one_or_many")]
    pub tag: Vec<SimilarTag>,
    #[serde(rename = "@attr", deserialize_with = "de::empty_as_default")]
    pub attr: TagsAttr,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SimilarTag {
    pub name: String,
    pub url: String,
    #[serde(deserialize_with = "de::lenient_bool")]
    pub streamable: bool,
}

/// `tag.getTopAlbums`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TagTopAlbumsResponse {
    #[serde(deserialize_with = "de::empty_as_default")]
    pub albums: TagAlbums,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TagAlbums {
    #[serde(deserialize_with = "de::one_or_many")]
    pub album: Vec<TagAlbum>,
    #[serde(rename = "@attr", deserialize_with = "de::empty_as_default")]
    pub attr: PageAttr,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TagAlbum {
    pub name: String,
    pub mbid: String,
    pub url: String,
    #[serde(deserialize_with = "de::empty_as_default")]
    pub artist: ArtistRef,
    #[serde(deserialize_with = "de::one_or_many")]
    pub image: Vec<Image>,
    #[serde(rename = "@attr", deserialize_with = "de::empty_as_default")]
    pub attr: RankAttr,
}

/// `tag.getTopArtists`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TagTopArtistsResponse {
    #[serde(rename = "topartists", deserialize_with = "de::empty_as_default")]
    pub top_artists: TagArtists,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TagArtists {
    #[serde(deserialize_with = "de::one_or_many")]
    pub artist: Vec<TagArtist>,
    #[serde(rename = "@attr", deserialize_with = "de::empty_as_default")]
    pub attr: PageAttr,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TagArtist {
    pub name: String,
    pub mbid: String,
    pub url: String,
    pub streamable: String,
    #[serde(deserialize_with = "de::one_or_many")]
    pub image: Vec<Image>,
    #[serde(rename = "@attr", deserialize_with = "de::empty_as_default")]
    pub attr: RankAttr,
}

/// `tag.getTopTags`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TagTopTagsResponse {
    #[serde(deserialize_with = "de::empty_as_default")]
    pub toptags: TopTags,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TopTags {
    #[serde(deserialize_with = "de::one_or_many")]
    pub tag: Vec<TopTag>,
    #[serde(rename = "@attr", deserialize_with = "de::empty_as_default")]
    pub attr: TopTagsAttr,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TopTag {
    pub name: String,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub count: u64,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub reach: u64,
}

/// Offset paging used only by `tag.getTopTags`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TopTagsAttr {
    #[serde(deserialize_with = "de::lenient_u64")]
    pub offset: u64,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub num_res: u64,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub total: u64,
}

/// `tag.getTopTracks`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TagTopTracksResponse {
    #[serde(deserialize_with = "de::empty_as_default")]
    pub tracks: TagTracks,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TagTracks {
    #[serde(deserialize_with = "de::one_or_many")]
    pub track: Vec<TagTrack>,
    #[serde(rename = "@attr", deserialize_with = "de::empty_as_default")]
    pub attr: PageAttr,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TagTrack {
    pub name: String,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub duration: u64,
    pub mbid: String,
    pub url: String,
    pub streamable: Streamable,
    #[serde(deserialize_with = "de::empty_as_default")]
    pub artist: ArtistRef,
    #[serde(deserialize_with = "de::one_or_many")]
    pub image: Vec<Image>,
    #[serde(rename = "@attr", deserialize_with = "de::empty_as_default")]
    pub attr: RankAttr,
}

// ============================================================================
// CONTRACT TESTS
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::api::common::WeeklyChartListResponse;
    use crate::decode::decode_body;

    #[test]
    fn test_parse_tag_info() {
        let json = r#"{"tag": {"name": "disco", "total": 263214, "reach": 34057,
            "wiki": {"summary": "Disco is a genre", "content": "Disco is a genre of dance music"}}}"#;
        let info: TagInfoResponse = serde_json::from_str(json).expect("Should parse tag info");
        assert_eq!(info.tag.total, 263_214);
        assert_eq!(info.tag.reach, 34_057);
        assert_eq!(info.tag.wiki.summary, "Disco is a genre");
    }

    #[test]
    fn test_parse_similar_tags_empty_list() {
        let json = r#"{"similartags": {"tag": [], "@attr": {"tag": "disco"}}}"#;
        let similar: TagSimilarResponse = serde_json::from_str(json).expect("Should parse similar");
        assert!(similar.similar_tags.tag.is_empty());
        assert_eq!(similar.similar_tags.attr.tag, "disco");
    }

    #[test]
    fn test_parse_top_tags_offset_paging() {
        let json = r#"{"toptags": {"@attr": {"offset": 0, "num_res": 50, "total": 2800000},
            "tag": [{"name": "rock", "count": 4024000, "reach": 399000}]}}"#;
        let top: TagTopTagsResponse = serde_json::from_str(json).expect("Should parse top tags");
        assert_eq!(top.toptags.attr.num_res, 50);
        assert_eq!(top.toptags.tag[0].count, 4_024_000);
    }

    #[test]
    fn test_parse_top_albums_xml() {
        let xml = r#"<lfm status="ok">
            <albums tag="disco" page="1" perPage="50" totalPages="100" total="5000">
                <album rank="1">
                    <name>Random Access Memories</name>
                    <mbid></mbid>
                    <url>u</url>
                    <artist><name>Daft Punk</name><mbid>056e4f3e</mbid><url>d</url></artist>
                    <image size="small">https://img/s.png</image>
                    <image size="large">https://img/l.png</image>
                </album>
            </albums>
        </lfm>"#;
        let top: TagTopAlbumsResponse = decode_body(None, xml.as_bytes()).unwrap().unwrap();
        let album = &top.albums.album[0];
        assert_eq!(album.artist.name, "Daft Punk");
        assert_eq!(album.attr.rank, 1);
        assert_eq!(album.image.len(), 2);
        assert_eq!(top.albums.attr.tag, "disco");
        assert_eq!(top.albums.attr.total, 5000);
    }

    #[test]
    fn test_parse_weekly_chart_list() {
        let json = r##"{"weeklychartlist": {"chart": [
            {"#text": "", "from": "1108296000", "to": "1108900800"},
            {"#text": "", "from": "1108900800", "to": "1109505600"}
        ], "@attr": {"tag": "disco"}}}"##;
        let list: WeeklyChartListResponse = serde_json::from_str(json).expect("Should parse chart list");
        assert_eq!(list.weekly_chart_list.chart.len(), 2);
        assert_eq!(list.weekly_chart_list.chart[1].to, 1_109_505_600);
        assert_eq!(list.weekly_chart_list.attr.tag, "disco");
    }
}
