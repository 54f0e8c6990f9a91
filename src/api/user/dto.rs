//! User response shapes.

use serde::{Deserialize, Serialize};

use crate::api::common::{ArtistRef, Date, Image, PageAttr, RankAttr, Streamable, TagsAttr};
use crate::decode::de;

/// Artist as it appears in a user's lists. Plain lists carry the name in
/// `#text`; extended lists carry `name` and `url`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct UserArtist {
    pub name: String,
    #[serde(rename = "#text")]
    pub text: String,
    pub mbid: String,
    pub url: String,
    #[serde(deserialize_with = "de::one_or_many")]
    pub image: Vec<Image>,
}

impl UserArtist {
    /// The artist name from whichever field carries it.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.text
        } else {
            &self.name
        }
    }
}

/// Album reference in recent tracks
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AlbumRef {
    pub mbid: String,
    #[serde(rename = "#text")]
    pub title: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Registered {
    #[serde(deserialize_with = "de::lenient_u64")]
    pub unixtime: u64,
}

/// `user.getInfo` and entries of `user.getFriends`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct UserInfo {
    pub name: String,
    pub realname: String,
    pub url: String,
    pub country: String,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub age: u64,
    pub gender: String,
    #[serde(deserialize_with = "de::lenient_bool")]
    pub subscriber: bool,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub playcount: u64,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub playlists: u64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(deserialize_with = "de::one_or_many")]
    pub image: Vec<Image>,
    #[serde(deserialize_with = "de::empty_as_default")]
    pub registered: Registered,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct UserInfoResponse {
    #[serde(deserialize_with = "de::empty_as_default")]
    pub user: UserInfo,
}

/// `user.getFriends`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct FriendsResponse {
    #[serde(deserialize_with = "de::empty_as_default")]
    pub friends: Friends,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Friends {
    #[serde(deserialize_with = "de::one_or_many")]
    pub user: Vec<UserInfo>,
    #[serde(rename = "@attr", deserialize_with = "de::empty_as_default")]
    pub attr: PageAttr,
}

/// `user.getRecentTracks`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RecentTracksResponse {
    #[serde(rename = "recenttracks", deserialize_with = "de::empty_as_default")]
    pub recent_tracks: RecentTracks,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RecentTracks {
    #[serde(deserialize_with = "de::one_or_many")]
    pub track: Vec<RecentTrack>,
    #[serde(rename = "@attr", deserialize_with = "de::empty_as_default")]
    pub attr: PageAttr,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RecentTrack {
    pub name: String,
    pub mbid: String,
    pub url: String,
    pub streamable: String,
    #[serde(deserialize_with = "de::empty_as_default")]
    pub artist: UserArtist,
    #[serde(deserialize_with = "de::empty_as_default")]
    pub album: AlbumRef,
    #[serde(deserialize_with = "de::one_or_many")]
    pub image: Vec<Image>,
    /// Only set in extended lists
    #[serde(deserialize_with = "de::lenient_bool")]
    pub loved: bool,
    /// Absent for the track currently playing
    #[serde(deserialize_with = "de::empty_as_default")]
    pub date: Date,
    #[serde(rename = "@attr", deserialize_with = "de::empty_as_default")]
    pub attr: NowPlayingAttr,
}

impl RecentTrack {
    pub fn is_now_playing(&self) -> bool {
        self.attr.nowplaying
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct NowPlayingAttr {
    #[serde(deserialize_with = "de::lenient_bool")]
    pub nowplaying: bool,
}

/// `user.getLovedTracks`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LovedTracksResponse {
    #[serde(rename = "lovedtracks", deserialize_with = "de::empty_as_default")]
    pub loved_tracks: LovedTracks,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LovedTracks {
    #[serde(deserialize_with = "de::one_or_many")]
    pub track: Vec<LovedTrack>,
    #[serde(rename = "@attr", deserialize_with = "de::empty_as_default")]
    pub attr: PageAttr,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LovedTrack {
    pub name: String,
    pub mbid: String,
    pub url: String,
    #[serde(deserialize_with = "de::empty_as_default")]
    pub artist: ArtistRef,
    #[serde(deserialize_with = "de::empty_as_default")]
    pub date: Date,
    #[serde(deserialize_with = "de::one_or_many")]
    pub image: Vec<Image>,
    pub streamable: Streamable,
}

/// `user.getPersonalTags`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PersonalTagsResponse {
    #[serde(deserialize_with = "de::empty_as_default")]
    pub taggings: Taggings,
}

/// Items the user tagged; only the section for the requested type is filled.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Taggings {
    #[serde(deserialize_with = "de::empty_as_default")]
    pub artists: TaggedArtists,
    #[serde(deserialize_with = "de::empty_as_default")]
    pub albums: TaggedAlbums,
    #[serde(deserialize_with = "de::empty_as_default")]
    pub tracks: TaggedTracks,
    #[serde(rename = "@attr", deserialize_with = "de::empty_as_default")]
    pub attr: PageAttr,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TaggedArtists {
    #[serde(deserialize_with = "de::one_or_many")]
    pub artist: Vec<ArtistRef>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TaggedAlbums {
    #[serde(deserialize_with = "de::one_or_many")]
    pub album: Vec<TaggedItem>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TaggedTracks {
    #[serde(deserialize_with = "de::one_or_many")]
    pub track: Vec<TaggedItem>,
}

/// Album or track the user tagged
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TaggedItem {
    pub name: String,
    pub mbid: String,
    pub url: String,
    #[serde(deserialize_with = "de::empty_as_default")]
    pub artist: ArtistRef,
    #[serde(deserialize_with = "de::one_or_many")]
    pub image: Vec<Image>,
}

/// `user.getTopAlbums`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TopAlbumsResponse {
    #[serde(rename = "topalbums", deserialize_with = "de::empty_as_default")]
    pub top_albums: TopAlbums,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TopAlbums {
    #[serde(deserialize_with = "de::one_or_many")]
    pub album: Vec<TopAlbum>,
    #[serde(rename = "@attr", deserialize_with = "de::empty_as_default")]
    pub attr: PageAttr,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TopAlbum {
    pub name: String,
    pub mbid: String,
    pub url: String,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub playcount: u64,
    #[serde(deserialize_with = "de::empty_as_default")]
    pub artist: ArtistRef,
    #[serde(deserialize_with = "de::one_or_many")]
    pub image: Vec<Image>,
    #[serde(rename = "@attr", deserialize_with = "de::empty_as_default")]
    pub attr: RankAttr,
}

/// `user.getTopArtists`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TopArtistsResponse {
    #[serde(rename = "topartists", deserialize_with = "de::empty_as_default")]
    pub top_artists: TopArtists,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TopArtists {
    #[serde(deserialize_with = "de::one_or_many")]
    pub artist: Vec<TopArtist>,
    #[serde(rename = "@attr", deserialize_with = "de::empty_as_default")]
    pub attr: PageAttr,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TopArtist {
    pub name: String,
    pub mbid: String,
    pub url: String,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub playcount: u64,
    pub streamable: String,
    #[serde(deserialize_with = "de::one_or_many")]
    pub image: Vec<Image>,
    #[serde(rename = "@attr", deserialize_with = "de::empty_as_default")]
    pub attr: RankAttr,
}

/// `user.getTopTracks`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TopTracksResponse {
    #[serde(rename = "toptracks", deserialize_with = "de::empty_as_default")]
    pub top_tracks: TopTracks,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TopTracks {
    #[serde(deserialize_with = "de::one_or_many")]
    pub track: Vec<TopTrack>,
    #[serde(rename = "@attr", deserialize_with = "de::empty_as_default")]
    pub attr: PageAttr,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TopTrack {
    pub name: String,
    pub mbid: String,
    pub url: String,
    /// Seconds
    #[serde(deserialize_with = "de::lenient_u64")]
    pub duration: u64,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub playcount: u64,
    pub streamable: Streamable,
    #[serde(deserialize_with = "de::empty_as_default")]
    pub artist: ArtistRef,
    #[serde(deserialize_with = "de::one_or_many")]
    pub image: Vec<Image>,
    #[serde(rename = "@attr", deserialize_with = "de::empty_as_default")]
    pub attr: RankAttr,
}

/// `user.getTopTags`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct UserTopTagsResponse {
    #[serde(deserialize_with = "de::empty_as_default")]
    pub toptags: UserTopTags,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct UserTopTags {
    #[serde(deserialize_with = "de::one_or_many")]
    pub tag: Vec<crate::api::common::Tag>,
    #[serde(rename = "@attr", deserialize_with = "de::empty_as_default")]
    pub attr: TagsAttr,
}

/// Range and owner of a weekly chart
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct WeeklyChartAttr {
    pub user: String,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub from: u64,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub to: u64,
}

/// Entry of a weekly album, artist or track chart
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct WeeklyEntry {
    pub name: String,
    pub mbid: String,
    pub url: String,
    #[serde(deserialize_with = "de::lenient_u64")]
    pub playcount: u64,
    /// Unset in the artist chart
    #[serde(deserialize_with = "de::empty_as_default")]
    pub artist: UserArtist,
    #[serde(deserialize_with = "de::one_or_many")]
    pub image: Vec<Image>,
    #[serde(rename = "@attr", deserialize_with = "de::empty_as_default")]
    pub attr: RankAttr,
}

/// `user.getWeeklyAlbumChart`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct WeeklyAlbumChartResponse {
    #[serde(rename = "weeklyalbumchart", deserialize_with = "de::empty_as_default")]
    pub chart: WeeklyAlbumChart,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct WeeklyAlbumChart {
    #[serde(deserialize_with = "de::one_or_many")]
    pub album: Vec<WeeklyEntry>,
    #[serde(rename = "@attr", deserialize_with = "de::empty_as_default")]
    pub attr: WeeklyChartAttr,
}

/// `user.getWeeklyArtistChart`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct WeeklyArtistChartResponse {
    #[serde(rename = "weeklyartistchart", deserialize_with = "de::empty_as_default")]
    pub chart: WeeklyArtistChart,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct WeeklyArtistChart {
    #[serde(deserialize_with = "de::one_or_many")]
    pub artist: Vec<WeeklyEntry>,
    #[serde(rename = "@attr", deserialize_with = "de::empty_as_default")]
    pub attr: WeeklyChartAttr,
}

/// `user.getWeeklyTrackChart`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct WeeklyTrackChartResponse {
    #[serde(rename = "weeklytrackchart", deserialize_with = "de::empty_as_default")]
    pub chart: WeeklyTrackChart,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct WeeklyTrackChart {
    #[serde(deserialize_with = "de::one_or_many")]
    pub track: Vec<WeeklyEntry>,
    #[serde(rename = "@attr", deserialize_with = "de::empty_as_default")]
    pub attr: WeeklyChartAttr,
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
    fn test_parse_recent_tracks_with_now_playing() {
        let json = r##"{"recenttracks": {
            "track": [
                {"artist": {"mbid": "153c", "#text": "Soundgarden"},
                 "streamable": "0", "image": [{"size": "small", "#text": "s.png"}],
                 "mbid": "", "album": {"mbid": "", "#text": "Badmotorfinger"},
                 "name": "Outshined", "@attr": {"nowplaying": "true"}, "url": "u"},
                {"artist": {"mbid": "153c", "#text": "Soundgarden"},
                 "streamable": "0", "mbid": "", "album": {"mbid": "", "#text": "Badmotorfinger"},
                 "name": "Rusty Cage", "url": "u",
                 "date": {"uts": "1700000000", "#text": "14 Nov 2023, 22:13"}}
            ],
            "@attr": {"user": "rj", "totalPages": "3000", "page": "1", "perPage": "2", "total": "6000"}
        }}"##;
        let response: RecentTracksResponse = serde_json::from_str(json).expect("Should parse recent tracks");
        let recent = response.recent_tracks;
        assert!(recent.track[0].is_now_playing());
        assert_eq!(recent.track[0].date.uts, 0);
        assert_eq!(recent.track[0].artist.display_name(), "Soundgarden");
        assert_eq!(recent.track[0].album.title, "Badmotorfinger");
        assert!(!recent.track[1].is_now_playing());
        assert_eq!(recent.track[1].date.uts, 1_700_000_000);
        assert_eq!(recent.attr.total, 6000);
    }

    #[test]
    fn test_parse_recent_tracks_extended() {
        let json = r##"{"recenttracks": {"track": {
            "artist": {"url": "https://www.last.fm/music/Cher", "name": "Cher", "image": [], "mbid": ""},
            "loved": "1", "name": "Believe", "date": {"uts": "1", "#text": "x"}
        }}}"##;
        let response: RecentTracksResponse = serde_json::from_str(json).expect("Should parse extended");
        let track = &response.recent_tracks.track[0];
        assert!(track.loved);
        assert_eq!(track.artist.display_name(), "Cher");
    }

    #[test]
    fn test_parse_user_info() {
        let json = r##"{"user": {
            "name": "rj", "realname": "Richard Jones", "url": "https://www.last.fm/user/RJ",
            "country": "United Kingdom", "age": "0", "gender": "n", "subscriber": "1",
            "playcount": "150316", "playlists": "0", "type": "alum",
            "image": [{"size": "small", "#text": "s.png"}],
            "registered": {"unixtime": "1037793040", "#text": 1037793040}
        }}"##;
        let response: UserInfoResponse = serde_json::from_str(json).expect("Should parse user info");
        let user = response.user;
        assert!(user.subscriber);
        assert_eq!(user.playcount, 150_316);
        assert_eq!(user.kind, "alum");
        assert_eq!(user.registered.unixtime, 1_037_793_040);
    }

    #[test]
    fn test_parse_weekly_track_chart_xml() {
        let xml = r#"<lfm status="ok">
            <weeklytrackchart user="RJ" from="1108296000" to="1108900800">
                <track rank="1">
                    <artist mbid="153c">Soundgarden</artist>
                    <name>Outshined</name>
                    <mbid/>
                    <playcount>12</playcount>
                    <url>u</url>
                </track>
            </weeklytrackchart>
        </lfm>"#;
        let response: WeeklyTrackChartResponse = decode_body(None, xml.as_bytes()).unwrap().unwrap();
        let chart = response.chart;
        assert_eq!(chart.attr.user, "RJ");
        assert_eq!(chart.attr.from, 1_108_296_000);
        assert_eq!(chart.track[0].artist.display_name(), "Soundgarden");
        assert_eq!(chart.track[0].artist.mbid, "153c");
        assert_eq!(chart.track[0].playcount, 12);
        assert_eq!(chart.track[0].attr.rank, 1);
    }

    #[test]
    fn test_parse_personal_tags_artists() {
        let json = r#"{"taggings": {
            "artists": {"artist": [{"name": "Soundgarden", "mbid": "153c", "url": "s"}]},
            "@attr": {"user": "rj", "tag": "grunge", "page": "1", "perPage": "50", "totalPages": "1", "total": "1"}
        }}"#;
        let response: PersonalTagsResponse = serde_json::from_str(json).expect("Should parse taggings");
        assert_eq!(response.taggings.artists.artist[0].name, "Soundgarden");
        assert!(response.taggings.tracks.track.is_empty());
        assert_eq!(response.taggings.attr.tag, "grunge");
    }
}
