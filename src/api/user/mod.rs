//! `user.*` methods: profile, listening history and charts.

pub mod dto;

use std::fmt;

use crate::api::common::{Period, WeeklyChartList, WeeklyChartListResponse};
use crate::api::paged;
use crate::client::Client;
use crate::error::Result;
use crate::request::{Params, Request};

use dto::{
    Friends, FriendsResponse, LovedTracks, LovedTracksResponse, PersonalTagsResponse,
    RecentTracks, RecentTracksResponse, Taggings, TopAlbums, TopAlbumsResponse, TopArtists,
    TopArtistsResponse, TopTracks, TopTracksResponse, UserInfo, UserInfoResponse, UserTopTags,
    UserTopTagsResponse, WeeklyAlbumChart, WeeklyAlbumChartResponse, WeeklyArtistChart,
    WeeklyArtistChartResponse, WeeklyTrackChart, WeeklyTrackChartResponse,
};

/// What kind of item a personal tag was applied to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaggingType {
    Artist,
    Album,
    Track,
}

impl TaggingType {
    pub fn as_str(self) -> &'static str {
        match self {
            TaggingType::Artist => "artist",
            TaggingType::Album => "album",
            TaggingType::Track => "track",
        }
    }
}

impl fmt::Display for TaggingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TaggingType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "artist" => Ok(TaggingType::Artist),
            "album" => Ok(TaggingType::Album),
            "track" => Ok(TaggingType::Track),
            other => Err(format!("unknown tagging type {other:?} (expected artist, album or track)")),
        }
    }
}

/// User methods for one user.
pub struct User<'a> {
    client: &'a Client,
    pub username: String,
}

impl<'a> User<'a> {
    pub fn new(client: &'a Client, username: impl Into<String>) -> Self {
        Self {
            client,
            username: username.into(),
        }
    }

    fn user_paged(&self, page: u32) -> Params {
        paged(self.client, page).with("user", self.username.as_str())
    }

    fn chart_range(&self, from: i64, to: i64) -> Params {
        Params::new()
            .with("from", from.to_string())
            .with("to", to.to_string())
            .with("user", self.username.as_str())
    }

    pub async fn get_friends(&self, page: u32) -> Result<Friends> {
        let response: FriendsResponse = self
            .client
            .fetch(Request::get("user.getfriends", self.user_paged(page)))
            .await?;
        Ok(response.friends)
    }

    pub async fn get_info(&self) -> Result<UserInfo> {
        let params = Params::new().with("user", self.username.as_str());
        let response: UserInfoResponse = self
            .client
            .fetch(Request::get("user.getinfo", params))
            .await?;
        Ok(response.user)
    }

    pub async fn get_loved_tracks(&self, page: u32) -> Result<LovedTracks> {
        let response: LovedTracksResponse = self
            .client
            .fetch(Request::get("user.getlovedtracks", self.user_paged(page)))
            .await?;
        Ok(response.loved_tracks)
    }

    /// Items this user tagged with `tag`.
    pub async fn get_personal_tags(
        &self,
        tag: &str,
        tagging_type: TaggingType,
        page: u32,
    ) -> Result<Taggings> {
        let params = Params::new()
            .with("page", page.to_string())
            .with("tag", tag)
            .with("taggingtype", tagging_type.as_str())
            .with("user", self.username.as_str());
        let response: PersonalTagsResponse = self
            .client
            .fetch(Request::get("user.getpersonaltags", params))
            .await?;
        Ok(response.taggings)
    }

    /// Listening history, newest first. The first entry may be the track
    /// playing right now. `extended` adds loved flags and full artist info.
    pub async fn get_recent_tracks(&self, extended: bool, page: u32) -> Result<RecentTracks> {
        let params = self
            .user_paged(page)
            .with("extended", self.client.bool_signal(extended));
        let response: RecentTracksResponse = self
            .client
            .fetch(Request::get("user.getrecenttracks", params))
            .await?;
        Ok(response.recent_tracks)
    }

    pub async fn get_top_albums(&self, period: Period, page: u32) -> Result<TopAlbums> {
        let params = self.user_paged(page).with("period", period.as_str());
        let response: TopAlbumsResponse = self
            .client
            .fetch(Request::get("user.gettopalbums", params))
            .await?;
        Ok(response.top_albums)
    }

    pub async fn get_top_artists(&self, period: Period, page: u32) -> Result<TopArtists> {
        let params = self.user_paged(page).with("period", period.as_str());
        let response: TopArtistsResponse = self
            .client
            .fetch(Request::get("user.gettopartists", params))
            .await?;
        Ok(response.top_artists)
    }

    pub async fn get_top_tracks(&self, period: Period, page: u32) -> Result<TopTracks> {
        let params = self.user_paged(page).with("period", period.as_str());
        let response: TopTracksResponse = self
            .client
            .fetch(Request::get("user.gettoptracks", params))
            .await?;
        Ok(response.top_tracks)
    }

    pub async fn get_top_tags(&self) -> Result<UserTopTags> {
        let params = Params::new()
            .with("limit", self.client.limit())
            .with("user", self.username.as_str());
        let response: UserTopTagsResponse = self
            .client
            .fetch(Request::get("user.gettoptags", params))
            .await?;
        Ok(response.toptags)
    }

    /// Album chart for a range from [`get_weekly_chart_list`](Self::get_weekly_chart_list).
    pub async fn get_weekly_album_chart(&self, from: i64, to: i64) -> Result<WeeklyAlbumChart> {
        let response: WeeklyAlbumChartResponse = self
            .client
            .fetch(Request::get("user.getweeklyalbumchart", self.chart_range(from, to)))
            .await?;
        Ok(response.chart)
    }

    pub async fn get_weekly_artist_chart(&self, from: i64, to: i64) -> Result<WeeklyArtistChart> {
        let response: WeeklyArtistChartResponse = self
            .client
            .fetch(Request::get("user.getweeklyartistchart", self.chart_range(from, to)))
            .await?;
        Ok(response.chart)
    }

    pub async fn get_weekly_chart_list(&self) -> Result<WeeklyChartList> {
        let params = Params::new().with("user", self.username.as_str());
        let response: WeeklyChartListResponse = self
            .client
            .fetch(Request::get("user.getweeklychartlist", params))
            .await?;
        Ok(response.weekly_chart_list)
    }

    pub async fn get_weekly_track_chart(&self, from: i64, to: i64) -> Result<WeeklyTrackChart> {
        let response: WeeklyTrackChartResponse = self
            .client
            .fetch(Request::get("user.getweeklytrackchart", self.chart_range(from, to)))
            .await?;
        Ok(response.chart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{mock_client, only_request};
    use crate::transport::mocks::MockTransport;

    #[test]
    fn test_tagging_type_strings() {
        for t in [TaggingType::Artist, TaggingType::Album, TaggingType::Track] {
            assert_eq!(t.as_str().parse::<TaggingType>().unwrap(), t);
        }
        assert!("playlist".parse::<TaggingType>().is_err());
    }

    #[tokio::test]
    async fn test_recent_tracks_params() {
        let (client, mock) = mock_client(MockTransport::new().json(200, r#"{"recenttracks":{}}"#));
        client.set_limit(10);

        let recent = client.user("rj").get_recent_tracks(true, 2).await.unwrap();
        assert!(recent.track.is_empty());

        let request = only_request(&mock);
        assert_eq!(request.param("method"), Some("user.getrecenttracks"));
        assert_eq!(request.param("user"), Some("rj"));
        assert_eq!(request.param("extended"), Some("1"));
        assert_eq!(request.param("limit"), Some("10"));
        assert_eq!(request.param("page"), Some("2"));
    }

    #[tokio::test]
    async fn test_top_artists_sends_period() {
        let (client, mock) = mock_client(
            MockTransport::new().json(200, r#"{"topartists":{"artist":{"name":"Cher","playcount":"7","@attr":{"rank":"1"}}}}"#),
        );
        let top = client
            .user("rj")
            .get_top_artists(Period::ThreeMonths, 1)
            .await
            .unwrap();
        assert_eq!(top.artist[0].playcount, 7);

        let request = only_request(&mock);
        assert_eq!(request.param("period"), Some("3month"));
    }

    #[tokio::test]
    async fn test_personal_tags_is_not_limited() {
        let (client, mock) = mock_client(MockTransport::new().json(200, r#"{"taggings":{}}"#));
        client
            .user("rj")
            .get_personal_tags("grunge", TaggingType::Album, 1)
            .await
            .unwrap();

        let request = only_request(&mock);
        assert_eq!(request.param("taggingtype"), Some("album"));
        assert_eq!(request.param("tag"), Some("grunge"));
        assert_eq!(request.param("limit"), None);
    }

    #[tokio::test]
    async fn test_weekly_chart_range() {
        let (client, mock) = mock_client(MockTransport::new().json(200, r#"{"weeklyalbumchart":{}}"#));
        client
            .user("rj")
            .get_weekly_album_chart(1_108_296_000, 1_108_900_800)
            .await
            .unwrap();

        let request = only_request(&mock);
        assert_eq!(request.param("method"), Some("user.getweeklyalbumchart"));
        assert_eq!(request.param("from"), Some("1108296000"));
        assert_eq!(request.param("to"), Some("1108900800"));
    }

    #[tokio::test]
    async fn test_top_tags_sends_limit_without_page() {
        let (client, mock) = mock_client(MockTransport::new().json(200, r#"{"toptags":{}}"#));
        client.user("rj").get_top_tags().await.unwrap();

        let request = only_request(&mock);
        assert_eq!(request.param("limit"), Some("50"));
        assert_eq!(request.param("page"), None);
    }

    #[tokio::test]
    async fn test_info_and_friends() {
        let (client, mock) = mock_client(
            MockTransport::new()
                .json(200, r#"{"user":{"name":"rj","playcount":"5"}}"#)
                .json(200, r#"{"friends":{"user":[{"name":"eartle"},{"name":"mxcl"}]}}"#),
        );
        let user = client.user("rj");
        assert_eq!(user.get_info().await.unwrap().playcount, 5);
        assert_eq!(user.get_friends(1).await.unwrap().user.len(), 2);

        let requests = mock.requests();
        assert_eq!(requests[0].param("method"), Some("user.getinfo"));
        assert_eq!(requests[1].param("method"), Some("user.getfriends"));
    }
}
