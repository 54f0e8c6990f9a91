//! `tag.*` methods.

pub mod dto;

use crate::api::common::{WeeklyChartList, WeeklyChartListResponse};
use crate::api::{DEFAULT_LANG, paged};
use crate::client::Client;
use crate::error::Result;
use crate::request::{Params, Request};

use dto::{
    SimilarTags, TagAlbums, TagArtists, TagInfo, TagInfoResponse, TagSimilarResponse,
    TagTopAlbumsResponse, TagTopArtistsResponse, TagTopTagsResponse, TagTopTracksResponse,
    TagTracks, TopTags,
};

/// Tag methods. Named `TagApi` to keep [`crate::api::Tag`] for the tag
/// entries found in responses.
pub struct TagApi<'a> {
    client: &'a Client,
}

impl<'a> TagApi<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Tag metadata with its wiki in `lang` (default `en`).
    pub async fn get_info(&self, tag: &str, lang: Option<&str>) -> Result<TagInfo> {
        let params = Params::new()
            .with("lang", lang.unwrap_or(DEFAULT_LANG))
            .with("tag", tag);
        let response: TagInfoResponse = self
            .client
            .fetch(Request::get("tag.getinfo", params))
            .await?;
        Ok(response.tag)
    }

    pub async fn get_similar(&self, tag: &str) -> Result<SimilarTags> {
        let params = Params::new().with("tag", tag);
        let response: TagSimilarResponse = self
            .client
            .fetch(Request::get("tag.getsimilar", params))
            .await?;
        Ok(response.similar_tags)
    }

    pub async fn get_top_albums(&self, tag: &str, page: u32) -> Result<TagAlbums> {
        let params = paged(self.client, page).with("tag", tag);
        let response: TagTopAlbumsResponse = self
            .client
            .fetch(Request::get("tag.gettopalbums", params))
            .await?;
        Ok(response.albums)
    }

    pub async fn get_top_artists(&self, tag: &str, page: u32) -> Result<TagArtists> {
        let params = paged(self.client, page).with("tag", tag);
        let response: TagTopArtistsResponse = self
            .client
            .fetch(Request::get("tag.gettopartists", params))
            .await?;
        Ok(response.top_artists)
    }

    /// Most used tags across the service.
    pub async fn get_top_tags(&self) -> Result<TopTags> {
        let response: TagTopTagsResponse = self
            .client
            .fetch(Request::get("tag.gettoptags", Params::new()))
            .await?;
        Ok(response.toptags)
    }

    pub async fn get_top_tracks(&self, tag: &str, page: u32) -> Result<TagTracks> {
        let params = paged(self.client, page).with("tag", tag);
        let response: TagTopTracksResponse = self
            .client
            .fetch(Request::get("tag.gettoptracks", params))
            .await?;
        Ok(response.tracks)
    }

    /// Date ranges for which weekly tag charts exist.
    pub async fn get_weekly_chart_list(&self, tag: &str) -> Result<WeeklyChartList> {
        let params = Params::new().with("tag", tag);
        let response: WeeklyChartListResponse = self
            .client
            .fetch(Request::get("tag.getweeklychartlist", params))
            .await?;
        Ok(response.weekly_chart_list)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{mock_client, only_request};
    use crate::transport::mocks::MockTransport;

    #[tokio::test]
    async fn test_get_info_default_lang() {
        let (client, mock) = mock_client(MockTransport::new().json(200, r#"{"tag":{"name":"disco"}}"#));
        let info = client.tag().get_info("disco", None).await.unwrap();
        assert_eq!(info.name, "disco");

        let request = only_request(&mock);
        assert_eq!(request.param("method"), Some("tag.getinfo"));
        assert_eq!(request.param("lang"), Some("en"));
        assert_eq!(request.param("tag"), Some("disco"));
    }

    #[tokio::test]
    async fn test_get_top_tags_has_no_call_params() {
        let (client, mock) = mock_client(MockTransport::new().json(200, r#"{"toptags":{}}"#));
        client.tag().get_top_tags().await.unwrap();

        let request = only_request(&mock);
        let keys: Vec<&str> = request.params.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["method", "api_key", "format"]);
    }

    #[tokio::test]
    async fn test_paged_methods() {
        let (client, mock) = mock_client(
            MockTransport::new()
                .json(200, r#"{"albums":{}}"#)
                .json(200, r#"{"topartists":{}}"#)
                .json(200, r#"{"tracks":{}}"#),
        );
        client.set_limit(20);
        let tag = client.tag();
        tag.get_top_albums("disco", 1).await.unwrap();
        tag.get_top_artists("disco", 2).await.unwrap();
        tag.get_top_tracks("disco", 3).await.unwrap();

        let requests = mock.requests();
        let methods: Vec<_> = requests.iter().filter_map(|r| r.param("method")).collect();
        assert_eq!(methods, ["tag.gettopalbums", "tag.gettopartists", "tag.gettoptracks"]);
        assert!(requests.iter().all(|r| r.param("limit") == Some("20")));
        assert_eq!(requests[2].param("page"), Some("3"));
    }

    #[tokio::test]
    async fn test_weekly_chart_list() {
        let (client, _) = mock_client(MockTransport::new().json(
            200,
            r##"{"weeklychartlist":{"chart":{"#text":"","from":"1","to":"2"},"@attr":{"tag":"disco"}}}"##,
        ));
        let list = client.tag().get_weekly_chart_list("disco").await.unwrap();
        assert_eq!(list.chart.len(), 1);
        assert_eq!(list.chart[0].from, 1);
    }
}
