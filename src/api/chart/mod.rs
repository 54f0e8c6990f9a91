//! `chart.*` methods: global popularity charts.

pub mod dto;

use crate::api::paged;
use crate::client::Client;
use crate::error::Result;
use crate::request::Request;

use dto::{
    ChartArtists, ChartTags, ChartTopArtistsResponse, ChartTopTagsResponse,
    ChartTopTracksResponse, ChartTracks,
};

pub struct Chart<'a> {
    client: &'a Client,
}

impl<'a> Chart<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn get_top_artists(&self, page: u32) -> Result<ChartArtists> {
        let response: ChartTopArtistsResponse = self
            .client
            .fetch(Request::get("chart.gettopartists", paged(self.client, page)))
            .await?;
        Ok(response.artists)
    }

    pub async fn get_top_tags(&self, page: u32) -> Result<ChartTags> {
        let response: ChartTopTagsResponse = self
            .client
            .fetch(Request::get("chart.gettoptags", paged(self.client, page)))
            .await?;
        Ok(response.tags)
    }

    pub async fn get_top_tracks(&self, page: u32) -> Result<ChartTracks> {
        let response: ChartTopTracksResponse = self
            .client
            .fetch(Request::get("chart.gettoptracks", paged(self.client, page)))
            .await?;
        Ok(response.tracks)
    }
}
