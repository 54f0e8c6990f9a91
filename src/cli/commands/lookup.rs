//! Read-only lookup commands. Each prints the decoded response as JSON.

use tokio::runtime::Runtime;

use lastfm_client::{Client, Period};

use super::print_json;

pub fn cmd_album_info(
    rt: &Runtime,
    client: &Client,
    artist: &str,
    album: &str,
    user: &str,
    lang: Option<&str>,
) -> anyhow::Result<()> {
    let info = rt.block_on(client.album(user, true).get_info(artist, album, "", lang))?;
    print_json(&info)
}

pub fn cmd_artist_info(
    rt: &Runtime,
    client: &Client,
    artist: &str,
    user: &str,
    lang: Option<&str>,
) -> anyhow::Result<()> {
    let info = rt.block_on(client.artist(user, true).get_info(artist, "", lang))?;
    print_json(&info)
}

pub fn cmd_track_info(
    rt: &Runtime,
    client: &Client,
    artist: &str,
    track: &str,
    user: &str,
) -> anyhow::Result<()> {
    let info = rt.block_on(client.track(user, true).get_info(artist, track, ""))?;
    print_json(&info)
}

pub fn cmd_recent(
    rt: &Runtime,
    client: &Client,
    user: &str,
    extended: bool,
    page: u32,
) -> anyhow::Result<()> {
    let recent = rt.block_on(client.user(user).get_recent_tracks(extended, page))?;
    if let Some(playing) = recent.track.iter().find(|t| t.is_now_playing()) {
        tracing::info!(
            "{} is listening to {} - {}",
            user,
            playing.artist.display_name(),
            playing.name
        );
    }
    print_json(&recent)
}

pub fn cmd_top_artists(
    rt: &Runtime,
    client: &Client,
    user: &str,
    period: Period,
    page: u32,
) -> anyhow::Result<()> {
    let top = rt.block_on(client.user(user).get_top_artists(period, page))?;
    print_json(&top)
}
