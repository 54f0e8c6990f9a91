//! Commands that write to the user's profile. All need a stored session.

use anyhow::bail;
use tokio::runtime::Runtime;

use lastfm_client::{Client, Scrobble};

use super::print_json;

fn require_session(client: &Client) -> anyhow::Result<()> {
    if !client.is_authenticated() {
        bail!("Not logged in. Run `lastfm login <username>` first.");
    }
    Ok(())
}

pub fn cmd_now_playing(
    rt: &Runtime,
    client: &Client,
    artist: &str,
    track: &str,
    album: Option<&str>,
) -> anyhow::Result<()> {
    require_session(client)?;
    let mut scrobble = Scrobble::new(artist, track, 0);
    if let Some(album) = album {
        scrobble = scrobble.album(album);
    }
    let playing = rt.block_on(client.track("", false).update_now_playing(&scrobble))?;
    print_json(&playing)
}

pub fn cmd_scrobble(
    rt: &Runtime,
    client: &Client,
    artist: &str,
    track: &str,
    album: Option<&str>,
    timestamp: Option<i64>,
    duration: Option<u32>,
) -> anyhow::Result<()> {
    require_session(client)?;
    let timestamp = timestamp.unwrap_or_else(|| chrono::Utc::now().timestamp());
    let mut scrobble = Scrobble::new(artist, track, timestamp);
    if let Some(album) = album {
        scrobble = scrobble.album(album);
    }
    if let Some(duration) = duration {
        scrobble = scrobble.duration(duration);
    }

    let result = rt.block_on(client.track("", false).scrobble(&[scrobble]))?;
    if result.attr.ignored > 0 {
        for ignored in result.scrobble.iter().filter(|s| s.ignored_message.code != 0) {
            eprintln!("Ignored: {}", ignored.ignored_message.text);
        }
    }
    print_json(&result)
}

pub fn cmd_love(rt: &Runtime, client: &Client, artist: &str, track: &str) -> anyhow::Result<()> {
    require_session(client)?;
    rt.block_on(client.track("", false).love(artist, track))?;
    println!("✓ Loved {artist} - {track}");
    Ok(())
}

pub fn cmd_unlove(rt: &Runtime, client: &Client, artist: &str, track: &str) -> anyhow::Result<()> {
    require_session(client)?;
    rt.block_on(client.track("", false).unlove(artist, track))?;
    println!("✓ Unloved {artist} - {track}");
    Ok(())
}
