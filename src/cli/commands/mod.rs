//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `auth`: login, logout and offline signing
//! - `lookup`: read-only queries (album, artist, track, user charts)
//! - `scrobble`: now playing, scrobbles and loved tracks

mod auth;
mod lookup;
mod scrobble;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tokio::runtime::Runtime;

use lastfm_client::config::{self, Config};
use lastfm_client::{Client, Period};

pub use auth::{cmd_login, cmd_logout, cmd_sign};
pub use lookup::{cmd_album_info, cmd_artist_info, cmd_recent, cmd_top_artists, cmd_track_info};
pub use scrobble::{cmd_love, cmd_now_playing, cmd_scrobble, cmd_unlove};

/// Last.fm command-line client
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API key (or set LASTFM_API_KEY env var, or store it in the config file)
    #[arg(long, env = "LASTFM_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Shared secret (or set LASTFM_API_SECRET env var)
    #[arg(long, env = "LASTFM_API_SECRET", global = true, hide_env_values = true)]
    pub api_secret: Option<String>,

    /// User-Agent header to send
    #[arg(long, global = true)]
    pub user_agent: Option<String>,

    /// Page size for paged calls (<= 0 means 50)
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub limit: Option<i64>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Log in and store the session key in the config file
    Login {
        username: String,
        /// Password (or set LASTFM_PASSWORD env var)
        #[arg(long, env = "LASTFM_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session key
    Logout,
    /// Print the api_sig for a set of key=value parameters
    Sign {
        /// Parameters as key=value
        #[arg(required = true)]
        params: Vec<String>,
    },
    /// Show album metadata
    AlbumInfo {
        artist: String,
        album: String,
        /// Include this user's playcount
        #[arg(long, default_value = "")]
        user: String,
        /// ISO 639 alpha-2 language for the wiki
        #[arg(long)]
        lang: Option<String>,
    },
    /// Show artist metadata
    ArtistInfo {
        artist: String,
        #[arg(long, default_value = "")]
        user: String,
        #[arg(long)]
        lang: Option<String>,
    },
    /// Show track metadata
    TrackInfo {
        artist: String,
        track: String,
        #[arg(long, default_value = "")]
        user: String,
    },
    /// Show a user's recent tracks
    Recent {
        user: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Include loved flags and full artist info
        #[arg(long)]
        extended: bool,
    },
    /// Show a user's top artists
    TopArtists {
        user: String,
        /// overall, 7day, 1month, 3month, 6month or 12month
        #[arg(long, default_value = "overall")]
        period: Period,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Tell Last.fm what is playing now
    NowPlaying {
        artist: String,
        track: String,
        #[arg(long)]
        album: Option<String>,
    },
    /// Scrobble one play
    Scrobble {
        artist: String,
        track: String,
        #[arg(long)]
        album: Option<String>,
        /// Unix time the track started (default: now)
        #[arg(long)]
        timestamp: Option<i64>,
        /// Track length in seconds
        #[arg(long)]
        duration: Option<u32>,
    },
    /// Love a track
    Love { artist: String, track: String },
    /// Remove the loved mark from a track
    Unlove { artist: String, track: String },
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let rt = Runtime::new()?;
    let mut config = config::load();

    match &cli.command {
        Commands::Login { username, password } => {
            cmd_login(&rt, cli, &mut config, username, password)
        }
        Commands::Logout => cmd_logout(&mut config),
        Commands::Sign { params } => cmd_sign(cli, &config, params),
        Commands::AlbumInfo {
            artist,
            album,
            user,
            lang,
        } => cmd_album_info(&rt, &build_client(cli, &config)?, artist, album, user, lang.as_deref()),
        Commands::ArtistInfo { artist, user, lang } => {
            cmd_artist_info(&rt, &build_client(cli, &config)?, artist, user, lang.as_deref())
        }
        Commands::TrackInfo {
            artist,
            track,
            user,
        } => cmd_track_info(&rt, &build_client(cli, &config)?, artist, track, user),
        Commands::Recent {
            user,
            page,
            extended,
        } => cmd_recent(&rt, &build_client(cli, &config)?, user, *extended, *page),
        Commands::TopArtists { user, period, page } => {
            cmd_top_artists(&rt, &build_client(cli, &config)?, user, *period, *page)
        }
        Commands::NowPlaying {
            artist,
            track,
            album,
        } => cmd_now_playing(&rt, &build_client(cli, &config)?, artist, track, album.as_deref()),
        Commands::Scrobble {
            artist,
            track,
            album,
            timestamp,
            duration,
        } => cmd_scrobble(
            &rt,
            &build_client(cli, &config)?,
            artist,
            track,
            album.as_deref(),
            *timestamp,
            *duration,
        ),
        Commands::Love { artist, track } => {
            cmd_love(&rt, &build_client(cli, &config)?, artist, track)
        }
        Commands::Unlove { artist, track } => {
            cmd_unlove(&rt, &build_client(cli, &config)?, artist, track)
        }
    }
}

// ============================================================================
// Shared helper functions
// ============================================================================

/// API key from the command line or environment, then the config file.
pub(crate) fn api_key(cli: &Cli, config: &Config) -> anyhow::Result<String> {
    cli.api_key
        .clone()
        .or_else(|| config.credentials.api_key.clone())
        .context("API key required: use --api-key, set LASTFM_API_KEY, or add it to the config file")
}

/// Shared secret from the command line or environment, then the config file.
pub(crate) fn api_secret(cli: &Cli, config: &Config) -> anyhow::Result<String> {
    cli.api_secret
        .clone()
        .or_else(|| config.credentials.api_secret.clone())
        .context("API secret required: use --api-secret, set LASTFM_API_SECRET, or add it to the config file")
}

/// Build a client from credentials and settings, command-line values first.
pub(crate) fn build_client(cli: &Cli, config: &Config) -> anyhow::Result<Client> {
    let client = Client::new(api_key(cli, config)?, api_secret(cli, config)?)?;
    config.apply(&client);
    if let Some(limit) = cli.limit {
        client.set_limit(limit);
    }
    if let Some(user_agent) = &cli.user_agent {
        client.set_user_agent(user_agent.as_str());
    }
    Ok(client)
}

/// Print a response as pretty JSON.
pub(crate) fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_top_artists_period() {
        let cli = Cli::try_parse_from(["lastfm", "top-artists", "rj", "--period", "7day"]).unwrap();
        match cli.command {
            Commands::TopArtists { user, period, page } => {
                assert_eq!(user, "rj");
                assert_eq!(period, Period::Week);
                assert_eq!(page, 1);
            }
            _ => panic!("expected top-artists"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_period() {
        assert!(Cli::try_parse_from(["lastfm", "top-artists", "rj", "--period", "fortnight"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "lastfm", "recent", "rj", "--limit", "-1", "--user-agent", "test/1.0",
        ])
        .unwrap();
        assert_eq!(cli.limit, Some(-1));
        assert_eq!(cli.user_agent.as_deref(), Some("test/1.0"));
    }

    #[test]
    fn test_command_line_key_wins_over_config() {
        let cli = Cli::try_parse_from(["lastfm", "--api-key", "from-cli", "logout"]).unwrap();
        let mut config = Config::default();
        config.credentials.api_key = Some("from-config".to_string());
        assert_eq!(api_key(&cli, &config).unwrap(), "from-cli");
    }

    #[test]
    fn test_build_client_applies_overrides() {
        let cli = Cli::try_parse_from([
            "lastfm", "--api-key", "k", "--api-secret", "s", "--limit", "10", "logout",
        ])
        .unwrap();
        let mut config = Config::default();
        config.credentials.session_key = Some("stored".to_string());
        config.client.limit = 25;

        let client = build_client(&cli, &config).unwrap();
        assert_eq!(client.limit(), "10");
        assert_eq!(client.session_key(), "stored");
    }
}
