//! `lastfm` - command-line client for the Last.fm web service.
//!
//! Looks up metadata and charts, scrobbles, and manages the stored session.
//! Run `lastfm --help` for the list of commands.

mod cli;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging; stdout is reserved for command output
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(
            EnvFilter::from_default_env()
                .add_directive("lastfm_client=info".parse()?)
                .add_directive("lastfm=info".parse()?),
        )
        .init();

    cli::run_command(&args)
}
