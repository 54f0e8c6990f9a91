//! Command-line interface for the Last.fm client.
//!
//! Credentials come from flags, environment variables or the config file;
//! the session key from `login` is stored in the config file.

mod commands;

pub use commands::{Cli, run_command};
