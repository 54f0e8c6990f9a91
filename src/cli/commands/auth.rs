//! Session and signing commands.

use tokio::runtime::Runtime;

use lastfm_client::config::{self, Config};
use lastfm_client::sign;

use super::{Cli, api_key, api_secret, build_client};

/// Log in and persist the session key along with the credentials used.
pub fn cmd_login(
    rt: &Runtime,
    cli: &Cli,
    config: &mut Config,
    username: &str,
    password: &str,
) -> anyhow::Result<()> {
    let client = build_client(cli, config)?;
    let session = rt.block_on(client.login(username, password))?;

    config.credentials.api_key = Some(api_key(cli, config)?);
    config.credentials.api_secret = Some(api_secret(cli, config)?);
    config.credentials.session_key = Some(session.key.clone());
    config::save(config)?;

    println!("✓ Logged in as {}", session.name);
    if session.subscriber {
        println!("  Subscriber account");
    }
    Ok(())
}

/// Drop the stored session key. Nothing is sent to Last.fm.
pub fn cmd_logout(config: &mut Config) -> anyhow::Result<()> {
    if config.credentials.session_key.take().is_none() {
        println!("Not logged in");
        return Ok(());
    }
    config::save(config)?;
    println!("✓ Logged out");
    Ok(())
}

/// Print the signature for `key=value` pairs without sending anything.
pub fn cmd_sign(cli: &Cli, config: &Config, params: &[String]) -> anyhow::Result<()> {
    let secret = api_secret(cli, config)?;
    let pairs = params
        .iter()
        .map(|p| parse_pair(p))
        .collect::<anyhow::Result<Vec<_>>>()?;
    println!("{}", sign(pairs, &secret));
    Ok(())
}

fn parse_pair(param: &str) -> anyhow::Result<(&str, &str)> {
    match param.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key, value)),
        _ => anyhow::bail!("expected key=value, got {param:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair() {
        assert_eq!(parse_pair("artist=Cher").unwrap(), ("artist", "Cher"));
        assert_eq!(parse_pair("mbid=").unwrap(), ("mbid", ""));
        assert_eq!(parse_pair("q=a=b").unwrap(), ("q", "a=b"));
        assert!(parse_pair("artist").is_err());
        assert!(parse_pair("=Cher").is_err());
    }
}
