//! Server config loader (strict parsing + env overrides).
//!
//! Option labels and the title resolve environment-first: a set, non-empty
//! `VOTE1VALUE`/`VOTE2VALUE`/`TITLE` wins over the config file, and a value
//! missing from both is a startup error. The `showhost` flag is file-only
//! and swaps the title for the machine's host name, so replicas behind a
//! load balancer can be told apart.

pub mod schema;

use std::env;
use std::fs;
use std::net::SocketAddr;
use std::time::Duration;

use pollbox_core::error::{PollError, Result};
use pollbox_core::Poll;
use tracing::warn;

pub use schema::{FileConfig, PollSection, ServerSection};

/// Immutable runtime configuration, fully resolved at startup.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub listen: SocketAddr,
    pub redis_url: String,
    pub store_timeout: Duration,
    pub poll: Poll,
}

/// Load the config file (tolerating its absence) and resolve against the
/// process environment.
pub fn load(path: &str) -> Result<ResolvedConfig> {
    let file = match fs::read_to_string(path) {
        Ok(s) => parse(&s)?,
        Err(e) => {
            warn!(path, "config file not readable ({e}), relying on environment");
            FileConfig::empty()
        }
    };
    resolve(file, |key| env::var(key).ok())
}

/// Parse and validate config file contents.
pub fn parse(s: &str) -> Result<FileConfig> {
    let cfg: FileConfig = serde_yaml::from_str(s)
        .map_err(|e| PollError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Resolve a parsed file against an environment lookup. The lookup is a
/// parameter so tests do not have to mutate process-global env vars.
pub fn resolve(file: FileConfig, env_var: impl Fn(&str) -> Option<String>) -> Result<ResolvedConfig> {
    let option_a = resolve_field("VOTE1VALUE", file.poll.vote1value, &env_var)?;
    let option_b = resolve_field("VOTE2VALUE", file.poll.vote2value, &env_var)?;
    let mut title = resolve_field("TITLE", file.poll.title, &env_var)?;

    if file.poll.showhost {
        title = host_name()?;
    }

    let listen: SocketAddr = file
        .server
        .listen
        .parse()
        .map_err(|e| PollError::Config(format!("server.listen is not a valid address: {e}")))?;

    Ok(ResolvedConfig {
        listen,
        redis_url: file.server.redis_url,
        store_timeout: Duration::from_millis(file.server.store_timeout_ms),
        poll: Poll::new(option_a, option_b, title)?,
    })
}

fn resolve_field(
    env_key: &str,
    file_value: Option<String>,
    env_var: impl Fn(&str) -> Option<String>,
) -> Result<String> {
    match env_var(env_key) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => file_value.ok_or_else(|| {
            PollError::Config(format!(
                "{env_key} is set in neither the environment nor the config file"
            ))
        }),
    }
}

/// Network host name of this machine.
pub fn host_name() -> Result<String> {
    hostname::get()
        .map_err(|e| PollError::Config(format!("host name lookup failed: {e}")))?
        .into_string()
        .map_err(|_| PollError::Config("host name is not valid UTF-8".into()))
}
