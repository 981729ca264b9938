use pollbox_core::error::{PollError, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub poll: PollSection,
}

impl FileConfig {
    /// Stand-in for a missing config file: defaults only, every poll field
    /// left to the environment.
    pub fn empty() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            poll: PollSection::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(PollError::Config(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        self.server.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_redis_url")]
    pub redis_url: String,

    #[serde(default = "default_store_timeout_ms")]
    pub store_timeout_ms: u64,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            redis_url: default_redis_url(),
            store_timeout_ms: default_store_timeout_ms(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        if !(100..=60000).contains(&self.store_timeout_ms) {
            return Err(PollError::Config(
                "server.store_timeout_ms must be between 100 and 60000".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_redis_url() -> String {
    "redis://127.0.0.1:6379".into()
}
fn default_store_timeout_ms() -> u64 {
    2000
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct PollSection {
    #[serde(default)]
    pub vote1value: Option<String>,

    #[serde(default)]
    pub vote2value: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub showhost: bool,
}
