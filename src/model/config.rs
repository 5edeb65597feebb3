use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::ids::StoryId;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_story() -> StoryId {
    StoryId(1)
}

fn default_poll_interval_ms() -> u64 {
    5000
}

fn default_retry_interval_ms() -> u64 {
    2500
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Story opened by `watch` when no location is given.
    #[serde(default = "default_story")]
    pub story: StoryId,

    /// Delay before the next poll after a successful one.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Delay before the next poll after a failed one.
    #[serde(default = "default_retry_interval_ms")]
    pub retry_interval_ms: u64,

    /// Submit with `add_paragraph` instead of lock + suggest.
    #[serde(default)]
    pub linear: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            story: default_story(),
            poll_interval_ms: default_poll_interval_ms(),
            retry_interval_ms: default_retry_interval_ms(),
            linear: false,
        }
    }
}

impl ClientConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let cfg: ClientConfig = serde_json::from_str(&raw)
            .with_context(|| format!("parse config {}", path.display()))?;
        if cfg.poll_interval_ms == 0 || cfg.retry_interval_ms == 0 {
            anyhow::bail!("poll intervals must be greater than zero");
        }
        Ok(cfg)
    }

    pub fn intervals(&self) -> PollIntervals {
        PollIntervals {
            success: Duration::from_millis(self.poll_interval_ms),
            retry: Duration::from_millis(self.retry_interval_ms),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollIntervals {
    pub success: Duration,
    pub retry: Duration,
}

impl Default for PollIntervals {
    fn default() -> Self {
        ClientConfig::default().intervals()
    }
}

#[cfg(test)]
#[path = "../tests/model/config_tests.rs"]
mod tests;
