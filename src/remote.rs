//! Async client for the story server's JSON API.

use anyhow::Context;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::model::{LockGrant, NewParagraph, ParagraphDetail, StoryId, StorySnapshot, Vote};

mod error;
pub use self::error::ApiError;

mod http_client;

mod types;
use self::types::decode_envelope;

mod operations;

#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("storyteller")
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
