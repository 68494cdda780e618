// src/session.rs
use crate::error::Result;
use crate::types::{Config, SubScoutError};
use reqwest::Client;
use std::time::Duration;

/// Shared HTTP client for passive sources.
#[derive(Clone)]
pub struct Session {
    pub client: Client,
}

impl Session {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.http_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .deflate(true)
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| SubScoutError::Network(format!("failed to build HTTP client: {}", e)))?;

        Ok(Session { client })
    }

    pub async fn get(&self, url: &str) -> Result<reqwest::Response> {
        self.client
            .get(url)
            .send()
            .await
            .map_err(|e| SubScoutError::Network(e.to_string()))
    }
}
