//! Configuration module
//!
//! Handles CLI configuration: API endpoint and credentials.

use bitcodin_client::BitcodinClient;

/// CLI configuration
#[derive(Clone)]
pub struct Config {
    /// Base URL of the bitcodin API
    pub api_url: String,
    /// API key sent with every request
    pub api_key: String,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_key.trim().is_empty() {
            anyhow::bail!("api key cannot be empty");
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            anyhow::bail!("api url must start with http:// or https://");
        }

        Ok(())
    }

    /// Client for the configured endpoint
    pub fn client(&self) -> BitcodinClient {
        BitcodinClient::with_base_url(&self.api_url, &self.api_key)
    }
}
