//! Bitcodin HTTP Client
//!
//! A small, type-safe client for the bitcodin encoding API.
//!
//! The client maps each API call to one HTTP request and one typed response.
//! Failures are never retried: a non-2xx status becomes a [`ClientError`]
//! variant matching the HTTP semantics (bad request, not found, ...), and
//! bubbles straight to the caller.
//!
//! # Example
//!
//! ```no_run
//! use bitcodin_client::BitcodinClient;
//! use bitcodin_core::dto::input::CreateInput;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = BitcodinClient::new("my-api-key");
//!
//!     let input = client
//!         .create_input(CreateInput::url("http://example.com/video.mkv"))
//!         .await?;
//!
//!     println!("Created input: {}", input.input_id);
//!     Ok(())
//! }
//! ```

pub mod error;
mod encoding_profiles;
mod inputs;
mod jobs;
mod outputs;
pub mod poll;
mod transfers;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use poll::PollOptions;

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Production API endpoint
pub const DEFAULT_BASE_URL: &str = "https://portal.bitcodin.com/api";

/// Header carrying the API key on every request
pub const API_KEY_HEADER: &str = "bitcodin-api-key";

/// HTTP client for the bitcodin API
///
/// Methods are grouped by resource:
/// - Inputs (create, get, list, delete)
/// - Encoding profiles (create, get, delete)
/// - Jobs (create, get, status, list, delete) and status polling
/// - Outputs (create, get, delete)
/// - Transfers (transfer a finished job, list transfers)
#[derive(Clone)]
pub struct BitcodinClient {
    /// Base URL of the API (e.g., "https://portal.bitcodin.com/api")
    base_url: String,
    /// API key sent in the `bitcodin-api-key` header
    api_key: String,
    /// HTTP client instance
    client: Client,
}

impl std::fmt::Debug for BitcodinClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitcodinClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl BitcodinClient {
    /// Create a client for the production endpoint
    ///
    /// # Example
    /// ```
    /// use bitcodin_client::BitcodinClient;
    ///
    /// let client = BitcodinClient::new("my-api-key");
    /// assert_eq!(client.base_url(), "https://portal.bitcodin.com/api");
    /// ```
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Create a client for a different endpoint (staging, mock server, ...)
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the API, without trailing slash
    /// * `api_key` - The API key
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_client(base_url, api_key, Client::new())
    }

    /// Create a client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use bitcodin_client::BitcodinClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = BitcodinClient::with_client("http://localhost:8080", "key", http_client);
    /// ```
    pub fn with_client(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client,
        }
    }

    /// Get the base URL of the API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Start an authenticated request against `path`
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!("bitcodin request: {} {}", method, path);
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, url)
            .header(API_KEY_HEADER, &self.api_key)
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Checks the status code and returns the matching error if the request
    /// failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::from_response(status.as_u16(), &body));
        }

        serde_json::from_str(&body)
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response that returns no content (e.g., DELETE operations)
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::from_response(status.as_u16(), &body));
        }

        Ok(())
    }
}
