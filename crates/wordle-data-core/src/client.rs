//! HTTP client for the Wordle endpoints
//!
//! A thin wrapper over `reqwest::Client` that is configured once per run
//! (user agent and timeout) and then passed around explicitly.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Result, WordleError};

const USER_AGENT: &str = "Mozilla/5.0";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// User-Agent header sent with every request (default: "Mozilla/5.0")
    pub user_agent: String,
    /// Request timeout in seconds (default: 5)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: USER_AGENT.to_string(),
            timeout_secs: 5,
        }
    }
}

/// HTTP client shared by both fetchers
///
/// Every request carries the configured User-Agent and is bounded by the
/// configured timeout. No retries, no rate limiting.
pub struct WordleClient {
    client: reqwest::Client,
    timeout: Duration,
}

impl WordleClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(config.user_agent)
            .build()
            .map_err(WordleError::HttpError)?;

        Ok(Self { client, timeout })
    }

    /// Fetch a URL and return its body as text
    ///
    /// # Errors
    /// - `HttpError` - Network, timeout or body decoding errors
    /// - `HttpStatus` - Server answered with a non-2xx status
    pub async fn fetch_text(&self, url: &str) -> Result<String> {
        debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(WordleError::HttpError)?;

        let status = response.status();
        if !status.is_success() {
            return Err(WordleError::HttpStatus {
                url: url.to_string(),
                status,
            });
        }

        response.text().await.map_err(WordleError::HttpError)
    }

    /// Fetch a URL and deserialize its body as JSON
    ///
    /// The body is read as text first so that a non-JSON response surfaces
    /// as `JsonError` rather than a transport error.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.fetch_text(url).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
