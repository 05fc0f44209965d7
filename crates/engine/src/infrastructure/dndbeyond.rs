//! D&D Beyond page client

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::infrastructure::ports::{FetchError, PageFetcher};

/// Default base path for spell pages; the normalized spell name is appended.
pub const DEFAULT_SPELL_BASE_URL: &str = "https://www.dndbeyond.com/spells/";

/// Default client identification string.
pub const DEFAULT_USER_AGENT: &str = "Beholder/v1";

/// Fetches reference pages over HTTP. One GET per call.
#[derive(Clone)]
pub struct DndBeyondClient {
    client: Client,
}

impl DndBeyondClient {
    /// Create a client with the transport's default timeouts.
    pub fn new(user_agent: &str) -> Self {
        let client = Client::builder().user_agent(user_agent).build();

        Self {
            client: client_or_default(client, user_agent),
        }
    }

    /// Create client with an overall request timeout.
    pub fn with_timeout(user_agent: &str, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build();

        Self {
            client: client_or_default(client, user_agent),
        }
    }
}

/// Fall back to a plain client when the configured one cannot be built.
/// The fallback sends reqwest's default identification and has no timeout.
fn client_or_default(built: reqwest::Result<Client>, user_agent: &str) -> Client {
    built.unwrap_or_else(|e| {
        tracing::warn!(
            error = %e,
            user_agent = %user_agent,
            "Failed to build configured HTTP client, using defaults without user agent or timeout"
        );
        Client::new()
    })
}

impl Default for DndBeyondClient {
    fn default() -> Self {
        Self::new(DEFAULT_USER_AGENT)
    }
}

#[async_trait]
impl PageFetcher for DndBeyondClient {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        tracing::debug!(url = %url, "Fetching page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::request(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| FetchError::body(url, e))
    }
}
