//! External service port traits (page fetching, chat gateway).

use async_trait::async_trait;

use super::error::{ChatError, FetchError};
use super::types::OutboundMessage;

// =============================================================================
// Page Fetching
// =============================================================================

/// Fetches one HTML page. One attempt per call, no retry, no caching.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

// =============================================================================
// Chat Gateway
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatPort: Send + Sync {
    /// Identity of the bot in the current session, once the gateway is ready.
    async fn current_user_id(&self) -> Option<String>;

    async fn send(&self, channel_id: &str, message: OutboundMessage) -> Result<(), ChatError>;
}
