//! Error types for port operations.

/// Transport failures while fetching a page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("Request to {url} failed: {message}")]
    Request { url: String, message: String },

    /// The server answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The response body could not be read as text.
    #[error("Failed to read body of {url}: {message}")]
    Body { url: String, message: String },
}

impl FetchError {
    pub fn request(url: impl ToString, message: impl ToString) -> Self {
        Self::Request {
            url: url.to_string(),
            message: message.to_string(),
        }
    }

    pub fn body(url: impl ToString, message: impl ToString) -> Self {
        Self::Body {
            url: url.to_string(),
            message: message.to_string(),
        }
    }
}

/// Failures turning a spell page into a record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractionError {
    /// The components blurb has text but no parenthesized group.
    #[error("Could not read spell components from '{0}'")]
    MalformedComponents(String),

    /// The page itself could not be fetched.
    #[error("Spell page unavailable: {0}")]
    FetchFailure(#[from] FetchError),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ChatError {
    #[error("Failed to send message to channel {channel_id}: {message}")]
    Send { channel_id: String, message: String },
    #[error("Invalid channel id: {0}")]
    InvalidChannel(String),
}
