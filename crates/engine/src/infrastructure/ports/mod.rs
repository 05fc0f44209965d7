//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Fetching spell pages (could swap the reference site or serve fixtures)
//! - The chat gateway (could swap Discord for another platform)
//! - Random (for testing)

mod error;
mod external;
mod testing;
pub mod types;

// =============================================================================
// Message Types
// =============================================================================
pub use types::{EmbedField, EmbedFooter, InboundMessage, OutboundMessage, RichMessage};

// =============================================================================
// External Service Ports
// =============================================================================
pub use external::{ChatPort, PageFetcher};

#[cfg(test)]
pub use external::{MockChatPort, MockPageFetcher};

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::RandomPort;

#[cfg(test)]
pub use testing::MockRandomPort;

// =============================================================================
// Error Types
// =============================================================================
pub use error::{ChatError, ExtractionError, FetchError};
