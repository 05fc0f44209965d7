//! Chat message types exchanged with the gateway.

// =============================================================================
// Inbound
// =============================================================================

/// One chat message as seen by the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub author_id: String,
    pub channel_id: String,
    pub content: String,
}

impl InboundMessage {
    pub fn new(
        author_id: impl Into<String>,
        channel_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            author_id: author_id.into(),
            channel_id: channel_id.into(),
            content: content.into(),
        }
    }
}

// =============================================================================
// Outbound
// =============================================================================

/// A reply to send back to the channel the command came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundMessage {
    /// Plain text reply
    Text(String),
    /// Rich, embed-like reply
    Rich(RichMessage),
}

impl OutboundMessage {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }
}

/// Title, link, thumbnail, description and labeled fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RichMessage {
    pub title: String,
    pub url: String,
    pub thumbnail_url: Option<String>,
    pub description: String,
    pub fields: Vec<EmbedField>,
    pub footer: EmbedFooter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedFooter {
    pub icon_url: String,
    pub text: String,
}
