//! Discord chat adapter.
//!
//! Sends router replies through serenity's HTTP client and remembers which
//! user the current gateway session belongs to.

use std::sync::Arc;

use async_trait::async_trait;
use serenity::all::{ChannelId, CreateEmbed, CreateEmbedFooter, CreateMessage, Http, UserId};
use tokio::sync::RwLock;

use crate::infrastructure::ports::{ChatError, ChatPort, OutboundMessage, RichMessage};

/// Discord length limits, applied in bytes.
const MAX_CONTENT_LEN: usize = 2000;
const MAX_TITLE_LEN: usize = 256;
const MAX_DESCRIPTION_LEN: usize = 4096;
const MAX_FIELD_NAME_LEN: usize = 256;
const MAX_FIELD_VALUE_LEN: usize = 1024;
const MAX_FIELDS: usize = 25;
const MAX_FOOTER_TEXT_LEN: usize = 2048;
/// Title, description, field names and values, and footer text combined.
const MAX_EMBED_TOTAL_LEN: usize = 6000;

/// Discord rejects empty field names and values.
const EMPTY_FIELD: &str = "\u{200b}";

pub struct DiscordGateway {
    http: Arc<Http>,
    current_user: RwLock<Option<UserId>>,
}

impl DiscordGateway {
    pub fn new(http: Arc<Http>) -> Self {
        Self {
            http,
            current_user: RwLock::new(None),
        }
    }

    /// Record the bot's own identity; called on every gateway `ready`.
    pub async fn set_current_user(&self, user_id: UserId) {
        *self.current_user.write().await = Some(user_id);
    }
}

#[async_trait]
impl ChatPort for DiscordGateway {
    async fn current_user_id(&self) -> Option<String> {
        self.current_user.read().await.map(|id| id.to_string())
    }

    async fn send(&self, channel_id: &str, message: OutboundMessage) -> Result<(), ChatError> {
        let channel = parse_channel_id(channel_id)?;

        let builder = match message {
            OutboundMessage::Text(content) => {
                CreateMessage::new().content(truncate(&content, MAX_CONTENT_LEN))
            }
            OutboundMessage::Rich(rich) => CreateMessage::new().embed(build_embed(&rich)),
        };

        channel
            .send_message(self.http.as_ref(), builder)
            .await
            .map_err(|e| ChatError::Send {
                channel_id: channel_id.to_string(),
                message: e.to_string(),
            })?;

        Ok(())
    }
}

fn parse_channel_id(raw: &str) -> Result<ChannelId, ChatError> {
    raw.parse::<u64>()
        .ok()
        .filter(|id| *id != 0)
        .map(ChannelId::new)
        .ok_or_else(|| ChatError::InvalidChannel(raw.to_string()))
}

/// Convert a `RichMessage` into a serenity `CreateEmbed`.
///
/// Fields past the platform cap are dropped. The description gets whatever
/// room the other parts leave under the total embed limit.
fn build_embed(rich: &RichMessage) -> CreateEmbed {
    let title = truncate(&rich.title, MAX_TITLE_LEN);
    let footer_text = truncate(&rich.footer.text, MAX_FOOTER_TEXT_LEN);
    let fields: Vec<(&str, &str, bool)> = rich
        .fields
        .iter()
        .take(MAX_FIELDS)
        .map(|field| {
            (
                non_empty(truncate(&field.name, MAX_FIELD_NAME_LEN)),
                non_empty(truncate(&field.value, MAX_FIELD_VALUE_LEN)),
                field.inline,
            )
        })
        .collect();

    let used = title.len()
        + footer_text.len()
        + fields
            .iter()
            .map(|(name, value, _)| name.len() + value.len())
            .sum::<usize>();
    let description_room = MAX_EMBED_TOTAL_LEN
        .saturating_sub(used)
        .min(MAX_DESCRIPTION_LEN);

    let mut builder = CreateEmbed::new()
        .title(title)
        .url(&rich.url)
        .description(truncate(&rich.description, description_room))
        .footer(CreateEmbedFooter::new(footer_text).icon_url(&rich.footer.icon_url));

    if let Some(ref thumbnail) = rich.thumbnail_url {
        builder = builder.thumbnail(thumbnail);
    }

    builder.fields(fields)
}

fn non_empty(s: &str) -> &str {
    if s.trim().is_empty() {
        EMPTY_FIELD
    } else {
        s
    }
}

/// Truncate a string to at most `max` bytes on a char boundary.
fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        s
    } else {
        let mut end = max;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        &s[..end]
    }
}
