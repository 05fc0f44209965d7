//! Command routing.
//!
//! Turns one inbound chat message into at most one reply:
//! - messages from the bot itself and non-commands are ignored
//! - `!roll <dice>` goes through the dice pipeline, replying in plain text
//! - `!spell <name>` goes through the spell pipeline, replying richly

mod parse;

pub use parse::{Command, CommandKind, UsageError, COMMAND_MARKER};

use std::sync::Arc;

use beholder_domain::RollRequest;

use crate::infrastructure::ports::{ChatPort, ExtractionError, InboundMessage, OutboundMessage};
use crate::use_cases::dice::DiceUseCases;
use crate::use_cases::spell::{spell_message, SpellUseCases};

/// Roll argument that expands to one d20 per ability score.
pub const STATS_ALIAS: &str = "stats";

pub struct CommandRouter {
    chat: Arc<dyn ChatPort>,
    dice: DiceUseCases,
    spell: SpellUseCases,
}

impl CommandRouter {
    pub fn new(chat: Arc<dyn ChatPort>, dice: DiceUseCases, spell: SpellUseCases) -> Self {
        Self { chat, dice, spell }
    }

    /// Handle a message and send the reply, if any, to its channel.
    ///
    /// When the platform rejects a rich reply, the error text is sent back
    /// as one plain message.
    pub async fn dispatch(&self, message: &InboundMessage) {
        let Some(reply) = self.handle(message).await else {
            return;
        };

        let was_rich = matches!(reply, OutboundMessage::Rich(_));
        let Err(e) = self.chat.send(&message.channel_id, reply).await else {
            return;
        };
        tracing::error!(
            error = %e,
            channel_id = %message.channel_id,
            "Failed to send reply"
        );

        // A rejected rich reply is reported once as plain text; no further retry.
        if was_rich {
            let fallback = OutboundMessage::text(e.to_string());
            if let Err(e) = self.chat.send(&message.channel_id, fallback).await {
                tracing::error!(
                    error = %e,
                    channel_id = %message.channel_id,
                    "Failed to send error reply"
                );
            }
        }
    }

    /// Work out the reply for a message without sending it.
    pub async fn handle(&self, message: &InboundMessage) -> Option<OutboundMessage> {
        let own_id = self.chat.current_user_id().await;
        if own_id.as_deref() == Some(message.author_id.as_str()) {
            tracing::trace!(channel_id = %message.channel_id, "Ignoring own message");
            return None;
        }

        let command = Command::parse(&message.content)?;
        tracing::debug!(
            command = %command.kind,
            channel_id = %message.channel_id,
            author_id = %message.author_id,
            "Command received"
        );

        let Some(argument) = command.argument else {
            return Some(OutboundMessage::text(
                UsageError::MissingArgument(command.kind).to_string(),
            ));
        };

        match command.kind {
            CommandKind::Roll => Some(self.roll(argument)),
            CommandKind::Spell => self.spell(argument).await,
        }
    }

    fn roll(&self, argument: &str) -> OutboundMessage {
        // Stats stays six plain d20s; no per-score adjustment is applied.
        let request = if argument == STATS_ALIAS {
            Ok(RollRequest::stats())
        } else {
            RollRequest::parse(argument)
        };

        match request {
            Ok(request) => OutboundMessage::text(self.dice.roll.execute(request).to_string()),
            Err(e) => OutboundMessage::text(e.to_string()),
        }
    }

    async fn spell(&self, argument: &str) -> Option<OutboundMessage> {
        match self.spell.lookup.execute(argument).await {
            Ok(record) => Some(OutboundMessage::Rich(spell_message(&record))),
            // Transport problems are only logged; the user gets no reply.
            Err(ExtractionError::FetchFailure(e)) => {
                tracing::warn!(error = %e, spell = %argument, "Failed to fetch spell page");
                None
            }
            Err(e @ ExtractionError::MalformedComponents(_)) => {
                Some(OutboundMessage::text(e.to_string()))
            }
        }
    }
}
