//! Discord gateway event handler.
//!
//! Converts serenity events into router calls. No command logic lives here.

use std::sync::Arc;

use serenity::all::{Context, EventHandler, GatewayIntents, Message, Ready};

use crate::infrastructure::discord::DiscordGateway;
use crate::infrastructure::ports::InboundMessage;
use crate::use_cases::CommandRouter;

/// Guild and direct messages, with their content.
pub fn gateway_intents() -> GatewayIntents {
    GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
}

pub struct DiscordHandler {
    router: Arc<CommandRouter>,
    gateway: Arc<DiscordGateway>,
}

impl DiscordHandler {
    pub fn new(router: Arc<CommandRouter>, gateway: Arc<DiscordGateway>) -> Self {
        Self { router, gateway }
    }
}

#[serenity::async_trait]
impl EventHandler for DiscordHandler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        self.gateway.set_current_user(ready.user.id).await;
        tracing::info!(
            user = %ready.user.name,
            guilds = ready.guilds.len(),
            "Beholder has arrived! Roll Initiative."
        );
    }

    async fn message(&self, _ctx: Context, msg: Message) {
        let inbound = InboundMessage::new(
            msg.author.id.to_string(),
            msg.channel_id.to_string(),
            msg.content,
        );
        self.router.dispatch(&inbound).await;
    }
}
