//! Beholder - Main entry point.

use std::sync::Arc;

use serenity::all::Http;
use serenity::Client;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use beholder_engine::api::{gateway_intents, DiscordHandler};
use beholder_engine::infrastructure::{
    config::BotConfig, discord::DiscordGateway, dndbeyond::DndBeyondClient, random::SystemRandom,
};
use beholder_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "beholder_engine=debug,beholder=debug,serenity=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Beholder");

    let config = BotConfig::from_env()?;
    tracing::debug!(config = ?config, "Loaded configuration");

    let fetcher = Arc::new(match config.http_timeout_secs {
        Some(secs) => DndBeyondClient::with_timeout(&config.user_agent, secs),
        None => DndBeyondClient::new(&config.user_agent),
    });

    // Replies go out over a standalone REST client so the router exists
    // before the gateway client that feeds it.
    let http = Arc::new(Http::new(&config.bot_token));
    let gateway = Arc::new(DiscordGateway::new(http));

    let app = App::new(
        &config,
        fetcher,
        gateway.clone(),
        Arc::new(SystemRandom::new()),
    );

    let handler = DiscordHandler::new(app.router.clone(), gateway);
    let mut client = Client::builder(&config.bot_token, gateway_intents())
        .event_handler(handler)
        .await?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for shutdown signal");
            return;
        }
        tracing::info!("Shutting down");
        shard_manager.shutdown_all().await;
    });

    client.start().await?;

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
