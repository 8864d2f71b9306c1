mod config;
mod error;
mod homework;
mod notify;
mod poller;
mod practicum;

use anyhow::{Context, Result};
use teloxide::Bot;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::poller::StatusPoller;
use crate::practicum::{PracticumClient, ENDPOINT};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,homework_bot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env().context("Failed to load configuration")?;

    info!("Configuration loaded successfully");
    info!("  Endpoint: {}", ENDPOINT);
    info!("  Chat id: {}", config.telegram_chat_id);
    info!("  Request timeout: {:?}", config.request_timeout);

    let api = PracticumClient::new(ENDPOINT, &config.practicum_token, config.request_timeout)
        .context("Failed to build Practicum API client")?;
    let bot = Bot::new(&config.telegram_token);

    info!("Bot is starting...");
    let poller = StatusPoller::new(api, bot, config.telegram_chat_id);
    poller.run().await
}
