use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use teloxide::types::ChatId;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// OAuth token for the Practicum homework API
    pub practicum_token: String,
    /// Telegram bot token
    pub telegram_token: String,
    /// Chat that receives the notifications
    pub telegram_chat_id: ChatId,
    /// HTTP request timeout for API calls
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let practicum_token = require("PRACTICUM_TOKEN")?;
        let telegram_token = require("TELEGRAM_TOKEN")?;
        let chat_id: i64 = require("TELEGRAM_CHAT_ID")?
            .parse()
            .context("TELEGRAM_CHAT_ID must be a numeric Telegram chat id")?;
        let timeout_secs: u64 = env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_REQUEST_TIMEOUT_SECS.to_string())
            .parse()
            .context("REQUEST_TIMEOUT_SECS must be a valid u64")?;

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id: ChatId(chat_id),
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Read a required variable, rejecting absent and blank values.
fn require(name: &str) -> Result<String> {
    let value =
        env::var(name).with_context(|| format!("{} environment variable is required", name))?;
    if value.trim().is_empty() {
        anyhow::bail!("{} must not be empty", name);
    }
    Ok(value)
}
