use std::time::Duration;

use chrono::Utc;
use serde_json::Value;
use teloxide::types::ChatId;
use teloxide::Bot;
use tracing::{debug, error, info};

use crate::error::BotError;
use crate::homework::{check_response, parse_status};
use crate::notify;
use crate::practicum::PracticumClient;

/// How long to wait between polls.
pub const RETRY_PERIOD: Duration = Duration::from_secs(600);

/// Polls the Practicum API and relays status changes to Telegram.
pub struct StatusPoller {
    api: PracticumClient,
    bot: Bot,
    chat_id: ChatId,
    poll_interval: Duration,
}

impl StatusPoller {
    pub fn new(api: PracticumClient, bot: Bot, chat_id: ChatId) -> Self {
        Self {
            api,
            bot,
            chat_id,
            poll_interval: RETRY_PERIOD,
        }
    }

    /// Override the sleep between polls.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Run the polling loop. Runs until the process is killed; every error
    /// inside an iteration is contained to that iteration.
    pub async fn run(&self) -> anyhow::Result<()> {
        let mut timestamp = Utc::now().timestamp();

        info!(
            "Status poller started (interval: {:?}, from_date: {})",
            self.poll_interval, timestamp
        );

        loop {
            match self.poll_once(timestamp).await {
                Ok(reported) => {
                    timestamp = advance_cursor(timestamp, reported);
                }
                Err(e) => {
                    let message = format!("Сбой в работе программы: {}", e);
                    error!("{}", message);
                    notify::send_message(&self.bot, self.chat_id, &message).await;
                }
            }

            tokio::time::sleep(self.poll_interval).await;
        }
    }

    /// One poll iteration: fetch, validate, and notify about the first
    /// pending homework. Returns the server-reported current time, if any.
    async fn poll_once(&self, timestamp: i64) -> Result<Option<i64>, BotError> {
        let response = self.api.homework_statuses(timestamp).await?;
        let homeworks = check_response(&response)?;

        match homeworks.first() {
            Some(homework) => {
                let message = parse_status(homework)?;
                info!("Status change: {}", message);
                notify::send_message(&self.bot, self.chat_id, &message).await;
            }
            None => debug!("No homework updates since {}", timestamp),
        }

        Ok(response.get("current_date").and_then(Value::as_i64))
    }
}

/// Advance the poll cursor from the server-reported time. Never decreases.
fn advance_cursor(current: i64, reported: Option<i64>) -> i64 {
    match reported {
        Some(reported) => current.max(reported),
        None => current,
    }
}
