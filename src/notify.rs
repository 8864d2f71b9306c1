use teloxide::prelude::*;
use teloxide::types::ChatId;
use tracing::{debug, error};

/// Send `text` to the notification chat.
///
/// Delivery is best effort: a failed send is logged and swallowed so the
/// polling loop keeps running.
pub async fn send_message(bot: &Bot, chat_id: ChatId, text: &str) {
    match bot.send_message(chat_id, text).await {
        Ok(_) => debug!("Delivered notification to chat {}", chat_id),
        Err(e) => error!("Failed to deliver notification: {}", e),
    }
}
