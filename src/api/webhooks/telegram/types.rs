//! Telegram webhook types
//!
//! Every field is optional so partial payloads still deserialize and the
//! handler decides what to ignore.

use serde::Deserialize;

/// Telegram Update object (the parts this service reads)
#[derive(Debug, Default, Deserialize)]
pub struct TelegramUpdate {
    pub update_id: Option<i64>,
    pub message: Option<TelegramMessage>,
    pub edited_message: Option<TelegramMessage>,
}

/// Telegram Message object (simplified)
#[derive(Debug, Default, Deserialize)]
pub struct TelegramMessage {
    pub message_id: Option<i64>,
    pub chat: Option<TelegramChat>,
    pub text: Option<String>,
    pub caption: Option<String>,
}

/// Telegram Chat object (simplified)
#[derive(Debug, Default, Deserialize)]
pub struct TelegramChat {
    pub id: Option<i64>,
}

/// A message reduced to what processing needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    /// Chat to reply into
    pub chat_id: i64,
    /// Message text, or caption, or empty
    pub text: String,
}

impl TelegramUpdate {
    /// Reduce the update to a chat id and text
    ///
    /// `message` wins over `edited_message` and `text` over `caption`.
    /// Returns `None` when there is no message or no chat id.
    #[must_use]
    pub fn into_inbound(self) -> Option<InboundMessage> {
        let message = self.message.or(self.edited_message)?;
        let chat_id = message.chat?.id?;
        let text = message.text.or(message.caption).unwrap_or_default();
        Some(InboundMessage { chat_id, text })
    }
}
