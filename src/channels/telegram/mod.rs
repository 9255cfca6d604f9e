//! Telegram channel adapter
//!
//! Receives updates through the webhook and sends through the Bot API.

mod api;
mod types;

use async_trait::async_trait;
use reqwest::Client;

use super::{Channel, MediaKind};
use crate::Result;
use crate::config::TelegramConfig;

pub use types::BotUser;

/// Telegram channel adapter
#[derive(Clone)]
pub struct TelegramChannel {
    token: String,
    api_base: String,
    client: Client,
}

impl TelegramChannel {
    /// Create a new Telegram channel adapter
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built
    pub fn new(token: impl Into<String>, config: &TelegramConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            token: token.into(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Full URL of a Bot API method
    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{method}", self.api_base, self.token)
    }
}

impl std::fmt::Debug for TelegramChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramChannel")
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Channel for TelegramChannel {
    fn name(&self) -> &'static str {
        "telegram"
    }

    async fn send_message(&self, chat_id: i64, text: &str) -> Result<()> {
        self.send_text(chat_id, text).await
    }

    async fn send_media(
        &self,
        chat_id: i64,
        kind: MediaKind,
        url: &str,
        caption: &str,
    ) -> Result<()> {
        match kind {
            MediaKind::Video => self.send_video(chat_id, url, caption).await,
            MediaKind::Audio => self.send_audio(chat_id, url, caption).await,
            MediaKind::Document => self.send_document(chat_id, url, caption).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_url_embeds_token() {
        let config = TelegramConfig {
            api_base: "http://localhost:8081/".to_string(),
            ..TelegramConfig::default()
        };
        let channel = TelegramChannel::new("123:abc", &config).unwrap();
        assert_eq!(
            channel.method_url("sendVideo"),
            "http://localhost:8081/bot123:abc/sendVideo"
        );
    }

    #[test]
    fn debug_hides_token() {
        let channel = TelegramChannel::new("123:abc", &TelegramConfig::default()).unwrap();
        assert!(!format!("{channel:?}").contains("123:abc"));
    }
}
