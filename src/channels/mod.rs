//! Outbound messaging channel
//!
//! The relay and the webhook processor talk to Telegram only through the
//! [`Channel`] trait, so tests can swap in a recording double.

mod telegram;

use async_trait::async_trait;

pub use telegram::{BotUser, TelegramChannel};

use crate::Result;

/// How a media URL is presented to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    /// Inline video player
    Video,
    /// Inline audio player
    Audio,
    /// Generic file attachment
    Document,
}

impl MediaKind {
    /// Bot API method that sends this kind
    #[must_use]
    pub const fn method(self) -> &'static str {
        match self {
            Self::Video => "sendVideo",
            Self::Audio => "sendAudio",
            Self::Document => "sendDocument",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.method())
    }
}

/// Messaging channel adapter
#[async_trait]
pub trait Channel: Send + Sync {
    /// Get the channel name
    fn name(&self) -> &'static str;

    /// Send a plain text message
    ///
    /// # Errors
    ///
    /// Returns error if the platform rejects the message or the request fails
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<()>;

    /// Send a media item by URL; the platform fetches it
    ///
    /// # Errors
    ///
    /// Returns error if the platform rejects the media or the request fails
    async fn send_media(
        &self,
        chat_id: i64,
        kind: MediaKind,
        url: &str,
        caption: &str,
    ) -> Result<()>;
}
