//! Raw Telegram Bot API calls

use serde::Serialize;
use serde::de::{DeserializeOwned, IgnoredAny};

use super::types::{
    BotUser, DeleteWebhookRequest, SendAudioRequest, SendDocumentRequest, SendMessageRequest,
    SendVideoRequest, SetWebhookRequest, TelegramResponse,
};
use crate::{Error, Result};

/// Update types the webhook asks for
const ALLOWED_UPDATES: &[&str] = &["message", "edited_message"];

impl super::TelegramChannel {
    /// POST a JSON body to a Bot API method and unwrap the response envelope
    async fn call<B, R>(&self, method: &str, body: &B) -> Result<R>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.method_url(method))
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Channel(format!("Telegram {method} error: {}", e.without_url())))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            Error::Channel(format!(
                "Telegram {method} response read error: {}",
                e.without_url()
            ))
        })?;

        let parsed: TelegramResponse<R> = serde_json::from_str(&text).map_err(|e| {
            Error::Channel(format!("Telegram {method} response parse error: {status} - {e}"))
        })?;

        if !parsed.ok {
            return Err(Error::Channel(format!(
                "Telegram {method} error: {status} - {}",
                parsed.description.unwrap_or_default()
            )));
        }

        parsed
            .result
            .ok_or_else(|| Error::Channel(format!("Telegram {method} returned no result")))
    }

    /// Send a plain text message to a chat
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails
    pub async fn send_text(&self, chat_id: i64, text: &str) -> Result<()> {
        let request = SendMessageRequest {
            chat_id,
            text,
            disable_web_page_preview: Some(true),
        };
        let _: IgnoredAny = self.call("sendMessage", &request).await?;
        tracing::debug!(chat_id, "Telegram message sent");
        Ok(())
    }

    /// Send a video by URL
    ///
    /// # Errors
    ///
    /// Returns error if Telegram rejects the URL or the request fails
    pub async fn send_video(&self, chat_id: i64, url: &str, caption: &str) -> Result<()> {
        let request = SendVideoRequest {
            chat_id,
            video: url,
            caption: non_empty(caption),
            supports_streaming: true,
        };
        let _: IgnoredAny = self.call("sendVideo", &request).await?;
        tracing::debug!(chat_id, "Telegram video sent");
        Ok(())
    }

    /// Send an audio track by URL
    ///
    /// # Errors
    ///
    /// Returns error if Telegram rejects the URL or the request fails
    pub async fn send_audio(&self, chat_id: i64, url: &str, caption: &str) -> Result<()> {
        let request = SendAudioRequest {
            chat_id,
            audio: url,
            caption: non_empty(caption),
        };
        let _: IgnoredAny = self.call("sendAudio", &request).await?;
        tracing::debug!(chat_id, "Telegram audio sent");
        Ok(())
    }

    /// Send any file by URL
    ///
    /// # Errors
    ///
    /// Returns error if Telegram rejects the URL or the request fails
    pub async fn send_document(&self, chat_id: i64, url: &str, caption: &str) -> Result<()> {
        let request = SendDocumentRequest {
            chat_id,
            document: url,
            caption: non_empty(caption),
        };
        let _: IgnoredAny = self.call("sendDocument", &request).await?;
        tracing::debug!(chat_id, "Telegram document sent");
        Ok(())
    }

    /// Fetch the bot's own identity, verifying the token
    ///
    /// # Errors
    ///
    /// Returns error if the token is rejected or the request fails
    pub async fn get_me(&self) -> Result<BotUser> {
        let me: BotUser = self.call("getMe", &serde_json::json!({})).await?;
        tracing::debug!(bot_id = me.id, username = ?me.username, "Telegram bot identity");
        Ok(me)
    }

    /// Set webhook URL for receiving updates
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails
    pub async fn set_webhook(&self, url: &str) -> Result<()> {
        let request = SetWebhookRequest {
            url,
            allowed_updates: ALLOWED_UPDATES,
            drop_pending_updates: false,
        };
        let _: bool = self.call("setWebhook", &request).await?;
        tracing::info!(url, "Telegram webhook set");
        Ok(())
    }

    /// Delete the webhook registration
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails
    pub async fn delete_webhook(&self) -> Result<()> {
        let request = DeleteWebhookRequest {
            drop_pending_updates: false,
        };
        let _: bool = self.call("deleteWebhook", &request).await?;
        tracing::info!("Telegram webhook deleted");
        Ok(())
    }
}

fn non_empty(caption: &str) -> Option<&str> {
    Some(caption).filter(|c| !c.trim().is_empty())
}
