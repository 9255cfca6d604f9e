//! Telegram Bot API request/response types

use serde::{Deserialize, Serialize};

/// Telegram sendMessage request
#[derive(Serialize)]
pub(crate) struct SendMessageRequest<'a> {
    pub chat_id: i64,
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_web_page_preview: Option<bool>,
}

/// Telegram sendVideo request
#[derive(Serialize)]
pub(crate) struct SendVideoRequest<'a> {
    pub chat_id: i64,
    pub video: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<&'a str>,
    pub supports_streaming: bool,
}

/// Telegram sendAudio request
#[derive(Serialize)]
pub(crate) struct SendAudioRequest<'a> {
    pub chat_id: i64,
    pub audio: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<&'a str>,
}

/// Telegram sendDocument request
#[derive(Serialize)]
pub(crate) struct SendDocumentRequest<'a> {
    pub chat_id: i64,
    pub document: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<&'a str>,
}

/// Telegram setWebhook request
#[derive(Serialize)]
pub(crate) struct SetWebhookRequest<'a> {
    pub url: &'a str,
    pub allowed_updates: &'a [&'a str],
    pub drop_pending_updates: bool,
}

/// Telegram deleteWebhook request
#[derive(Serialize)]
pub(crate) struct DeleteWebhookRequest {
    pub drop_pending_updates: bool,
}

/// Bot identity from getMe
#[derive(Debug, Clone, Deserialize)]
pub struct BotUser {
    /// Bot user ID
    pub id: i64,
    /// Display name
    pub first_name: String,
    /// `@` handle without the `@`
    pub username: Option<String>,
}

/// Telegram API response wrapper
#[derive(Deserialize)]
pub(crate) struct TelegramResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
}
