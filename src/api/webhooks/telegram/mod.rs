//! Telegram webhook handler

mod process;
pub mod replies;
pub mod types;

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;

pub use self::process::{ProcessOutcome, process_message};
use self::types::TelegramUpdate;
use crate::api::AppState;

/// Handle an incoming Telegram update
///
/// Always answers `200` with an empty body before any work happens, so
/// Telegram never retries. Malformed payloads, updates without a chat, and
/// a missing bot token are silently ignored.
pub async fn handle_update(State(state): State<Arc<AppState>>, body: Bytes) -> StatusCode {
    let update: TelegramUpdate = match serde_json::from_slice(&body) {
        Ok(update) => update,
        Err(e) => {
            tracing::debug!(error = %e, "ignoring malformed Telegram update");
            return StatusCode::OK;
        }
    };

    let update_id = update.update_id;
    let Some(message) = update.into_inbound() else {
        tracing::debug!(?update_id, "update has no message or chat, ignoring");
        return StatusCode::OK;
    };

    let Some(channel) = state.channel.clone() else {
        tracing::warn!(chat_id = message.chat_id, "no bot token configured, ignoring update");
        return StatusCode::OK;
    };

    tracing::debug!(?update_id, chat_id = message.chat_id, "received Telegram update");

    tokio::spawn(async move {
        let outcome = process_message(channel.as_ref(), &state.engine, &message).await;
        tracing::debug!(chat_id = message.chat_id, ?outcome, "update processed");
    });

    StatusCode::OK
}
