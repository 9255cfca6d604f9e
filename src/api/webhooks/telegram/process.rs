//! Per-message processing, run off the request path

use crate::channels::{Channel, MediaKind};
use crate::extract::{Engine, ExtractionRequest};
use crate::links::{Command, detect_mode, first_url, parse_command};
use crate::relay::{DeliveryOutcome, deliver};

use super::replies;
use super::types::InboundMessage;

/// How processing of one message ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// Answered a slash-command
    Command(Command),
    /// No link in the text; guidance sent
    NoUrl,
    /// Every extraction strategy failed; apology sent
    ExtractionFailed,
    /// Media reached the user
    Delivered(MediaKind),
    /// Telegram refused the media; notice sent
    DeliveryFailed,
}

/// Process one inbound message to completion
///
/// Commands and guidance never reach the extraction engine. Every outbound
/// text is best-effort: failures are logged and processing continues.
pub async fn process_message(
    channel: &dyn Channel,
    engine: &Engine,
    message: &InboundMessage,
) -> ProcessOutcome {
    let chat_id = message.chat_id;
    let text = message.text.as_str();

    if let Some(command) = parse_command(text) {
        tracing::debug!(chat_id, command = command.name(), "command received");
        notify(channel, chat_id, replies::for_command(command)).await;
        return ProcessOutcome::Command(command);
    }

    let Some(url) = first_url(text) else {
        tracing::debug!(chat_id, "no link in message");
        notify(channel, chat_id, replies::NO_URL).await;
        return ProcessOutcome::NoUrl;
    };

    let mode = detect_mode(text);
    tracing::info!(chat_id, url, ?mode, "link received");
    notify(channel, chat_id, replies::ack(mode)).await;

    let request = ExtractionRequest::new(url, mode);
    let result = match engine.resolve(&request).await {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!(chat_id, url, error = %e, "extraction exhausted");
            notify(channel, chat_id, replies::EXTRACTION_FAILED).await;
            return ProcessOutcome::ExtractionFailed;
        }
    };

    match deliver(channel, chat_id, mode, &result.direct_url, &result.title).await {
        DeliveryOutcome::Delivered(kind) => ProcessOutcome::Delivered(kind),
        DeliveryOutcome::Failed => {
            notify(channel, chat_id, replies::DELIVERY_FAILED).await;
            ProcessOutcome::DeliveryFailed
        }
    }
}

/// Best-effort text message
async fn notify(channel: &dyn Channel, chat_id: i64, text: &str) {
    if let Err(e) = channel.send_message(chat_id, text).await {
        tracing::warn!(chat_id, channel = channel.name(), error = %e, "failed to send reply");
    }
}
