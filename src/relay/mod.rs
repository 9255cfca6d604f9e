//! Media delivery with a single document fallback
//!
//! ```text
//! sendVideo / sendAudio ──fail──► sendDocument ──fail──► Failed
//!          │                            │
//!          └──ok──► Delivered           └──ok──► Delivered(Document)
//! ```

use std::borrow::Cow;

use crate::channels::{Channel, MediaKind};
use crate::links::Mode;

/// Telegram's caption length limit, in characters
pub const MAX_CAPTION_CHARS: usize = 1024;

/// Result of one delivery
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// Accepted by the given send method
    Delivered(MediaKind),
    /// Both the typed send and the document fallback were rejected
    Failed,
}

impl DeliveryOutcome {
    /// Whether the user received the media
    #[must_use]
    pub const fn is_delivered(self) -> bool {
        matches!(self, Self::Delivered(_))
    }
}

/// Send method matching the requested mode
#[must_use]
pub const fn typed_kind(mode: Mode) -> MediaKind {
    if mode.is_audio() {
        MediaKind::Audio
    } else {
        MediaKind::Video
    }
}

/// Cut a caption to [`MAX_CAPTION_CHARS`] characters
#[must_use]
pub fn truncate_caption(caption: &str) -> Cow<'_, str> {
    match caption.char_indices().nth(MAX_CAPTION_CHARS) {
        Some((idx, _)) => Cow::Owned(caption[..idx].to_string()),
        None => Cow::Borrowed(caption),
    }
}

/// Deliver a direct media URL to a chat
///
/// Tries the type-specific method first and, if it fails for any reason,
/// exactly one `sendDocument` with the same URL and caption.
pub async fn deliver(
    channel: &dyn Channel,
    chat_id: i64,
    mode: Mode,
    direct_url: &str,
    caption: &str,
) -> DeliveryOutcome {
    let caption = truncate_caption(caption);
    let kind = typed_kind(mode);

    match channel.send_media(chat_id, kind, direct_url, &caption).await {
        Ok(()) => {
            tracing::info!(chat_id, method = %kind, "media delivered");
            return DeliveryOutcome::Delivered(kind);
        }
        Err(e) => {
            tracing::warn!(chat_id, method = %kind, error = %e, "typed send rejected, falling back to document");
        }
    }

    match channel
        .send_media(chat_id, MediaKind::Document, direct_url, &caption)
        .await
    {
        Ok(()) => {
            tracing::info!(chat_id, method = %MediaKind::Document, "media delivered");
            DeliveryOutcome::Delivered(MediaKind::Document)
        }
        Err(e) => {
            tracing::warn!(chat_id, error = %e, "document fallback rejected");
            DeliveryOutcome::Failed
        }
    }
}
