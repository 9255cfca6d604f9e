//! Media Relay - Telegram webhook that turns media links into playable files
//!
//! A user sends a link; the relay resolves it to a direct media URL with
//! yt-dlp and hands that URL back to Telegram, which fetches the file itself.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │              Telegram webhook (axum)                 │
//! │    200 immediately  │  spawn per-update task         │
//! └────────────────────┬─────────────────────────────────┘
//!                      │
//! ┌────────────────────▼─────────────────────────────────┐
//! │  links          │  extract             │  relay      │
//! │  URL + mode     │  strategy chain      │  typed send │
//! │  commands       │  yt-dlp + cookies    │  → document │
//! └────────────────────┬─────────────────────────────────┘
//!                      │
//! ┌────────────────────▼─────────────────────────────────┐
//! │                 Telegram Bot API                     │
//! └──────────────────────────────────────────────────────┘
//! ```

pub mod api;
pub mod channels;
pub mod config;
pub mod error;
pub mod extract;
pub mod links;
pub mod relay;

pub use api::{ApiServer, AppState};
pub use channels::{Channel, MediaKind, TelegramChannel};
pub use config::Config;
pub use error::{Error, Result};
pub use extract::{Engine, ExtractionRequest, ExtractionResult, Extractor, YtDlp};
pub use links::{Command, Mode, Quality};
pub use relay::{DeliveryOutcome, deliver};
