//! Direct media URL extraction
//!
//! A source URL is resolved by running an ordered list of [`Strategy`]
//! descriptors through a single [`Extractor`] until one yields a direct URL:
//!
//! ```text
//! platform URL ──► player clients (in order) ──► mirror list one ──► mirror list two
//! other URL    ──► one direct attempt
//! ```

mod cookies;
mod engine;
mod format;
mod platform;
mod strategy;
mod ytdlp;

use std::path::Path;

use async_trait::async_trait;
use serde::Serialize;

use crate::Result;
use crate::links::{Mode, Quality};

pub use cookies::CookieFile;
pub use engine::Engine;
pub use format::format_expression;
pub use platform::{is_platform_url, video_id};
pub use strategy::{Strategy, StrategyKind, plan};
pub use ytdlp::YtDlp;

/// Title used when the extractor reports none
pub const FALLBACK_TITLE: &str = "video";

/// What to extract, derived once per message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRequest {
    /// URL the user sent
    pub source_url: String,
    /// Quality ceiling (ignored for audio)
    pub quality: Quality,
    /// Audio track only
    pub audio_only: bool,
}

impl ExtractionRequest {
    /// Build a request from a parsed URL and delivery mode
    #[must_use]
    pub fn new(source_url: impl Into<String>, mode: Mode) -> Self {
        Self {
            source_url: source_url.into(),
            quality: mode.quality().unwrap_or_default(),
            audio_only: mode.is_audio(),
        }
    }
}

/// A resolved media link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    /// URL a player can fetch directly
    pub direct_url: String,
    /// Display title
    pub title: String,
}

/// One invocation of the extraction backend
#[derive(Debug, Clone, Copy)]
pub struct ExtractCall<'a> {
    /// URL to hand to the backend
    pub url: &'a str,
    /// Format selection expression
    pub format: &'a str,
    /// Player client identity to mimic
    pub player_client: Option<&'a str>,
    /// Netscape cookie file
    pub cookie_file: Option<&'a Path>,
}

/// Extraction backend
///
/// Implementations are stateless per call; the engine owns retry order.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Backend name for logs
    fn name(&self) -> &'static str;

    /// Resolve a single candidate URL
    ///
    /// # Errors
    ///
    /// Returns error if the backend fails or reports no usable URL
    async fn extract(&self, call: &ExtractCall<'_>) -> Result<ExtractionResult>;
}
