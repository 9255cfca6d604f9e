//! yt-dlp format selection expressions

use super::ExtractionRequest;
use crate::links::Quality;

/// Audio only, m4a preferred
const AUDIO: &str = "bestaudio[ext=m4a]/bestaudio/best";
/// Video capped at 720p, mp4 preferred
const P720: &str = "best[height<=720][ext=mp4]/best[height<=720]/best";
/// Video capped at 360p, mp4 preferred
const P360: &str = "best[height<=360][ext=mp4]/best[height<=360]/best";
/// Best single-file video, mp4 preferred
const BEST: &str = "best[ext=mp4]/best";

/// Format expression for a request
///
/// Every expression selects a single pre-muxed stream so the backend
/// reports one URL instead of separate video and audio tracks.
#[must_use]
pub const fn format_expression(request: &ExtractionRequest) -> &'static str {
    if request.audio_only {
        return AUDIO;
    }
    match request.quality {
        Quality::Best => BEST,
        Quality::P720 => P720,
        Quality::P360 => P360,
    }
}
