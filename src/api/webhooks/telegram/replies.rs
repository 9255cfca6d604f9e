//! Canned user-facing replies

use crate::links::{Command, Mode, Quality};

/// Reply to `/start` and `/help`
pub const HELP: &str = "Send me a link to a public video and I'll send the media back.\n\n\
Add a word to pick the format:\n\
• audio: audio track only\n\
• 720: video up to 720p\n\
• 360: video up to 360p\n\n\
Example: https://youtu.be/dQw4w9WgXcQ 720";

/// Reply to `/about`
pub const ABOUT: &str = concat!(
    "media-relay ",
    env!("CARGO_PKG_VERSION"),
    "\nResolves media links with yt-dlp and relays them through Telegram. \
Nothing is downloaded or stored."
);

/// Reply when a message has no link
pub const NO_URL: &str = "🎯 Send me a video link (public post, reel or short).";

/// Reply when every extraction strategy failed
pub const EXTRACTION_FAILED: &str = "❌ Couldn't get a playable file from that link. \
It may need a login, be blocked in this region, or be age-restricted.";

/// Reply when Telegram refused both the typed send and the document fallback
pub const DELIVERY_FAILED: &str = "❌ Telegram did not accept the media URL \
(the file may be too large or the post private).";

/// Canned reply for a command
#[must_use]
pub const fn for_command(command: Command) -> &'static str {
    match command {
        Command::Start | Command::Help => HELP,
        Command::About => ABOUT,
    }
}

/// Acknowledgment sent before extraction starts
#[must_use]
pub const fn ack(mode: Mode) -> &'static str {
    match mode {
        Mode::Audio => "⏬ Link received, fetching the audio…",
        Mode::Video(Quality::P720) => "⏬ Link received, fetching up to 720p…",
        Mode::Video(Quality::P360) => "⏬ Link received, fetching up to 360p…",
        Mode::Video(Quality::Best) => "⏬ Link received, preparing…",
    }
}
