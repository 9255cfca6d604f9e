//! Delivery mode detection from message text

use std::fmt;

/// Requested video quality ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Quality {
    /// No height limit
    #[default]
    Best,
    /// At most 720p
    P720,
    /// At most 360p
    P360,
}

impl Quality {
    /// Height ceiling in pixels, if any
    #[must_use]
    pub const fn max_height(self) -> Option<u32> {
        match self {
            Self::Best => None,
            Self::P720 => Some(720),
            Self::P360 => Some(360),
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Best => f.write_str("best"),
            Self::P720 => f.write_str("720"),
            Self::P360 => f.write_str("360"),
        }
    }
}

impl std::str::FromStr for Quality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().trim_end_matches('p') {
            "best" | "" => Ok(Self::Best),
            "720" => Ok(Self::P720),
            "360" => Ok(Self::P360),
            other => Err(format!("unknown quality: {other}")),
        }
    }
}

/// What the user asked to receive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Audio-only track
    Audio,
    /// Video with a quality ceiling
    Video(Quality),
}

impl Default for Mode {
    fn default() -> Self {
        Self::Video(Quality::Best)
    }
}

impl Mode {
    /// Whether only audio was requested
    #[must_use]
    pub const fn is_audio(self) -> bool {
        matches!(self, Self::Audio)
    }

    /// Quality hint for video mode; `None` for audio
    #[must_use]
    pub const fn quality(self) -> Option<Quality> {
        match self {
            Self::Audio => None,
            Self::Video(q) => Some(q),
        }
    }
}

/// Classify message text into a delivery mode
///
/// Case-insensitive substring checks with fixed precedence:
/// `audio`, then `720`, then `360`, otherwise best-quality video.
/// Slash-commands (`/audio`, `/720`, `/360`) match through the same rule.
#[must_use]
pub fn detect_mode(text: &str) -> Mode {
    let lower = text.to_lowercase();
    if lower.contains("audio") {
        Mode::Audio
    } else if lower.contains("720") {
        Mode::Video(Quality::P720)
    } else if lower.contains("360") {
        Mode::Video(Quality::P360)
    } else {
        Mode::Video(Quality::Best)
    }
}
