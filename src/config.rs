//! Configuration management for the media relay
//!
//! Everything is read once at process start and never mutated afterwards.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::{Error, Result};

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 8080;

/// Default Telegram Bot API host
pub const DEFAULT_TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Desktop browser user agent handed to yt-dlp
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Accept-Language header handed to yt-dlp
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Player client identities tried in order for platform URLs
pub const DEFAULT_PLAYER_CLIENTS: &[&str] = &["android", "ios", "tv_embedded", "web"];

/// First mirror list (Piped front-ends)
pub const DEFAULT_PIPED_MIRRORS: &[&str] = &[
    "piped.video",
    "piped.kavin.rocks",
    "piped.adminforge.de",
];

/// Second mirror list (Invidious front-ends)
pub const DEFAULT_INVIDIOUS_MIRRORS: &[&str] = &[
    "yewtu.be",
    "inv.nadeko.net",
    "invidious.nerdvpn.de",
];

/// Media relay configuration
#[derive(Debug)]
pub struct Config {
    /// Telegram bot token; `None` disables all outbound messaging
    pub bot_token: Option<SecretString>,

    /// Base64-encoded Netscape cookie file for yt-dlp
    pub cookies_b64: Option<SecretString>,

    /// Port to listen on
    pub port: u16,

    /// Telegram Bot API configuration
    pub telegram: TelegramConfig,

    /// Extraction configuration
    pub extractor: ExtractorConfig,
}

/// Telegram Bot API configuration
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// API host, without the `/bot<token>` suffix
    pub api_base: String,

    /// Per-request timeout
    pub timeout: Duration,

    /// Public webhook URL registered at startup (from `WEBHOOK_URL`)
    pub webhook_url: Option<String>,
}

/// Extraction (yt-dlp) configuration
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Path or name of the yt-dlp binary
    pub ytdlp_bin: PathBuf,

    /// Per-invocation timeout
    pub timeout: Duration,

    /// User agent passed to every invocation
    pub user_agent: String,

    /// Accept-Language header passed to every invocation
    pub accept_language: String,

    /// Ordered player client identities for platform URLs
    pub player_clients: Vec<String>,

    /// First ordered mirror list
    pub piped_mirrors: Vec<String>,

    /// Second ordered mirror list
    pub invidious_mirrors: Vec<String>,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_TELEGRAM_API_BASE.to_string(),
            timeout: Duration::from_secs(20),
            webhook_url: None,
        }
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            ytdlp_bin: PathBuf::from("yt-dlp"),
            timeout: Duration::from_secs(60),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
            player_clients: to_owned_list(DEFAULT_PLAYER_CLIENTS),
            piped_mirrors: to_owned_list(DEFAULT_PIPED_MIRRORS),
            invidious_mirrors: to_owned_list(DEFAULT_INVIDIOUS_MIRRORS),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot_token: None,
            cookies_b64: None,
            port: DEFAULT_PORT,
            telegram: TelegramConfig::default(),
            extractor: ExtractorConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from process environment variables
    ///
    /// # Errors
    ///
    /// Returns error if a numeric variable cannot be parsed
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns error if a numeric variable cannot be parsed
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bot_token = get("BOT_TOKEN")
            .or_else(|| get("TELEGRAM_BOT_TOKEN"))
            .map(SecretString::from);
        let cookies_b64 = get("YTDL_COOKIES_B64")
            .or_else(|| get("COOKIES_B64"))
            .map(SecretString::from);

        let port = match get("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| Error::Config(format!("invalid PORT {raw:?}: {e}")))?,
            None => DEFAULT_PORT,
        };

        let mut telegram = TelegramConfig::default();
        if let Some(base) = get("TELEGRAM_API_BASE") {
            telegram.api_base = base.trim_end_matches('/').to_string();
        }
        if let Some(secs) = parse_secs(get("TELEGRAM_TIMEOUT_SECS"), "TELEGRAM_TIMEOUT_SECS")? {
            telegram.timeout = secs;
        }
        telegram.webhook_url = get("WEBHOOK_URL");

        let mut extractor = ExtractorConfig::default();
        if let Some(bin) = get("YTDLP_BIN") {
            extractor.ytdlp_bin = PathBuf::from(bin);
        }
        if let Some(secs) = parse_secs(get("YTDLP_TIMEOUT_SECS"), "YTDLP_TIMEOUT_SECS")? {
            extractor.timeout = secs;
        }
        if let Some(list) = get("YTDLP_PLAYER_CLIENTS") {
            extractor.player_clients = split_list(&list);
        }
        if let Some(list) = get("PIPED_MIRRORS") {
            extractor.piped_mirrors = split_list(&list);
        }
        if let Some(list) = get("INVIDIOUS_MIRRORS") {
            extractor.invidious_mirrors = split_list(&list);
        }

        Ok(Self {
            bot_token,
            cookies_b64,
            port,
            telegram,
            extractor,
        })
    }

    /// Whether a bot token is configured
    #[must_use]
    pub const fn has_bot_token(&self) -> bool {
        self.bot_token.is_some()
    }

    /// The bot token, if configured
    #[must_use]
    pub fn bot_token(&self) -> Option<&str> {
        self.bot_token.as_ref().map(|s| s.expose_secret())
    }

    /// The base64 cookie bundle, if configured
    #[must_use]
    pub fn cookies_b64(&self) -> Option<&str> {
        self.cookies_b64.as_ref().map(|s| s.expose_secret())
    }
}

fn parse_secs(raw: Option<String>, key: &str) -> Result<Option<Duration>> {
    raw.map(|v| {
        v.parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|e| Error::Config(format!("invalid {key} {v:?}: {e}")))
    })
    .transpose()
}

/// Split a comma-separated list, dropping empty entries
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}
