//! Ordered fallback strategies
//!
//! The whole fallback chain is data: [`plan`] lists every candidate
//! invocation up front and the engine walks the list once.

use std::fmt;

use url::Url;

use super::platform::{is_platform_url, video_id};
use crate::config::ExtractorConfig;

/// How a candidate invocation differs from a plain one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategyKind {
    /// Original URL, no extra parameters
    Direct,
    /// Original URL with a player client identity
    PlayerClient(String),
    /// Equivalent URL on a read-only mirror front-end
    Mirror(String),
}

/// One candidate extraction call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strategy {
    /// What makes this attempt distinct
    pub kind: StrategyKind,
    /// URL handed to the extractor
    pub url: String,
}

impl Strategy {
    /// Player client identity, if this attempt uses one
    #[must_use]
    pub fn player_client(&self) -> Option<&str> {
        match &self.kind {
            StrategyKind::PlayerClient(client) => Some(client),
            _ => None,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            StrategyKind::Direct => f.write_str("direct"),
            StrategyKind::PlayerClient(client) => write!(f, "client:{client}"),
            StrategyKind::Mirror(host) => write!(f, "mirror:{host}"),
        }
    }
}

/// Build the ordered strategy list for a source URL
///
/// Platform URLs get one attempt per player client, then (when a content
/// id can be parsed) one attempt per mirror in list one followed by list
/// two. Anything else gets a single direct attempt.
#[must_use]
pub fn plan(source_url: &str, config: &ExtractorConfig) -> Vec<Strategy> {
    let parsed = Url::parse(source_url).ok();

    let Some(url) = parsed.filter(is_platform_url) else {
        return vec![Strategy {
            kind: StrategyKind::Direct,
            url: source_url.to_string(),
        }];
    };

    let mut strategies: Vec<Strategy> = config
        .player_clients
        .iter()
        .map(|client| Strategy {
            kind: StrategyKind::PlayerClient(client.clone()),
            url: source_url.to_string(),
        })
        .collect();

    if let Some(id) = video_id(&url) {
        strategies.extend(
            config
                .piped_mirrors
                .iter()
                .chain(&config.invidious_mirrors)
                .map(|host| Strategy {
                    kind: StrategyKind::Mirror(host.clone()),
                    url: mirror_url(host, &id),
                }),
        );
    }

    strategies
}

fn mirror_url(host: &str, id: &str) -> String {
    format!("https://{host}/watch?v={id}")
}
