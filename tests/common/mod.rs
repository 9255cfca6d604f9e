//! Shared test utilities
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use media_relay::config::ExtractorConfig;
use media_relay::extract::ExtractCall;
use media_relay::{
    Channel, Engine, Error, ExtractionResult, Extractor, MediaKind, Result,
};
use tokio::sync::Mutex;

/// One outbound call seen by [`MockChannel`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Text { chat_id: i64, text: String },
    Media {
        chat_id: i64,
        kind: MediaKind,
        url: String,
        caption: String,
    },
}

impl Sent {
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text { text, .. } => Some(text),
            Self::Media { .. } => None,
        }
    }
}

/// Mock channel recording every call
pub struct MockChannel {
    sent: Arc<Mutex<Vec<Sent>>>,
    reject: Vec<MediaKind>,
}

impl MockChannel {
    pub fn new() -> Self {
        Self::rejecting(&[])
    }

    /// Channel that rejects the given media kinds
    pub fn rejecting(reject: &[MediaKind]) -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            reject: reject.to_vec(),
        }
    }

    pub async fn sent(&self) -> Vec<Sent> {
        self.sent.lock().await.clone()
    }

    pub async fn media(&self) -> Vec<(MediaKind, String, String)> {
        self.sent()
            .await
            .into_iter()
            .filter_map(|s| match s {
                Sent::Media {
                    kind, url, caption, ..
                } => Some((kind, url, caption)),
                Sent::Text { .. } => None,
            })
            .collect()
    }

    pub async fn texts(&self) -> Vec<String> {
        self.sent()
            .await
            .iter()
            .filter_map(|s| s.text().map(ToString::to_string))
            .collect()
    }
}

#[async_trait]
impl Channel for MockChannel {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn send_message(&self, chat_id: i64, text: &str) -> Result<()> {
        self.sent.lock().await.push(Sent::Text {
            chat_id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_media(
        &self,
        chat_id: i64,
        kind: MediaKind,
        url: &str,
        caption: &str,
    ) -> Result<()> {
        self.sent.lock().await.push(Sent::Media {
            chat_id,
            kind,
            url: url.to_string(),
            caption: caption.to_string(),
        });
        if self.reject.contains(&kind) {
            return Err(Error::Channel(format!("Telegram {kind} error: 400 Bad Request")));
        }
        Ok(())
    }
}

/// One call seen by [`MockExtractor`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorCall {
    pub url: String,
    pub format: String,
    pub player_client: Option<String>,
}

/// Mock extractor replaying scripted results, failing once they run out
pub struct MockExtractor {
    script: Mutex<VecDeque<Result<ExtractionResult>>>,
    calls: Mutex<Vec<ExtractorCall>>,
}

impl MockExtractor {
    pub fn new(script: Vec<Result<ExtractionResult>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Succeeds on the first call
    pub fn resolving(direct_url: &str, title: &str) -> Self {
        Self::new(vec![Ok(ExtractionResult {
            direct_url: direct_url.to_string(),
            title: title.to_string(),
        })])
    }

    /// Fails every call
    pub fn failing() -> Self {
        Self::new(Vec::new())
    }

    pub async fn calls(&self) -> Vec<ExtractorCall> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl Extractor for MockExtractor {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn extract(&self, call: &ExtractCall<'_>) -> Result<ExtractionResult> {
        self.calls.lock().await.push(ExtractorCall {
            url: call.url.to_string(),
            format: call.format.to_string(),
            player_client: call.player_client.map(ToString::to_string),
        });
        self.script
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(Error::Extraction("ERROR: Sign in to confirm your age".to_string())))
    }
}

/// Extractor configuration with short, predictable mirror lists
pub fn test_extractor_config() -> ExtractorConfig {
    ExtractorConfig {
        player_clients: vec![
            "android".into(),
            "ios".into(),
            "tv_embedded".into(),
            "web".into(),
        ],
        piped_mirrors: vec!["piped.test".into()],
        invidious_mirrors: vec!["invidious.test".into()],
        ..ExtractorConfig::default()
    }
}

/// Engine over a mock extractor
pub fn engine(extractor: &Arc<MockExtractor>) -> Engine {
    Engine::new(extractor.clone(), test_extractor_config())
}

/// Poll until the channel has recorded at least `count` calls, up to two seconds
pub async fn wait_for_sent(channel: &MockChannel, count: usize) -> bool {
    for _ in 0..200 {
        if channel.sent().await.len() >= count {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    false
}
