//! Fallback chain runner

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

use super::strategy::{Strategy, plan};
use super::{CookieFile, ExtractCall, ExtractionRequest, ExtractionResult, Extractor, YtDlp};
use super::format::format_expression;
use crate::config::{Config, ExtractorConfig};
use crate::{Error, Result};

/// Resolves source URLs by walking the strategy list in order
pub struct Engine {
    extractor: Arc<dyn Extractor>,
    config: ExtractorConfig,
    cookies_b64: Option<SecretString>,
}

impl Engine {
    /// Create an engine around any extraction backend
    #[must_use]
    pub fn new(extractor: Arc<dyn Extractor>, config: ExtractorConfig) -> Self {
        Self {
            extractor,
            config,
            cookies_b64: None,
        }
    }

    /// Create the production engine backed by yt-dlp
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let backend = Arc::new(YtDlp::new(&config.extractor));
        Self::new(backend, config.extractor.clone()).with_cookies(config.cookies_b64())
    }

    /// Attach a base64 cookie bundle, decoded per request
    #[must_use]
    pub fn with_cookies(mut self, encoded: Option<&str>) -> Self {
        self.cookies_b64 = encoded.map(|s| SecretString::from(s.to_string()));
        self
    }

    /// Ordered strategies for a request
    #[must_use]
    pub fn strategies(&self, request: &ExtractionRequest) -> Vec<Strategy> {
        plan(&request.source_url, &self.config)
    }

    /// Decode the cookie bundle for one chain run
    ///
    /// A broken bundle is logged and the chain continues without cookies.
    fn cookie_file(&self) -> Option<CookieFile> {
        let encoded = self.cookies_b64.as_ref()?;
        match CookieFile::from_base64(encoded.expose_secret()) {
            Ok(file) => Some(file),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring cookie bundle");
                None
            }
        }
    }

    /// Resolve a request to a direct media URL
    ///
    /// Each failed attempt is logged and the next strategy runs. The cookie
    /// file, if any, is removed when this returns.
    ///
    /// # Errors
    ///
    /// Returns the last attempt's error once every strategy has failed, or
    /// [`Error::NotFound`] if no attempt produced one
    pub async fn resolve(&self, request: &ExtractionRequest) -> Result<ExtractionResult> {
        let format = format_expression(request);
        let strategies = self.strategies(request);
        let cookies = self.cookie_file();
        let cookie_path = cookies.as_ref().map(CookieFile::path);

        let mut last_error = None;

        for (attempt, strategy) in strategies.iter().enumerate() {
            let call = ExtractCall {
                url: &strategy.url,
                format,
                player_client: strategy.player_client(),
                cookie_file: cookie_path,
            };

            tracing::debug!(
                backend = self.extractor.name(),
                attempt = attempt + 1,
                total = strategies.len(),
                strategy = %strategy,
                url = %strategy.url,
                "extraction attempt"
            );

            match self.extractor.extract(&call).await {
                Ok(result) if !result.direct_url.trim().is_empty() => {
                    tracing::info!(strategy = %strategy, title = %result.title, "extraction succeeded");
                    return Ok(result);
                }
                Ok(_) => {
                    tracing::warn!(strategy = %strategy, "extractor returned an empty direct URL");
                    last_error = Some(Error::Extraction(format!(
                        "{strategy}: empty direct URL"
                    )));
                }
                Err(e) => {
                    tracing::warn!(strategy = %strategy, error = %e, "extraction attempt failed");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            Error::NotFound(format!("no direct media URL for {}", request.source_url))
        }))
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("backend", &self.extractor.name())
            .field("player_clients", &self.config.player_clients)
            .field("cookies", &self.cookies_b64.is_some())
            .finish_non_exhaustive()
    }
}
