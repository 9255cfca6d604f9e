//! HTTP API server
//!
//! Hosts the Telegram webhook and a liveness probe.

mod health;
pub mod webhooks;

use std::sync::Arc;

use axum::Router;
use axum::routing::post;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::channels::{Channel, TelegramChannel};
use crate::extract::Engine;
use crate::{Config, Result};

/// Shared state for request handlers
///
/// Built once at startup and never mutated.
pub struct AppState {
    /// Outbound channel; `None` when no bot token is configured
    pub channel: Option<Arc<dyn Channel>>,
    /// Extraction engine
    pub engine: Engine,
}

impl AppState {
    /// Create state from parts
    #[must_use]
    pub fn new(channel: Option<Arc<dyn Channel>>, engine: Engine) -> Self {
        Self { channel, engine }
    }

    /// Create production state: Telegram (if a token is set) and yt-dlp
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built
    pub fn from_config(config: &Config) -> Result<Self> {
        let channel: Option<Arc<dyn Channel>> = match config.bot_token() {
            Some(token) => Some(Arc::new(TelegramChannel::new(token, &config.telegram)?)),
            None => {
                tracing::warn!("BOT_TOKEN not set: updates will be accepted and ignored");
                None
            }
        };

        Ok(Self::new(channel, Engine::from_config(config)))
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("channel", &self.channel.as_ref().map(|c| c.name()))
            .field("engine", &self.engine)
            .finish()
    }
}

/// API server
pub struct ApiServer {
    state: Arc<AppState>,
    port: u16,
}

impl ApiServer {
    /// Create a new API server
    #[must_use]
    pub fn new(state: AppState, port: u16) -> Self {
        Self {
            state: Arc::new(state),
            port,
        }
    }

    /// Build the router with all routes
    ///
    /// The Telegram handler is also mounted at `/` for hosts that route
    /// every request to the root.
    #[must_use]
    pub fn router(&self) -> Router {
        Router::new()
            .nest("/api/webhooks", webhooks::router(self.state.clone()))
            .merge(
                Router::new()
                    .route("/", post(webhooks::telegram::handle_update))
                    .with_state(self.state.clone()),
            )
            .merge(health::router())
            .layer(TraceLayer::new_for_http())
    }

    /// Run the API server until Ctrl-C
    ///
    /// # Errors
    ///
    /// Returns error if server fails to bind or run
    pub async fn run(self) -> Result<()> {
        let addr = format!("0.0.0.0:{}", self.port);
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| crate::Error::Config(format!("failed to bind API server: {e}")))?;

        tracing::info!(port = self.port, "API server listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(async {
                if tokio::signal::ctrl_c().await.is_ok() {
                    tracing::info!("shutdown signal received");
                }
            })
            .await
            .map_err(|e| crate::Error::Config(format!("API server error: {e}")))?;

        Ok(())
    }
}
