//! Webhook endpoints

use std::sync::Arc;

use axum::{Router, routing::post};

use super::AppState;

pub mod telegram;

/// Build webhooks router
#[must_use]
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/telegram", post(telegram::handle_update))
        .with_state(state)
}
