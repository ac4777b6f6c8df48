//! Axum router configuration for the chat relay.

use axum::{routing::post, Router};

use crate::adapters::ai::RELAY_PATH;

use super::super::state::AppState;
use super::handlers::relay_chat;

/// Create the relay router.
///
/// # Routes
/// - `POST /functions/v1/ai-event-planner` - Stream a planner completion
pub fn relay_routes() -> Router<AppState> {
    Router::new().route(RELAY_PATH, post(relay_chat))
}
