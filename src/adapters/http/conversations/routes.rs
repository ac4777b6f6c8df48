//! Axum router configuration for conversation endpoints.

use axum::{routing::post, Router};

use super::super::state::AppState;
use super::handlers::save_conversation;

/// Create the conversation router, mounted at `/api`.
///
/// # Routes
/// - `POST /conversations` - Save a planner chat
pub fn conversation_routes() -> Router<AppState> {
    Router::new().route("/conversations", post(save_conversation))
}
