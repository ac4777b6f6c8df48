//! HTTP handler for saving planner conversations.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::SaveConversationCommand;

use super::super::error::ApiError;
use super::super::middleware::RequireAuth;
use super::super::state::AppState;
use super::dto::{SaveConversationRequest, SaveConversationResponse};

/// POST /api/conversations
///
/// Responds 201 when a new event was created, 200 when appending.
pub async fn save_conversation(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<SaveConversationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .save_conversation_handler()
        .handle(SaveConversationCommand {
            user_id: user.id,
            event_id: request.event_id,
            messages: request.messages.into_iter().map(Into::into).collect(),
        })
        .await?;

    let status = if result.event_created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(SaveConversationResponse::from(result))))
}
