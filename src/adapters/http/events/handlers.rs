//! HTTP handlers for event and task endpoints.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{
    AddTaskCommand, CreateEventCommand, DeleteEventCommand, GetEventDetailsQuery,
    ListEventsQuery, SuggestVendorCategoriesQuery, ToggleTaskCommand,
};
use crate::domain::event::EventDraft;
use crate::domain::foundation::{EventId, TaskId};

use super::super::error::ApiError;
use super::super::middleware::RequireAuth;
use super::super::state::AppState;
use super::dto::{
    AddTaskRequest, EventDetailsResponse, EventResponse, TaskResponse, VendorCategoriesResponse,
};

fn parse_event_id(raw: &str) -> Result<EventId, ApiError> {
    raw.parse().map_err(|e| ApiError::invalid_param("event_id", e))
}

fn parse_task_id(raw: &str) -> Result<TaskId, ApiError> {
    raw.parse().map_err(|e| ApiError::invalid_param("task_id", e))
}

// ════════════════════════════════════════════════════════════════════════════════
// Events
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/events
pub async fn create_event(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(draft): Json<EventDraft>,
) -> Result<impl IntoResponse, ApiError> {
    let event = state
        .create_event_handler()
        .handle(CreateEventCommand {
            user_id: user.id,
            draft,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(EventResponse::from(event))))
}

/// GET /api/events
pub async fn list_events(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let events = state
        .list_events_handler()
        .handle(ListEventsQuery { user_id: user.id })
        .await?;

    let response: Vec<EventResponse> = events.into_iter().map(EventResponse::from).collect();
    Ok(Json(response))
}

/// GET /api/events/:id
pub async fn get_event(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let details = state
        .event_details_handler()
        .handle(GetEventDetailsQuery {
            user_id: user.id,
            event_id: parse_event_id(&id)?,
        })
        .await?;

    Ok(Json(EventDetailsResponse::from(details)))
}

/// DELETE /api/events/:id
pub async fn delete_event(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .delete_event_handler()
        .handle(DeleteEventCommand {
            user_id: user.id,
            event_id: parse_event_id(&id)?,
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/events/:id/vendors
pub async fn get_vendor_categories(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let categories = state
        .vendor_categories_handler()
        .handle(SuggestVendorCategoriesQuery {
            user_id: user.id,
            event_id: parse_event_id(&id)?,
        })
        .await?;

    Ok(Json(VendorCategoriesResponse { categories }))
}

// ════════════════════════════════════════════════════════════════════════════════
// Tasks
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/events/:id/tasks
pub async fn add_task(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
    Json(request): Json<AddTaskRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let task = state
        .add_task_handler()
        .handle(AddTaskCommand {
            user_id: user.id,
            event_id: parse_event_id(&id)?,
            title: request.title,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(TaskResponse::from(task))))
}

/// POST /api/tasks/:id/toggle
pub async fn toggle_task(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let task = state
        .toggle_task_handler()
        .handle(ToggleTaskCommand {
            user_id: user.id,
            task_id: parse_task_id(&id)?,
        })
        .await?;

    Ok(Json(TaskResponse::from(task)))
}
