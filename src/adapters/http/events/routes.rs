//! Axum router configuration for event and task endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::super::state::AppState;
use super::handlers::{
    add_task, create_event, delete_event, get_event, get_vendor_categories, list_events,
    toggle_task,
};

/// Create the event API router, mounted at `/api`.
///
/// # Routes
/// - `POST /events` - Create an event from the planning form
/// - `GET /events` - List own events, soonest first
/// - `GET /events/:id` - Event with conversation and tasks
/// - `DELETE /events/:id` - Delete an event
/// - `GET /events/:id/vendors` - Vendor categories from the latest plan
/// - `POST /events/:id/tasks` - Add a task
/// - `POST /tasks/:id/toggle` - Toggle task completion
pub fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/events", post(create_event).get(list_events))
        .route("/events/:id", get(get_event).delete(delete_event))
        .route("/events/:id/vendors", get(get_vendor_categories))
        .route("/events/:id/tasks", post(add_task))
        .route("/tasks/:id/toggle", post(toggle_task))
}
