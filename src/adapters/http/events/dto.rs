//! HTTP DTOs for event and task endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::conversation::Message;
use crate::domain::event::Event;
use crate::domain::planner::{EventDetailState, Notice};
use crate::domain::task::Task;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to add a task by hand.
#[derive(Debug, Clone, Deserialize)]
pub struct AddTaskRequest {
    #[serde(default)]
    pub title: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct EventResponse {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    /// `YYYY-MM-DD`
    pub date: Option<String>,
    pub location: Option<String>,
    pub attendee_count: u32,
    pub event_type: Option<String>,
    pub created_at: String,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id.to_string(),
            title: event.title,
            description: event.description,
            date: event.date.map(|d| d.format("%Y-%m-%d").to_string()),
            location: event.location,
            attendee_count: event.attendee_count,
            event_type: event.event_type,
            created_at: event.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub id: String,
    pub role: &'static str,
    pub content: String,
    pub created_at: String,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id.to_string(),
            role: message.role.as_str(),
            content: message.content,
            created_at: message.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskResponse {
    pub id: String,
    pub event_id: String,
    pub title: String,
    pub completed: bool,
    pub created_at: String,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id.to_string(),
            event_id: task.event_id.to_string(),
            title: task.title,
            completed: task.completed,
            created_at: task.created_at.to_rfc3339(),
        }
    }
}

/// Event page: the event, its conversation and its tasks.
#[derive(Debug, Clone, Serialize)]
pub struct EventDetailsResponse {
    pub event: Option<EventResponse>,
    pub messages: Vec<MessageResponse>,
    pub tasks: Vec<TaskResponse>,
    pub completed_tasks: usize,
    /// Set when tasks were just imported from the plan.
    pub notice: Option<Notice>,
}

impl From<EventDetailState> for EventDetailsResponse {
    fn from(state: EventDetailState) -> Self {
        let completed_tasks = state.completed_count();
        Self {
            event: state.event.map(EventResponse::from),
            messages: state.messages.into_iter().map(MessageResponse::from).collect(),
            tasks: state.tasks.into_iter().map(TaskResponse::from).collect(),
            completed_tasks,
            notice: state.notice,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VendorCategoriesResponse {
    pub categories: Vec<String>,
}
