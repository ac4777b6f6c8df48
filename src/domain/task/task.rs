//! Event tasks.
//!
//! Tasks are added by hand or imported in bulk from the latest assistant plan.
//! After creation the only mutation is toggling completion.

use crate::domain::conversation::Message;
use crate::domain::foundation::{EventId, TaskId, Timestamp, ValidationError};
use serde::{Deserialize, Serialize};

pub const MAX_TASK_TITLE_LENGTH: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub event_id: EventId,
    pub title: String,
    pub completed: bool,
    pub created_at: Timestamp,
}

impl Task {
    /// Creates an open task from user input.
    pub fn new(event_id: EventId, title: &str) -> Result<Self, ValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if title.chars().count() > MAX_TASK_TITLE_LENGTH {
            return Err(ValidationError::too_long("title", MAX_TASK_TITLE_LENGTH));
        }
        Ok(Self::open(event_id, title.to_string(), Timestamp::now()))
    }

    fn open(event_id: EventId, title: String, created_at: Timestamp) -> Self {
        Self {
            id: TaskId::new(),
            event_id,
            title,
            completed: false,
            created_at,
        }
    }

    /// Flips completion and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}

/// Whether an event's plan should be imported as tasks.
///
/// Import happens once: only while the event has no tasks and already has a
/// conversation to extract from.
pub fn should_import_tasks(existing_tasks: usize, messages: &[Message]) -> bool {
    existing_tasks == 0 && !messages.is_empty()
}

/// Builds open tasks for extracted titles.
///
/// Creation times are spaced one millisecond apart so that listing by
/// `created_at` preserves extraction order.
pub fn import_tasks(event_id: EventId, titles: &[String]) -> Vec<Task> {
    let base = Timestamp::now();
    titles
        .iter()
        .enumerate()
        .map(|(i, title)| Task::open(event_id, title.clone(), base.plus_millis(i as i64)))
        .collect()
}
