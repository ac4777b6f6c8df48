//! AddTaskHandler - Command handler for adding a task to an event by hand.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, EventId, UserId};
use crate::domain::task::Task;
use crate::ports::{EventRepository, TaskRepository};

use super::super::access::load_owned_event;

#[derive(Debug, Clone)]
pub struct AddTaskCommand {
    pub user_id: UserId,
    pub event_id: EventId,
    pub title: String,
}

pub struct AddTaskHandler {
    events: Arc<dyn EventRepository>,
    tasks: Arc<dyn TaskRepository>,
}

impl AddTaskHandler {
    pub fn new(events: Arc<dyn EventRepository>, tasks: Arc<dyn TaskRepository>) -> Self {
        Self { events, tasks }
    }

    pub async fn handle(&self, cmd: AddTaskCommand) -> Result<Task, DomainError> {
        let event = load_owned_event(self.events.as_ref(), &cmd.event_id, &cmd.user_id).await?;
        let task = Task::new(event.id, &cmd.title)?;
        self.tasks.save(&task).await?;

        tracing::debug!(event_id = %event.id, task_id = %task.id, "Task added");
        Ok(task)
    }
}
