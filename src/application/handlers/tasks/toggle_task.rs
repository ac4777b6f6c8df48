//! ToggleTaskHandler - Flips a task's completion.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, TaskId, UserId};
use crate::domain::task::Task;
use crate::ports::{EventRepository, TaskRepository};

use super::super::access::load_owned_event;

#[derive(Debug, Clone)]
pub struct ToggleTaskCommand {
    pub user_id: UserId,
    pub task_id: TaskId,
}

pub struct ToggleTaskHandler {
    events: Arc<dyn EventRepository>,
    tasks: Arc<dyn TaskRepository>,
}

impl ToggleTaskHandler {
    pub fn new(events: Arc<dyn EventRepository>, tasks: Arc<dyn TaskRepository>) -> Self {
        Self { events, tasks }
    }

    /// Returns the task with its new completion state.
    pub async fn handle(&self, cmd: ToggleTaskCommand) -> Result<Task, DomainError> {
        let mut task = self
            .tasks
            .find_by_id(&cmd.task_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::TaskNotFound, "Task not found")
                    .with_detail("task_id", cmd.task_id.to_string())
            })?;

        load_owned_event(self.events.as_ref(), &task.event_id, &cmd.user_id).await?;

        let completed = task.toggle();
        self.tasks.set_completed(&task.id, completed).await?;

        Ok(task)
    }
}
