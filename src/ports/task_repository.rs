//! Task repository port.

use crate::domain::foundation::{DomainError, EventId, TaskId};
use crate::domain::task::Task;
use async_trait::async_trait;

#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn save(&self, task: &Task) -> Result<(), DomainError>;

    /// Persist several tasks atomically.
    async fn save_all(&self, tasks: &[Task]) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, DomainError>;

    /// Store a new completion flag.
    ///
    /// # Errors
    ///
    /// - `TaskNotFound` if the task does not exist
    async fn set_completed(&self, id: &TaskId, completed: bool) -> Result<(), DomainError>;

    /// The event's tasks ordered by creation time.
    async fn list_by_event(&self, event_id: &EventId) -> Result<Vec<Task>, DomainError>;
}
