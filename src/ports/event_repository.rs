//! Event repository port.
//!
//! Events own their messages and tasks: deleting an event removes both.

use crate::domain::event::Event;
use crate::domain::foundation::{DomainError, EventId, UserId};
use async_trait::async_trait;

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Persist a new event.
    async fn save(&self, event: &Event) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, DomainError>;

    /// Events owned by `user_id` in dashboard order
    /// (date ascending, undated last, then creation time).
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Event>, DomainError>;

    /// Delete an event with its messages and tasks.
    ///
    /// Returns `false` if the event did not exist.
    async fn delete(&self, id: &EventId) -> Result<bool, DomainError>;
}
