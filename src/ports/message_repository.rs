//! Conversation message repository port.
//!
//! Messages are append-only. Appending is idempotent per message id so a
//! conversation can be saved more than once without duplicating history.

use crate::domain::conversation::Message;
use crate::domain::foundation::{DomainError, EventId};
use async_trait::async_trait;

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Append messages to an event's conversation, skipping ids already stored.
    ///
    /// Returns the number of newly stored messages.
    async fn append(&self, event_id: &EventId, messages: &[Message]) -> Result<usize, DomainError>;

    /// The event's conversation ordered by creation time.
    async fn list_by_event(&self, event_id: &EventId) -> Result<Vec<Message>, DomainError>;
}
