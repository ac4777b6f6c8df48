//! DeleteEventHandler - Removes an event with its conversation and tasks.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, EventId, UserId};
use crate::ports::EventRepository;

use super::super::access::load_owned_event;

#[derive(Debug, Clone)]
pub struct DeleteEventCommand {
    pub user_id: UserId,
    pub event_id: EventId,
}

pub struct DeleteEventHandler {
    events: Arc<dyn EventRepository>,
}

impl DeleteEventHandler {
    pub fn new(events: Arc<dyn EventRepository>) -> Self {
        Self { events }
    }

    pub async fn handle(&self, cmd: DeleteEventCommand) -> Result<(), DomainError> {
        let event = load_owned_event(self.events.as_ref(), &cmd.event_id, &cmd.user_id).await?;

        if !self.events.delete(&event.id).await? {
            return Err(DomainError::new(ErrorCode::EventNotFound, "Event not found"));
        }

        tracing::info!(event_id = %event.id, "Event deleted");
        Ok(())
    }
}
