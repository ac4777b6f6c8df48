//! CreateEventHandler - Command handler for creating an event from the planning form.

use std::sync::Arc;

use crate::domain::event::{Event, EventDraft};
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::EventRepository;

#[derive(Debug, Clone)]
pub struct CreateEventCommand {
    pub user_id: UserId,
    pub draft: EventDraft,
}

pub struct CreateEventHandler {
    events: Arc<dyn EventRepository>,
}

impl CreateEventHandler {
    pub fn new(events: Arc<dyn EventRepository>) -> Self {
        Self { events }
    }

    pub async fn handle(&self, cmd: CreateEventCommand) -> Result<Event, DomainError> {
        let event = Event::create(cmd.user_id, cmd.draft)?;
        self.events.save(&event).await?;

        tracing::info!(event_id = %event.id, "Event created");
        Ok(event)
    }
}
