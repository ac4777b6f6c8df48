//! SaveConversationHandler - Persists a planner chat as an event conversation.
//!
//! Without an event id a new event is derived from the chat itself. The
//! planner's greeting is never stored. Messages are appended with creation
//! times one millisecond apart so stored order matches chat order; resending
//! a message with a known id does not duplicate it.

use std::sync::Arc;

use crate::domain::conversation::{Message, Role};
use crate::domain::event::Event;
use crate::domain::foundation::{
    DomainError, EventId, MessageId, Timestamp, UserId, ValidationError,
};
use crate::domain::planner::WELCOME_MESSAGE;
use crate::ports::{EventRepository, MessageRepository};

use super::super::access::load_owned_event;

/// One chat message as sent by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationEntry {
    pub id: Option<MessageId>,
    pub role: String,
    pub content: String,
}

impl ConversationEntry {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: None,
            role: role.into(),
            content: content.into(),
        }
    }

    fn is_welcome(&self) -> bool {
        self.role == Role::Assistant.as_str() && self.content == WELCOME_MESSAGE
    }
}

#[derive(Debug, Clone)]
pub struct SaveConversationCommand {
    pub user_id: UserId,
    pub event_id: Option<EventId>,
    pub messages: Vec<ConversationEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveConversationResult {
    pub event_id: EventId,
    pub event_created: bool,
    pub messages_saved: usize,
}

pub struct SaveConversationHandler {
    events: Arc<dyn EventRepository>,
    messages: Arc<dyn MessageRepository>,
}

impl SaveConversationHandler {
    pub fn new(events: Arc<dyn EventRepository>, messages: Arc<dyn MessageRepository>) -> Self {
        Self { events, messages }
    }

    pub async fn handle(
        &self,
        cmd: SaveConversationCommand,
    ) -> Result<SaveConversationResult, DomainError> {
        let messages = to_messages(&cmd.messages)?;

        let (event, event_created) = match cmd.event_id {
            Some(event_id) => (
                load_owned_event(self.events.as_ref(), &event_id, &cmd.user_id).await?,
                false,
            ),
            None => {
                let event = Event::from_conversation(cmd.user_id, &messages);
                self.events.save(&event).await?;
                tracing::info!(event_id = %event.id, "Event created from conversation");
                (event, true)
            }
        };

        let messages_saved = self.messages.append(&event.id, &messages).await?;

        Ok(SaveConversationResult {
            event_id: event.id,
            event_created,
            messages_saved,
        })
    }
}

fn to_messages(entries: &[ConversationEntry]) -> Result<Vec<Message>, ValidationError> {
    let entries = match entries.first() {
        Some(first) if first.is_welcome() => &entries[1..],
        _ => entries,
    };
    if entries.is_empty() {
        return Err(ValidationError::empty_field("messages"));
    }

    let base = Timestamp::now();
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let role = Role::parse(&entry.role).ok_or_else(|| {
                ValidationError::invalid_format("role", "must be 'user' or 'assistant'")
            })?;
            if entry.content.trim().is_empty() {
                return Err(ValidationError::empty_field("content"));
            }
            Ok(Message::reconstitute(
                entry.id.unwrap_or_default(),
                role,
                entry.content.clone(),
                base.plus_millis(i as i64),
            ))
        })
        .collect()
}
