//! Event module - Events owned by a user.

mod event;

pub use event::{
    parse_attendee_count, Event, EventDraft, CONVERSATION_DESCRIPTION_CHARS,
    CONVERSATION_TITLE_CHARS, DEFAULT_EVENT_TITLE, MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH,
};
