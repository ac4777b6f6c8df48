//! Conversation domain module.
//!
//! Role-tagged, append-only message history attached to an event.

mod message;

pub use message::{
    last_assistant_message, validate_user_content, Message, Role, MAX_MESSAGE_LENGTH,
};
