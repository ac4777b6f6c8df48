//! Message entity for event conversations.
//!
//! Messages are immutable records of user/assistant exchanges. A conversation
//! is append-only and ordered by creation time.

use crate::domain::foundation::{MessageId, Timestamp, ValidationError};
use serde::{Deserialize, Serialize};

/// Maximum allowed length of a user-authored message, in characters.
pub const MAX_MESSAGE_LENGTH: usize = 10_000;

/// Role of a message sender in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// User input.
    User,
    /// AI assistant response.
    Assistant,
}

impl Role {
    /// Wire/database representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }

    /// Parses the wire/database representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "user" => Some(Role::User),
            "assistant" => Some(Role::Assistant),
            _ => None,
        }
    }
}

/// An immutable message within a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub role: Role,
    pub content: String,
    pub created_at: Timestamp,
}

impl Message {
    /// Creates a message stamped with the current time.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            role,
            content: content.into(),
            created_at: Timestamp::now(),
        }
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Creates an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Rebuilds a message from stored fields.
    pub fn reconstitute(
        id: MessageId,
        role: Role,
        content: String,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            role,
            content,
            created_at,
        }
    }

    pub fn is_assistant(&self) -> bool {
        self.role == Role::Assistant
    }
}

/// Validates text a user is about to send, returning it trimmed.
pub fn validate_user_content(content: &str) -> Result<&str, ValidationError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field("content"));
    }
    if trimmed.chars().count() > MAX_MESSAGE_LENGTH {
        return Err(ValidationError::too_long("content", MAX_MESSAGE_LENGTH));
    }
    Ok(trimmed)
}

/// Returns the most recent assistant-authored message, if any.
pub fn last_assistant_message(messages: &[Message]) -> Option<&Message> {
    messages.iter().rev().find(|m| m.is_assistant())
}
