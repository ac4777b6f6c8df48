//! HTTP DTOs for saving planner conversations.

use serde::{Deserialize, Serialize};

use crate::application::handlers::{ConversationEntry, SaveConversationResult};
use crate::domain::foundation::{EventId, MessageId};

#[derive(Debug, Clone, Deserialize)]
pub struct ConversationMessageRequest {
    /// Client-side id; resending the same id does not duplicate the message.
    #[serde(default)]
    pub id: Option<MessageId>,
    pub role: String,
    pub content: String,
}

impl From<ConversationMessageRequest> for ConversationEntry {
    fn from(request: ConversationMessageRequest) -> Self {
        Self {
            id: request.id,
            role: request.role,
            content: request.content,
        }
    }
}

/// Request to save a chat. Without `event_id` a new event is created.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveConversationRequest {
    #[serde(default)]
    pub event_id: Option<EventId>,
    pub messages: Vec<ConversationMessageRequest>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SaveConversationResponse {
    pub event_id: String,
    pub event_created: bool,
    pub messages_saved: usize,
}

impl From<SaveConversationResult> for SaveConversationResponse {
    fn from(result: SaveConversationResult) -> Self {
        Self {
            event_id: result.event_id.to_string(),
            event_created: result.event_created,
            messages_saved: result.messages_saved,
        }
    }
}
