//! HTTP DTOs for the planner chat relay.

use serde::{Deserialize, Serialize};

use crate::ports::ChatMessage;

/// Request body: the chat so far, oldest first.
#[derive(Debug, Clone, Deserialize)]
pub struct RelayRequest {
    pub messages: Vec<ChatMessage>,
}

/// Relay failures carry only a message, matching what chat clients parse.
#[derive(Debug, Clone, Serialize)]
pub struct RelayErrorResponse {
    pub error: String,
}
