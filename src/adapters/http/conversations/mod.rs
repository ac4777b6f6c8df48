//! HTTP adapter for planner conversations.

mod dto;
mod handlers;
mod routes;

pub use dto::{ConversationMessageRequest, SaveConversationRequest, SaveConversationResponse};
pub use routes::conversation_routes;
