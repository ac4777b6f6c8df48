//! Completion Gateway Port - Interface to a hosted chat-completion service.
//!
//! The relay does not interpret model output. It opens a streaming completion
//! and hands the raw response bytes (OpenAI-style SSE frames) back to the
//! caller unchanged, so this port deals in bytes rather than parsed chunks.

use async_trait::async_trait;
use futures::Stream;
use serde::{Deserialize, Serialize};
use std::pin::Pin;
use thiserror::Error;

/// Raw body of a streaming completion.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Vec<u8>, GatewayError>> + Send>>;

/// Port for opening streaming chat completions.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Opens a streaming completion.
    ///
    /// Resolves once the upstream status is known: non-success statuses are
    /// classified into `GatewayError` before any body byte is returned.
    async fn open_stream(&self, request: ChatRequest) -> Result<ByteStream, GatewayError>;

    /// Model identifier requests are sent with.
    fn model(&self) -> &str;
}

/// A chat message as exchanged with the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }
}

/// A conversation to complete, with its system prompt kept separate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub system_prompt: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatRequest {
    pub fn new(system_prompt: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            messages,
        }
    }

    /// System prompt followed by the conversation, as sent upstream.
    pub fn to_wire_messages(&self) -> Vec<ChatMessage> {
        let mut wire = Vec::with_capacity(self.messages.len() + 1);
        wire.push(ChatMessage::system(self.system_prompt.clone()));
        wire.extend(self.messages.iter().cloned());
        wire
    }
}

/// Errors from the completion gateway.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// A required setting (usually the API key) is missing.
    #[error("{0} is not configured")]
    NotConfigured(String),

    /// Upstream answered 429.
    #[error("Rate limits exceeded, please try again later.")]
    RateLimited,

    /// Upstream answered 402.
    #[error("Payment required, please add funds to your AI workspace.")]
    PaymentRequired,

    /// Upstream answered any other non-success status.
    #[error("AI gateway error")]
    Upstream { status: u16, body: String },

    /// The request could not be sent or the body broke off.
    #[error("Network error: {0}")]
    Network(String),
}

impl GatewayError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Classifies a non-success upstream status.
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        match status {
            429 => Self::RateLimited,
            402 => Self::PaymentRequired,
            _ => Self::Upstream {
                status,
                body: body.into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_messages_start_with_system_prompt() {
        let request = ChatRequest::new(
            "You plan events",
            vec![ChatMessage::new("user", "Birthday party")],
        );
        let wire = request.to_wire_messages();

        assert_eq!(wire.len(), 2);
        assert_eq!(wire[0], ChatMessage::system("You plan events"));
        assert_eq!(wire[1].role, "user");
    }

    #[test]
    fn from_status_classifies_known_statuses() {
        assert_eq!(GatewayError::from_status(429, ""), GatewayError::RateLimited);
        assert_eq!(GatewayError::from_status(402, ""), GatewayError::PaymentRequired);
        assert_eq!(
            GatewayError::from_status(503, "down"),
            GatewayError::Upstream {
                status: 503,
                body: "down".to_string()
            }
        );
    }

    #[test]
    fn error_messages_match_client_contract() {
        assert_eq!(
            GatewayError::RateLimited.to_string(),
            "Rate limits exceeded, please try again later."
        );
        assert_eq!(
            GatewayError::from_status(500, "x").to_string(),
            "AI gateway error"
        );
        assert_eq!(
            GatewayError::NotConfigured("AI gateway API key".to_string()).to_string(),
            "AI gateway API key is not configured"
        );
    }

    #[test]
    fn completion_gateway_is_object_safe() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn CompletionGateway>();
    }
}
