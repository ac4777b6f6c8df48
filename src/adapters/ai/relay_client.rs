//! Client for the planner chat relay.
//!
//! Posts the conversation to the relay endpoint and turns the relayed SSE
//! body into a stream of text deltas. Finished chats are saved through the
//! conversations API on the same server.

use futures::stream::{self, Stream, StreamExt};
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::future;
use std::pin::Pin;
use std::time::Duration;
use thiserror::Error;

use super::sse::{SseEvent, SseLineDecoder};
use crate::domain::conversation::Message;
use crate::domain::foundation::{EventId, MessageId};
use crate::domain::planner::RelayFailure;
use crate::ports::ChatMessage;

pub const RELAY_PATH: &str = "/functions/v1/ai-event-planner";
pub const CONVERSATIONS_PATH: &str = "/api/conversations";

pub type DeltaStream = Pin<Box<dyn Stream<Item = Result<String, RelayError>> + Send>>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("Payment required")]
    PaymentRequired,

    #[error("Relay returned status {status}")]
    Upstream { status: u16 },

    #[error("Network error: {0}")]
    Network(String),
}

impl RelayError {
    pub fn from_status(status: u16) -> Self {
        match status {
            429 => Self::RateLimited,
            402 => Self::PaymentRequired,
            _ => Self::Upstream { status },
        }
    }

    /// What the user is told.
    pub fn failure(&self) -> RelayFailure {
        match self {
            Self::RateLimited => RelayFailure::RateLimited,
            Self::PaymentRequired => RelayFailure::PaymentRequired,
            Self::Upstream { .. } | Self::Network(_) => RelayFailure::Other,
        }
    }
}

pub struct RelayClient {
    client: Client,
    endpoint: String,
    conversations_endpoint: String,
    credential: Secret<String>,
}

impl RelayClient {
    pub fn new(
        base_url: &str,
        credential: Secret<String>,
        connect_timeout: Duration,
    ) -> Result<Self, RelayError> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| RelayError::Network(e.to_string()))?;

        let base_url = base_url.trim_end_matches('/');
        Ok(Self {
            client,
            endpoint: format!("{}{}", base_url, RELAY_PATH),
            conversations_endpoint: format!("{}{}", base_url, CONVERSATIONS_PATH),
            credential,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends the whole conversation and streams back the reply text.
    pub async fn stream_chat(&self, messages: &[Message]) -> Result<DeltaStream, RelayError> {
        let body = RelayRequest {
            messages: messages
                .iter()
                .map(|m| ChatMessage::new(m.role.as_str(), m.content.clone()))
                .collect(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.credential.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::from_status(status.as_u16()));
        }

        let bytes = response.bytes_stream().map(|chunk| {
            chunk
                .map(|b| b.to_vec())
                .map_err(|e| RelayError::Network(e.to_string()))
        });
        Ok(decode_deltas(bytes))
    }

    /// Saves the chat into `event_id`, or into a new event when `None`.
    ///
    /// Message ids travel with the request, so saving the same chat again
    /// only stores the messages added since.
    pub async fn save_conversation(
        &self,
        event_id: Option<EventId>,
        messages: &[Message],
    ) -> Result<SavedConversation, RelayError> {
        let response = self
            .client
            .post(&self.conversations_endpoint)
            .bearer_auth(self.credential.expose_secret())
            .json(&SaveRequest::new(event_id, messages))
            .send()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::from_status(status.as_u16()));
        }

        response
            .json::<SavedConversation>()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SavedConversation {
    pub event_id: EventId,
    pub event_created: bool,
    pub messages_saved: usize,
}

/// Decodes an SSE byte stream into text deltas, ending at `[DONE]`.
pub fn decode_deltas<S>(bytes: S) -> DeltaStream
where
    S: Stream<Item = Result<Vec<u8>, RelayError>> + Send + 'static,
{
    let mut decoder = SseLineDecoder::new();
    let events = bytes
        .map(move |chunk| match chunk {
            Ok(bytes) => decoder.push(&bytes).into_iter().map(Ok).collect(),
            Err(e) => vec![Err(e)],
        })
        .flat_map(stream::iter)
        .take_while(|event| future::ready(!matches!(event, Ok(SseEvent::Done))))
        .map(|event| {
            event.map(|e| match e {
                SseEvent::Delta(text) => text,
                SseEvent::Done => String::new(),
            })
        });

    Box::pin(events)
}

#[derive(Debug, Serialize)]
struct RelayRequest {
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct SaveRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    event_id: Option<EventId>,
    messages: Vec<SaveMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct SaveMessage<'a> {
    id: MessageId,
    role: &'a str,
    content: &'a str,
}

impl<'a> SaveRequest<'a> {
    fn new(event_id: Option<EventId>, messages: &'a [Message]) -> Self {
        Self {
            event_id,
            messages: messages
                .iter()
                .map(|m| SaveMessage {
                    id: m.id,
                    role: m.role.as_str(),
                    content: &m.content,
                })
                .collect(),
        }
    }
}
