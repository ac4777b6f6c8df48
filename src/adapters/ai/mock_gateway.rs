//! Mock completion gateway for testing.
//!
//! Responses are queued and consumed in order; every request is recorded.
//!
//! # Example
//!
//! ```ignore
//! let gateway = MockCompletionGateway::new()
//!     .with_deltas(&["Hello", ", world"])
//!     .with_error(GatewayError::RateLimited);
//! ```

use async_trait::async_trait;
use futures::stream;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::ports::{ByteStream, ChatRequest, CompletionGateway, GatewayError};

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Stream these body chunks verbatim.
    Stream(Vec<Vec<u8>>),
    /// Wait before the upstream answers, then stream the chunks.
    Delayed(Duration, Vec<Vec<u8>>),
    /// Fail when opening the stream.
    Error(GatewayError),
}

#[derive(Debug, Clone)]
pub struct MockCompletionGateway {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    calls: Arc<Mutex<Vec<ChatRequest>>>,
    model: String,
}

impl Default for MockCompletionGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCompletionGateway {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            model: "mock-model".to_string(),
        }
    }

    pub fn with_response(self, response: MockResponse) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    /// Queues an OpenAI-style SSE body carrying `deltas`, terminated by `[DONE]`.
    pub fn with_deltas(self, deltas: &[&str]) -> Self {
        let chunks = sse_body(deltas)
            .into_iter()
            .map(String::into_bytes)
            .collect();
        self.with_response(MockResponse::Stream(chunks))
    }

    /// Like `with_deltas`, but the upstream takes `delay` to answer.
    pub fn with_slow_deltas(self, delay: Duration, deltas: &[&str]) -> Self {
        let chunks = sse_body(deltas)
            .into_iter()
            .map(String::into_bytes)
            .collect();
        self.with_response(MockResponse::Delayed(delay, chunks))
    }

    pub fn with_error(self, error: GatewayError) -> Self {
        self.with_response(MockResponse::Error(error))
    }

    pub fn calls(&self) -> Vec<ChatRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

/// SSE frames for `deltas` followed by `data: [DONE]`, one frame per element.
pub fn sse_body(deltas: &[&str]) -> Vec<String> {
    let mut frames: Vec<String> = deltas
        .iter()
        .map(|d| {
            format!(
                "data: {}\n\n",
                serde_json::json!({"choices": [{"index": 0, "delta": {"content": d}}]})
            )
        })
        .collect();
    frames.push("data: [DONE]\n\n".to_string());
    frames
}

#[async_trait]
impl CompletionGateway for MockCompletionGateway {
    async fn open_stream(&self, request: ChatRequest) -> Result<ByteStream, GatewayError> {
        self.calls.lock().unwrap().push(request);

        let response = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| MockResponse::Stream(Vec::new()));

        match response {
            MockResponse::Stream(chunks) => {
                Ok(Box::pin(stream::iter(chunks.into_iter().map(Ok))))
            }
            MockResponse::Delayed(delay, chunks) => {
                tokio::time::sleep(delay).await;
                Ok(Box::pin(stream::iter(chunks.into_iter().map(Ok))))
            }
            MockResponse::Error(error) => Err(error),
        }
    }

    fn model(&self) -> &str {
        &self.model
    }
}
