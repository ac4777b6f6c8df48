//! AI Gateway Adapters.
//!
//! ## Available Adapters
//!
//! - `OpenAICompatibleGateway` - Streaming chat completions over HTTP
//! - `MockCompletionGateway` - Configurable mock for testing
//! - `RelayClient` - Consumer of the planner relay endpoint
//! - `SseLineDecoder` - Incremental decoder for completion SSE streams

mod mock_gateway;
mod openai_gateway;
mod relay_client;
mod sse;

pub use mock_gateway::{sse_body, MockCompletionGateway, MockResponse};
pub use openai_gateway::{GatewayConfig, OpenAICompatibleGateway, DEFAULT_MODEL};
pub use relay_client::{
    decode_deltas, DeltaStream, RelayClient, RelayError, SavedConversation, CONVERSATIONS_PATH,
    RELAY_PATH,
};
pub use sse::{SseEvent, SseLineDecoder};
