//! OpenAI-compatible completion gateway.
//!
//! Posts `{model, messages, stream: true}` to `{base_url}/chat/completions`
//! and returns the response body as raw bytes. Nothing in the body is parsed
//! here; consumers decode SSE frames themselves (see `SseLineDecoder`).
//!
//! # Configuration
//!
//! ```ignore
//! let config = GatewayConfig::new("https://ai.gateway.example/v1")
//!     .with_api_key(key)
//!     .with_model("google/gemini-2.5-flash");
//!
//! let gateway = OpenAICompatibleGateway::new(config)?;
//! ```

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use std::time::Duration;

use crate::ports::{ByteStream, ChatMessage, ChatRequest, CompletionGateway, GatewayError};

pub const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";

/// Configuration for the gateway.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Bearer key; requests fail with `NotConfigured` when absent.
    api_key: Option<Secret<String>>,
    pub model: String,
    pub base_url: String,
    /// Applies to establishing the connection only; streamed bodies are not timed out.
    pub connect_timeout: Duration,
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: base_url.into(),
            connect_timeout: Duration::from_secs(10),
        }
    }

    pub fn with_api_key(mut self, api_key: Secret<String>) -> Self {
        self.api_key = Some(api_key);
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_ref().map(|k| k.expose_secret().as_str())
    }
}

/// Gateway speaking the OpenAI chat-completions protocol.
pub struct OpenAICompatibleGateway {
    config: GatewayConfig,
    client: Client,
}

impl OpenAICompatibleGateway {
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| GatewayError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    async fn send_streaming_request(
        &self,
        api_key: &str,
        request: &ChatRequest,
    ) -> Result<Response, GatewayError> {
        let body = WireRequest {
            model: &self.config.model,
            messages: request.to_wire_messages(),
            stream: true,
        };

        self.client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    GatewayError::network(format!("Connection failed: {}", e))
                } else {
                    GatewayError::network(e.to_string())
                }
            })
    }

    /// Passes successful responses through and classifies the rest.
    async fn handle_response_status(response: Response) -> Result<Response, GatewayError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(GatewayError::from_status(status.as_u16(), body))
    }
}

#[async_trait]
impl CompletionGateway for OpenAICompatibleGateway {
    async fn open_stream(&self, request: ChatRequest) -> Result<ByteStream, GatewayError> {
        let api_key = self
            .config
            .api_key()
            .ok_or_else(|| GatewayError::NotConfigured("AI gateway API key".to_string()))?;

        tracing::debug!(
            model = %self.config.model,
            messages = request.messages.len(),
            "Opening streaming completion"
        );

        let response = self.send_streaming_request(api_key, &request).await?;
        let response = Self::handle_response_status(response).await?;

        let stream = response.bytes_stream().map(|chunk| {
            chunk
                .map(|bytes| bytes.to_vec())
                .map_err(|e| GatewayError::network(format!("Stream error: {}", e)))
        });

        Ok(Box::pin(stream))
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}

#[derive(Debug, Serialize)]
struct WireRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    stream: bool,
}
