//! RelayChatHandler - Opens a planner completion stream for a chat.
//!
//! The fixed planner prompt is prepended to the caller's messages. The
//! returned byte stream is the gateway's SSE body, untouched.

use std::sync::Arc;

use crate::domain::plan::PLANNER_SYSTEM_PROMPT;
use crate::ports::{ByteStream, ChatMessage, ChatRequest, CompletionGateway, GatewayError};

#[derive(Debug, Clone)]
pub struct RelayChatCommand {
    pub messages: Vec<ChatMessage>,
}

pub struct RelayChatHandler {
    gateway: Arc<dyn CompletionGateway>,
}

impl RelayChatHandler {
    pub fn new(gateway: Arc<dyn CompletionGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(&self, cmd: RelayChatCommand) -> Result<ByteStream, GatewayError> {
        tracing::info!(
            model = self.gateway.model(),
            messages = cmd.messages.len(),
            "Opening planner completion stream"
        );

        let request = ChatRequest::new(PLANNER_SYSTEM_PROMPT, cmd.messages);
        self.gateway.open_stream(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockCompletionGateway;
    use futures::StreamExt;

    #[tokio::test]
    async fn forwards_prompt_and_messages() {
        let gateway = Arc::new(MockCompletionGateway::new().with_deltas(&["Hi", "!"]));
        let handler = RelayChatHandler::new(gateway.clone());

        let stream = handler
            .handle(RelayChatCommand {
                messages: vec![ChatMessage::new("user", "Plan a picnic")],
            })
            .await
            .unwrap();
        let body: Vec<u8> = stream
            .map(|chunk| chunk.unwrap())
            .collect::<Vec<_>>()
            .await
            .concat();

        let body = String::from_utf8(body).unwrap();
        assert!(body.contains("\"content\":\"Hi\""));
        assert!(body.ends_with("data: [DONE]\n\n"));

        let calls = gateway.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].system_prompt, PLANNER_SYSTEM_PROMPT);
        assert_eq!(calls[0].messages[0].content, "Plan a picnic");
    }

    #[tokio::test]
    async fn gateway_errors_pass_through() {
        let gateway = Arc::new(MockCompletionGateway::new().with_error(GatewayError::RateLimited));
        let handler = RelayChatHandler::new(gateway);

        let result = handler.handle(RelayChatCommand { messages: vec![] }).await;

        assert!(matches!(result, Err(GatewayError::RateLimited)));
    }
}
