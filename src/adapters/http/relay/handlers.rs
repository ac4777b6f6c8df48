//! HTTP handler for the planner chat relay.
//!
//! On success the gateway's SSE body is streamed back unchanged. Failures are
//! JSON `{"error": ...}` bodies: 429 and 402 are passed through, everything
//! else becomes a 500.

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use futures::TryStreamExt;

use crate::application::handlers::RelayChatCommand;
use crate::ports::GatewayError;

use super::super::middleware::RequireAuth;
use super::super::state::AppState;
use super::dto::{RelayErrorResponse, RelayRequest};

/// POST /functions/v1/ai-event-planner
pub async fn relay_chat(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    body: Bytes,
) -> Result<Response, RelayApiError> {
    let request: RelayRequest =
        serde_json::from_slice(&body).map_err(|e| RelayApiError::Malformed(e.to_string()))?;

    tracing::debug!(user_id = %user.id, "Relaying planner chat");

    let stream = state
        .relay_chat_handler()
        .handle(RelayChatCommand {
            messages: request.messages,
        })
        .await?;

    let body = Body::from_stream(stream.map_ok(Bytes::from));
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/event-stream")],
        body,
    )
        .into_response())
}

#[derive(Debug)]
pub enum RelayApiError {
    Gateway(GatewayError),
    Malformed(String),
}

impl From<GatewayError> for RelayApiError {
    fn from(err: GatewayError) -> Self {
        Self::Gateway(err)
    }
}

impl IntoResponse for RelayApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            RelayApiError::Gateway(GatewayError::RateLimited) => StatusCode::TOO_MANY_REQUESTS,
            RelayApiError::Gateway(GatewayError::PaymentRequired) => StatusCode::PAYMENT_REQUIRED,
            RelayApiError::Gateway(GatewayError::Upstream { status, body }) => {
                tracing::error!(status, body = %body, "AI gateway error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            RelayApiError::Gateway(e) => {
                tracing::error!(error = %e, "Relay failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            RelayApiError::Malformed(reason) => {
                tracing::error!(reason = %reason, "Malformed relay request");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let error = match self {
            RelayApiError::Gateway(e) => e.to_string(),
            RelayApiError::Malformed(reason) => reason,
        };

        (status, Json(RelayErrorResponse { error })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn rate_limit_passes_through() {
        let response = RelayApiError::from(GatewayError::RateLimited).into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            body_json(response).await["error"],
            "Rate limits exceeded, please try again later."
        );
    }

    #[tokio::test]
    async fn payment_required_passes_through() {
        let response = RelayApiError::from(GatewayError::PaymentRequired).into_response();
        assert_eq!(response.status(), StatusCode::PAYMENT_REQUIRED);
        assert_eq!(
            body_json(response).await["error"],
            "Payment required, please add funds to your AI workspace."
        );
    }

    #[tokio::test]
    async fn other_upstream_statuses_become_500() {
        let response = RelayApiError::from(GatewayError::from_status(503, "overloaded"))
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"], "AI gateway error");
    }

    #[tokio::test]
    async fn missing_key_reports_its_message() {
        let response = RelayApiError::from(GatewayError::NotConfigured(
            "AI gateway API key".to_string(),
        ))
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await["error"],
            "AI gateway API key is not configured"
        );
    }
}
