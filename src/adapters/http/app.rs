//! Router composition: every HTTP adapter behind shared middleware.

use axum::http::{header, HeaderName, HeaderValue, Method};
use axum::{middleware, routing::get, Json, Router};
use serde_json::json;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::conversations::conversation_routes;
use super::events::event_routes;
use super::middleware::auth_middleware;
use super::relay::relay_routes;
use super::state::AppState;
use super::vendors::vendor_routes;

const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Builds the complete application router.
///
/// The request timeout covers `/health` and `/api` only. The relay waits on
/// the upstream as long as it takes.
pub fn build_router(state: AppState, server: &ServerConfig) -> Router {
    let api = Router::new()
        .merge(event_routes())
        .merge(conversation_routes())
        .merge(vendor_routes());

    let bounded = Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(TimeoutLayer::new(server.request_timeout()));

    Router::new()
        .merge(bounded)
        .merge(relay_routes())
        .layer(middleware::from_fn_with_state(
            state.session_validator.clone(),
            auth_middleware,
        ))
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(PropagateRequestIdLayer::new(REQUEST_ID_HEADER))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(REQUEST_ID_HEADER, MakeRequestUuid))
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Browser clients call from any origin unless origins are configured.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|o| match HeaderValue::from_str(o) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            header::CONTENT_TYPE,
        ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockCompletionGateway;
    use crate::adapters::auth::MockSessionValidator;
    use crate::adapters::memory::InMemoryPlannerStore;
    use crate::domain::plan::PlanCache;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use std::time::Duration;
    use tower::ServiceExt;

    fn router() -> Router {
        router_with(MockCompletionGateway::new(), ServerConfig::default())
    }

    fn router_with(gateway: MockCompletionGateway, server: ServerConfig) -> Router {
        let store = Arc::new(InMemoryPlannerStore::new());
        let state = AppState {
            events: store.clone(),
            messages: store.clone(),
            tasks: store.clone(),
            vendors: store,
            gateway: Arc::new(gateway),
            session_validator: Arc::new(
                MockSessionValidator::new().with_test_user("valid-token", "user-123"),
            ),
            plans: Arc::new(PlanCache::default()),
        };
        build_router(state, &server)
    }

    #[tokio::test]
    async fn health_needs_no_auth() {
        let response = router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn preflight_allows_client_headers() {
        let response = router()
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/functions/v1/ai-event-planner")
                    .header(header::ORIGIN, "https://planam.app")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .header(
                        header::ACCESS_CONTROL_REQUEST_HEADERS,
                        "authorization,x-client-info,apikey,content-type",
                    )
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
        let allowed = response.headers()[header::ACCESS_CONTROL_ALLOW_HEADERS]
            .to_str()
            .unwrap()
            .to_string();
        assert!(allowed.contains("x-client-info"));
        assert!(allowed.contains("apikey"));
    }

    #[tokio::test]
    async fn api_requires_authentication() {
        let response = router()
            .oneshot(Request::get("/api/events").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn relay_outlives_request_timeout() {
        let gateway = MockCompletionGateway::new()
            .with_slow_deltas(Duration::from_millis(1500), &["Still", " here"]);
        let server = ServerConfig {
            request_timeout_secs: 1,
            ..ServerConfig::default()
        };

        let response = router_with(gateway, server)
            .oneshot(
                Request::post("/functions/v1/ai-event-planner")
                    .header(header::AUTHORIZATION, "Bearer valid-token")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"messages":[{"role":"user","content":"Plan a picnic"}]}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("Still"));
        assert!(text.contains("[DONE]"));
    }
}
