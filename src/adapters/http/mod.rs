//! HTTP adapters - REST API implementations.
//!
//! Each area has its own HTTP adapter (dto, handlers, routes); `app` composes
//! them behind authentication, CORS, timeout and tracing layers.

pub mod app;
pub mod conversations;
pub mod error;
pub mod events;
pub mod middleware;
pub mod relay;
pub mod state;
pub mod vendors;

pub use app::{build_router, cors_layer};
pub use error::{ApiError, ErrorResponse};
pub use state::AppState;
