//! HTTP adapter for the planner chat relay.

mod dto;
mod handlers;
mod routes;

pub use dto::{RelayErrorResponse, RelayRequest};
pub use handlers::{relay_chat, RelayApiError};
pub use routes::relay_routes;
