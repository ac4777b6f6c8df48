//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Completion gateway and relay client
//! - `auth` - Bearer token validation
//! - `http` - Axum REST and SSE endpoints
//! - `memory` - In-memory stores
//! - `postgres` - PostgreSQL stores

pub mod ai;
pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;
