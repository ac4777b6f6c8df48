//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `EventRepository` - Events, cascading to messages and tasks on delete
//! - `MessageRepository` - Append-only planner conversations
//! - `TaskRepository` - Event checklists
//! - `VendorRepository` - Vendor business profiles
//!
//! ## External Service Ports
//!
//! - `CompletionGateway` - Streaming chat completions
//! - `SessionValidator` - Bearer credential validation

mod completion_gateway;
mod event_repository;
mod message_repository;
mod session_validator;
mod task_repository;
mod vendor_repository;

pub use completion_gateway::{ByteStream, ChatMessage, ChatRequest, CompletionGateway, GatewayError};
pub use event_repository::EventRepository;
pub use message_repository::MessageRepository;
pub use session_validator::SessionValidator;
pub use task_repository::TaskRepository;
pub use vendor_repository::VendorRepository;
