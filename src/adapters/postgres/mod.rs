//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresEventRepository` - Events (cascading deletes)
//! - `PostgresMessageRepository` - Planner conversations
//! - `PostgresTaskRepository` - Event checklists
//! - `PostgresVendorRepository` - Vendor profiles
//!
//! Schema lives in `migrations/`.

mod event_repository;
mod message_repository;
mod pool;
mod task_repository;
mod vendor_repository;

pub use event_repository::PostgresEventRepository;
pub use message_repository::PostgresMessageRepository;
pub use pool::connect;
pub use task_repository::PostgresTaskRepository;
pub use vendor_repository::PostgresVendorRepository;
