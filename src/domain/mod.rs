//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `conversation` - Role-tagged planner messages
//! - `event` - Events and their creation rules
//! - `task` - Event checklists and plan import policy
//! - `vendor` - Vendor business profiles and search
//! - `plan` - Plan template grammar and task/vendor extraction
//! - `planner` - View-state reducers for the chat and event details

pub mod conversation;
pub mod event;
pub mod foundation;
pub mod plan;
pub mod planner;
pub mod task;
pub mod vendor;
