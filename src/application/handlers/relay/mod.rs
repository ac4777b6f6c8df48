//! Planner chat relay handler.

mod relay_chat;

pub use relay_chat::{RelayChatCommand, RelayChatHandler};
