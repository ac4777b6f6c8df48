//! Planam - Event Planning Backend
//!
//! Relays planner chats to a hosted chat-completion gateway, derives task
//! and vendor-category lists from the assistant's markdown plans, and serves
//! the event, task, conversation and vendor APIs around them.

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod ports;
