//! Conversation command handlers.

mod save_conversation;

pub use save_conversation::{
    ConversationEntry, SaveConversationCommand, SaveConversationHandler, SaveConversationResult,
};
