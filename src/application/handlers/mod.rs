//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

mod access;
pub mod conversation;
pub mod events;
pub mod relay;
pub mod tasks;
pub mod vendors;

pub use access::load_owned_event;
pub use conversation::{
    ConversationEntry, SaveConversationCommand, SaveConversationHandler, SaveConversationResult,
};
pub use events::{
    CreateEventCommand, CreateEventHandler, DeleteEventCommand, DeleteEventHandler,
    GetEventDetailsHandler, GetEventDetailsQuery, ListEventsHandler, ListEventsQuery,
    SuggestVendorCategoriesHandler, SuggestVendorCategoriesQuery,
};
pub use relay::{RelayChatCommand, RelayChatHandler};
pub use tasks::{AddTaskCommand, AddTaskHandler, ToggleTaskCommand, ToggleTaskHandler};
pub use vendors::{
    GetVendorProfileHandler, GetVendorProfileQuery, SaveVendorProfileCommand,
    SaveVendorProfileHandler, SearchVendorsHandler, SearchVendorsQuery,
};
