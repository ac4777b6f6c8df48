//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    // Event handlers
    CreateEventCommand, CreateEventHandler,
    DeleteEventCommand, DeleteEventHandler,
    GetEventDetailsHandler, GetEventDetailsQuery,
    ListEventsHandler, ListEventsQuery,
    SuggestVendorCategoriesHandler, SuggestVendorCategoriesQuery,
    // Task handlers
    AddTaskCommand, AddTaskHandler,
    ToggleTaskCommand, ToggleTaskHandler,
    // Conversation handlers
    ConversationEntry, SaveConversationCommand, SaveConversationHandler, SaveConversationResult,
    // Vendor handlers
    GetVendorProfileHandler, GetVendorProfileQuery,
    SaveVendorProfileCommand, SaveVendorProfileHandler,
    SearchVendorsHandler, SearchVendorsQuery,
    // Relay
    RelayChatCommand, RelayChatHandler,
};
