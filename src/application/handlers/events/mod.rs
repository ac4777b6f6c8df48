//! Event command and query handlers.

mod create_event;
mod delete_event;
mod get_event_details;
mod list_events;
mod suggest_vendor_categories;

pub use create_event::{CreateEventCommand, CreateEventHandler};
pub use delete_event::{DeleteEventCommand, DeleteEventHandler};
pub use get_event_details::{GetEventDetailsHandler, GetEventDetailsQuery};
pub use list_events::{ListEventsHandler, ListEventsQuery};
pub use suggest_vendor_categories::{SuggestVendorCategoriesHandler, SuggestVendorCategoriesQuery};
