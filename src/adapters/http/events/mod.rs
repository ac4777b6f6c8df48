//! HTTP adapter for events and their tasks.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AddTaskRequest, EventDetailsResponse, EventResponse, MessageResponse, TaskResponse,
    VendorCategoriesResponse,
};
pub use routes::event_routes;
