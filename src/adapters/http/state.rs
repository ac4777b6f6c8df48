//! Shared application state for all HTTP handlers.

use std::sync::Arc;

use crate::application::handlers::{
    AddTaskHandler, CreateEventHandler, DeleteEventHandler, GetEventDetailsHandler,
    GetVendorProfileHandler, ListEventsHandler, RelayChatHandler, SaveConversationHandler,
    SaveVendorProfileHandler, SearchVendorsHandler, SuggestVendorCategoriesHandler,
    ToggleTaskHandler,
};
use crate::domain::plan::PlanCache;
use crate::ports::{
    CompletionGateway, EventRepository, MessageRepository, SessionValidator, TaskRepository,
    VendorRepository,
};

/// Shared application state containing all dependencies.
///
/// This struct is cloned for each request and contains Arc-wrapped dependencies
/// for efficient sharing across handlers.
#[derive(Clone)]
pub struct AppState {
    pub events: Arc<dyn EventRepository>,
    pub messages: Arc<dyn MessageRepository>,
    pub tasks: Arc<dyn TaskRepository>,
    pub vendors: Arc<dyn VendorRepository>,
    pub gateway: Arc<dyn CompletionGateway>,
    pub session_validator: Arc<dyn SessionValidator>,
    pub plans: Arc<PlanCache>,
}

impl AppState {
    pub fn create_event_handler(&self) -> CreateEventHandler {
        CreateEventHandler::new(self.events.clone())
    }

    pub fn list_events_handler(&self) -> ListEventsHandler {
        ListEventsHandler::new(self.events.clone())
    }

    pub fn event_details_handler(&self) -> GetEventDetailsHandler {
        GetEventDetailsHandler::new(
            self.events.clone(),
            self.messages.clone(),
            self.tasks.clone(),
            self.plans.clone(),
        )
    }

    pub fn delete_event_handler(&self) -> DeleteEventHandler {
        DeleteEventHandler::new(self.events.clone())
    }

    pub fn vendor_categories_handler(&self) -> SuggestVendorCategoriesHandler {
        SuggestVendorCategoriesHandler::new(
            self.events.clone(),
            self.messages.clone(),
            self.plans.clone(),
        )
    }

    pub fn add_task_handler(&self) -> AddTaskHandler {
        AddTaskHandler::new(self.events.clone(), self.tasks.clone())
    }

    pub fn toggle_task_handler(&self) -> ToggleTaskHandler {
        ToggleTaskHandler::new(self.events.clone(), self.tasks.clone())
    }

    pub fn save_conversation_handler(&self) -> SaveConversationHandler {
        SaveConversationHandler::new(self.events.clone(), self.messages.clone())
    }

    pub fn save_vendor_handler(&self) -> SaveVendorProfileHandler {
        SaveVendorProfileHandler::new(self.vendors.clone())
    }

    pub fn get_vendor_handler(&self) -> GetVendorProfileHandler {
        GetVendorProfileHandler::new(self.vendors.clone())
    }

    pub fn search_vendors_handler(&self) -> SearchVendorsHandler {
        SearchVendorsHandler::new(self.vendors.clone())
    }

    pub fn relay_chat_handler(&self) -> RelayChatHandler {
        RelayChatHandler::new(self.gateway.clone())
    }
}
