//! SuggestVendorCategoriesHandler - Vendor categories from an event's latest plan.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, EventId, UserId};
use crate::domain::plan::PlanCache;
use crate::ports::{EventRepository, MessageRepository};

use super::super::access::load_owned_event;

#[derive(Debug, Clone)]
pub struct SuggestVendorCategoriesQuery {
    pub user_id: UserId,
    pub event_id: EventId,
}

pub struct SuggestVendorCategoriesHandler {
    events: Arc<dyn EventRepository>,
    messages: Arc<dyn MessageRepository>,
    plans: Arc<PlanCache>,
}

impl SuggestVendorCategoriesHandler {
    pub fn new(
        events: Arc<dyn EventRepository>,
        messages: Arc<dyn MessageRepository>,
        plans: Arc<PlanCache>,
    ) -> Self {
        Self {
            events,
            messages,
            plans,
        }
    }

    pub async fn handle(&self, query: SuggestVendorCategoriesQuery) -> Result<Vec<String>, DomainError> {
        let event = load_owned_event(self.events.as_ref(), &query.event_id, &query.user_id).await?;
        let messages = self.messages.list_by_event(&event.id).await?;

        Ok(self.plans.latest(&event.id, &messages).vendor_categories.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryPlannerStore;
    use crate::domain::conversation::Message;
    use crate::domain::event::Event;

    #[tokio::test]
    async fn returns_categories_of_latest_plan() {
        let store = Arc::new(InMemoryPlannerStore::new());
        let owner = UserId::new("owner").unwrap();
        let event = Event::from_conversation(owner.clone(), &[]);
        EventRepository::save(store.as_ref(), &event).await.unwrap();
        store
            .append(
                &event.id,
                &[Message::assistant(
                    "👥 **Vendor Categories Needed**\n- Venue\n- Catering/Food Service\n- DJ",
                )],
            )
            .await
            .unwrap();

        let plans = Arc::new(PlanCache::default());
        let handler = SuggestVendorCategoriesHandler::new(store.clone(), store, plans.clone());
        let query = SuggestVendorCategoriesQuery {
            user_id: owner,
            event_id: event.id,
        };

        let categories = handler.handle(query.clone()).await.unwrap();
        assert_eq!(categories, vec!["Venue", "Catering/Food Service"]);

        handler.handle(query).await.unwrap();
        assert_eq!(plans.len(), 1);
    }
}
