//! ListEventsHandler - Query handler for a user's dashboard.

use std::sync::Arc;

use crate::domain::event::Event;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::EventRepository;

#[derive(Debug, Clone)]
pub struct ListEventsQuery {
    pub user_id: UserId,
}

pub struct ListEventsHandler {
    events: Arc<dyn EventRepository>,
}

impl ListEventsHandler {
    pub fn new(events: Arc<dyn EventRepository>) -> Self {
        Self { events }
    }

    /// Events by date ascending; undated events last.
    pub async fn handle(&self, query: ListEventsQuery) -> Result<Vec<Event>, DomainError> {
        self.events.list_by_user(&query.user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryPlannerStore;
    use crate::domain::event::EventDraft;

    #[tokio::test]
    async fn lists_own_events_by_date() {
        let store = Arc::new(InMemoryPlannerStore::new());
        let owner = UserId::new("owner").unwrap();
        for (title, date) in [("Late", "2026-12-01"), ("Early", "2026-02-01")] {
            let event = Event::create(
                owner.clone(),
                EventDraft {
                    title: title.to_string(),
                    event_type: "party".to_string(),
                    date: date.to_string(),
                    location: "Home".to_string(),
                    ..Default::default()
                },
            )
            .unwrap();
            EventRepository::save(store.as_ref(), &event).await.unwrap();
        }
        let foreign = Event::from_conversation(UserId::new("other").unwrap(), &[]);
        EventRepository::save(store.as_ref(), &foreign).await.unwrap();

        let handler = ListEventsHandler::new(store);
        let titles: Vec<String> = handler
            .handle(ListEventsQuery { user_id: owner })
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.title)
            .collect();

        assert_eq!(titles, vec!["Early", "Late"]);
    }
}
