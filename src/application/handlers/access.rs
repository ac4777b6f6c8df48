//! Ownership checks shared by event-scoped handlers.

use crate::domain::event::Event;
use crate::domain::foundation::{DomainError, ErrorCode, EventId, UserId};
use crate::ports::EventRepository;

/// Loads an event and verifies that `user_id` owns it.
pub async fn load_owned_event(
    events: &dyn EventRepository,
    event_id: &EventId,
    user_id: &UserId,
) -> Result<Event, DomainError> {
    let event = events
        .find_by_id(event_id)
        .await?
        .ok_or_else(|| {
            DomainError::new(ErrorCode::EventNotFound, "Event not found")
                .with_detail("event_id", event_id.to_string())
        })?;

    if !event.is_owned_by(user_id) {
        return Err(DomainError::new(
            ErrorCode::Forbidden,
            "Event belongs to another user",
        ));
    }

    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryPlannerStore;

    #[tokio::test]
    async fn rejects_missing_and_foreign_events() {
        let store = InMemoryPlannerStore::new();
        let owner = UserId::new("owner").unwrap();
        let event = Event::from_conversation(owner.clone(), &[]);
        EventRepository::save(&store, &event).await.unwrap();

        assert!(load_owned_event(&store, &event.id, &owner).await.is_ok());

        let err = load_owned_event(&store, &event.id, &UserId::new("other").unwrap())
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::Forbidden);

        let err = load_owned_event(&store, &EventId::new(), &owner)
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::EventNotFound);
    }
}
