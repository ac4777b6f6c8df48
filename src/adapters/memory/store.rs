//! In-memory planner store.
//!
//! One store backs all four repository ports so that deleting an event can
//! cascade to its messages and tasks. Used when no database is configured
//! and in tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::conversation::Message;
use crate::domain::event::Event;
use crate::domain::foundation::{DomainError, ErrorCode, EventId, TaskId, UserId};
use crate::domain::task::Task;
use crate::domain::vendor::VendorProfile;
use crate::ports::{EventRepository, MessageRepository, TaskRepository, VendorRepository};

#[derive(Debug, Default)]
struct Tables {
    events: HashMap<EventId, Event>,
    messages: HashMap<EventId, Vec<Message>>,
    tasks: HashMap<TaskId, Task>,
    vendors: HashMap<UserId, VendorProfile>,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryPlannerStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryPlannerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored events (useful for tests)
    pub async fn event_count(&self) -> usize {
        self.tables.read().await.events.len()
    }

    /// Number of stored tasks across all events (useful for tests)
    pub async fn task_count(&self) -> usize {
        self.tables.read().await.tasks.len()
    }
}

#[async_trait]
impl EventRepository for InMemoryPlannerStore {
    async fn save(&self, event: &Event) -> Result<(), DomainError> {
        self.tables
            .write()
            .await
            .events
            .insert(event.id, event.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, DomainError> {
        Ok(self.tables.read().await.events.get(id).cloned())
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Event>, DomainError> {
        let tables = self.tables.read().await;
        let mut events: Vec<Event> = tables
            .events
            .values()
            .filter(|e| e.is_owned_by(user_id))
            .cloned()
            .collect();
        events.sort_by(Event::dashboard_order);
        Ok(events)
    }

    async fn delete(&self, id: &EventId) -> Result<bool, DomainError> {
        let mut tables = self.tables.write().await;
        if tables.events.remove(id).is_none() {
            return Ok(false);
        }
        tables.messages.remove(id);
        tables.tasks.retain(|_, task| &task.event_id != id);
        Ok(true)
    }
}

#[async_trait]
impl MessageRepository for InMemoryPlannerStore {
    async fn append(&self, event_id: &EventId, messages: &[Message]) -> Result<usize, DomainError> {
        let mut tables = self.tables.write().await;
        if !tables.events.contains_key(event_id) {
            return Err(DomainError::new(ErrorCode::EventNotFound, "Event not found"));
        }

        // Message ids are unique across events, like the postgres primary key.
        let mut added = 0;
        for message in messages {
            let taken = tables
                .messages
                .values()
                .flatten()
                .any(|m| m.id == message.id);
            if !taken {
                tables
                    .messages
                    .entry(*event_id)
                    .or_default()
                    .push(message.clone());
                added += 1;
            }
        }
        if let Some(stored) = tables.messages.get_mut(event_id) {
            stored.sort_by_key(|m| m.created_at);
        }
        Ok(added)
    }

    async fn list_by_event(&self, event_id: &EventId) -> Result<Vec<Message>, DomainError> {
        Ok(self
            .tables
            .read()
            .await
            .messages
            .get(event_id)
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait]
impl TaskRepository for InMemoryPlannerStore {
    async fn save(&self, task: &Task) -> Result<(), DomainError> {
        self.save_all(std::slice::from_ref(task)).await
    }

    async fn save_all(&self, tasks: &[Task]) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        if let Some(orphan) = tasks
            .iter()
            .find(|t| !tables.events.contains_key(&t.event_id))
        {
            return Err(DomainError::new(ErrorCode::EventNotFound, "Event not found")
                .with_detail("event_id", orphan.event_id.to_string()));
        }
        for task in tasks {
            tables.tasks.insert(task.id, task.clone());
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, DomainError> {
        Ok(self.tables.read().await.tasks.get(id).cloned())
    }

    async fn set_completed(&self, id: &TaskId, completed: bool) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        let task = tables
            .tasks
            .get_mut(id)
            .ok_or_else(|| DomainError::new(ErrorCode::TaskNotFound, "Task not found"))?;
        task.completed = completed;
        Ok(())
    }

    async fn list_by_event(&self, event_id: &EventId) -> Result<Vec<Task>, DomainError> {
        let tables = self.tables.read().await;
        let mut tasks: Vec<Task> = tables
            .tasks
            .values()
            .filter(|t| &t.event_id == event_id)
            .cloned()
            .collect();
        tasks.sort_by_key(|t| t.created_at);
        Ok(tasks)
    }
}

#[async_trait]
impl VendorRepository for InMemoryPlannerStore {
    async fn upsert(&self, profile: &VendorProfile) -> Result<(), DomainError> {
        self.tables
            .write()
            .await
            .vendors
            .insert(profile.user_id.clone(), profile.clone());
        Ok(())
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<VendorProfile>, DomainError> {
        Ok(self.tables.read().await.vendors.get(user_id).cloned())
    }

    async fn list_newest_first(&self) -> Result<Vec<VendorProfile>, DomainError> {
        let tables = self.tables.read().await;
        let mut profiles: Vec<VendorProfile> = tables.vendors.values().cloned().collect();
        profiles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(profiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::Role;
    use crate::domain::task::import_tasks;
    use crate::domain::vendor::VendorProfileDraft;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    async fn store_with_event() -> (InMemoryPlannerStore, Event) {
        let store = InMemoryPlannerStore::new();
        let event = Event::from_conversation(user("u1"), &[]);
        EventRepository::save(&store, &event).await.unwrap();
        (store, event)
    }

    #[tokio::test]
    async fn delete_cascades_to_messages_and_tasks() {
        let (store, event) = store_with_event().await;
        store
            .append(&event.id, &[Message::user("hello")])
            .await
            .unwrap();
        store
            .save_all(&import_tasks(event.id, &["Book venue".to_string()]))
            .await
            .unwrap();

        assert!(store.delete(&event.id).await.unwrap());

        assert_eq!(store.event_count().await, 0);
        assert_eq!(store.task_count().await, 0);
        assert!(MessageRepository::list_by_event(&store, &event.id)
            .await
            .unwrap()
            .is_empty());
        assert!(!store.delete(&event.id).await.unwrap());
    }

    #[tokio::test]
    async fn append_is_idempotent_per_message_id() {
        let (store, event) = store_with_event().await;
        let messages = vec![Message::user("a"), Message::assistant("b")];

        assert_eq!(store.append(&event.id, &messages).await.unwrap(), 2);
        assert_eq!(store.append(&event.id, &messages).await.unwrap(), 0);
        assert_eq!(
            MessageRepository::list_by_event(&store, &event.id)
                .await
                .unwrap()
                .len(),
            2
        );
    }

    #[tokio::test]
    async fn message_id_taken_by_another_event_is_not_stored() {
        let (store, alice) = store_with_event().await;
        let bob = Event::from_conversation(user("u2"), &[]);
        EventRepository::save(&store, &bob).await.unwrap();

        let original = Message::assistant("✅ **Task List**\n- Alice books the chapel");
        let reused = Message::reconstitute(
            original.id,
            Role::Assistant,
            "✅ **Task List**\n- Bob buys a picnic blanket".to_string(),
            original.created_at,
        );

        assert_eq!(store.append(&alice.id, &[original]).await.unwrap(), 1);
        assert_eq!(store.append(&bob.id, &[reused]).await.unwrap(), 0);
        assert!(MessageRepository::list_by_event(&store, &bob.id)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn append_to_unknown_event_fails() {
        let store = InMemoryPlannerStore::new();
        let err = store
            .append(&EventId::new(), &[Message::user("a")])
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::EventNotFound);
    }

    #[tokio::test]
    async fn tasks_list_in_creation_order() {
        let (store, event) = store_with_event().await;
        let titles: Vec<String> = (0..5).map(|i| format!("Task {}", i)).collect();
        store
            .save_all(&import_tasks(event.id, &titles))
            .await
            .unwrap();

        let listed: Vec<String> = TaskRepository::list_by_event(&store, &event.id)
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(listed, titles);
    }

    #[tokio::test]
    async fn set_completed_on_missing_task_fails() {
        let store = InMemoryPlannerStore::new();
        let err = store.set_completed(&TaskId::new(), true).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::TaskNotFound);
    }

    #[tokio::test]
    async fn events_are_scoped_to_owner() {
        let (store, _) = store_with_event().await;
        let other = Event::from_conversation(user("u2"), &[]);
        EventRepository::save(&store, &other).await.unwrap();

        let listed = store.list_by_user(&user("u2")).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, other.id);
    }

    #[tokio::test]
    async fn vendor_upsert_replaces_profile_per_user() {
        let store = InMemoryPlannerStore::new();
        let draft = VendorProfileDraft {
            business_name: "Acme".to_string(),
            category: "Catering".to_string(),
            ..Default::default()
        };
        let mut profile = VendorProfile::create(user("v1"), draft.clone()).unwrap();
        store.upsert(&profile).await.unwrap();

        profile.business_name = "Acme Catering".to_string();
        store.upsert(&profile).await.unwrap();

        let all = store.list_newest_first().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].business_name, "Acme Catering");
        assert!(store.find_by_user(&user("v1")).await.unwrap().is_some());
    }
}
