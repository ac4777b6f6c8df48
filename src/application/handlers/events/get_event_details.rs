//! GetEventDetailsHandler - Loads an event with its conversation and tasks.
//!
//! The first time an event with a conversation is opened and it has no tasks
//! yet, tasks extracted from the latest assistant plan are imported. The
//! "no tasks yet" check happens at read time; two concurrent first loads can
//! both import.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, EventId, UserId};
use crate::domain::plan::PlanCache;
use crate::domain::planner::{EventDetailAction, EventDetailState};
use crate::domain::task::{import_tasks, should_import_tasks};
use crate::ports::{EventRepository, MessageRepository, TaskRepository};

use super::super::access::load_owned_event;

#[derive(Debug, Clone)]
pub struct GetEventDetailsQuery {
    pub user_id: UserId,
    pub event_id: EventId,
}

pub struct GetEventDetailsHandler {
    events: Arc<dyn EventRepository>,
    messages: Arc<dyn MessageRepository>,
    tasks: Arc<dyn TaskRepository>,
    plans: Arc<PlanCache>,
}

impl GetEventDetailsHandler {
    pub fn new(
        events: Arc<dyn EventRepository>,
        messages: Arc<dyn MessageRepository>,
        tasks: Arc<dyn TaskRepository>,
        plans: Arc<PlanCache>,
    ) -> Self {
        Self {
            events,
            messages,
            tasks,
            plans,
        }
    }

    pub async fn handle(&self, query: GetEventDetailsQuery) -> Result<EventDetailState, DomainError> {
        let event = load_owned_event(self.events.as_ref(), &query.event_id, &query.user_id).await?;
        let messages = self.messages.list_by_event(&event.id).await?;
        let tasks = self.tasks.list_by_event(&event.id).await?;

        let import = should_import_tasks(tasks.len(), &messages);
        let event_id = event.id;

        let mut state = EventDetailState::new().reduce(EventDetailAction::Loaded {
            event,
            messages,
            tasks,
        });

        if import {
            let plan = self.plans.latest(&event_id, &state.messages);
            if !plan.tasks.is_empty() {
                let imported = import_tasks(event_id, &plan.tasks);
                match self.tasks.save_all(&imported).await {
                    Ok(()) => {
                        tracing::info!(%event_id, count = imported.len(), "Imported tasks from plan");
                        state = state.reduce(EventDetailAction::TasksImported(imported));
                    }
                    Err(e) => {
                        tracing::error!(%event_id, error = %e, "Error auto-importing tasks");
                    }
                }
            }
        }

        Ok(state)
    }
}
