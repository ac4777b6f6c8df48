//! Memoized extraction keyed by event and assistant message.
//!
//! Messages are immutable once stored, so a plan derived from a message never
//! goes stale. Message ids are client-chosen, so entries are scoped to their
//! event. The cache is bounded; when full it is cleared wholesale.

use super::extractor::{ExtractedPlan, PlanExtractor};
use crate::domain::conversation::{last_assistant_message, Message};
use crate::domain::foundation::{EventId, MessageId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Default number of memoized plans.
pub const DEFAULT_PLAN_CACHE_CAPACITY: usize = 1024;

pub struct PlanCache {
    extractor: &'static PlanExtractor,
    capacity: usize,
    entries: RwLock<HashMap<(EventId, MessageId), Arc<ExtractedPlan>>>,
}

impl PlanCache {
    pub fn new(capacity: usize) -> Self {
        Self::with_extractor(PlanExtractor::standard(), capacity)
    }

    pub fn with_extractor(extractor: &'static PlanExtractor, capacity: usize) -> Self {
        Self {
            extractor,
            capacity: capacity.max(1),
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Plan of the latest assistant message in `messages` of `event_id`,
    /// empty if there is none.
    pub fn latest(&self, event_id: &EventId, messages: &[Message]) -> Arc<ExtractedPlan> {
        match last_assistant_message(messages) {
            Some(message) => self.for_message(event_id, message),
            None => Arc::new(ExtractedPlan::default()),
        }
    }

    pub fn for_message(&self, event_id: &EventId, message: &Message) -> Arc<ExtractedPlan> {
        let key = (*event_id, message.id);
        if let Some(plan) = self
            .entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(&key)
        {
            return Arc::clone(plan);
        }

        let plan = Arc::new(self.extractor.extract(&message.content));

        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if entries.len() >= self.capacity {
            entries.clear();
        }
        Arc::clone(entries.entry(key).or_insert(plan))
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for PlanCache {
    fn default() -> Self {
        Self::new(DEFAULT_PLAN_CACHE_CAPACITY)
    }
}

impl std::fmt::Debug for PlanCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlanCache")
            .field("capacity", &self.capacity)
            .field("len", &self.len())
            .finish()
    }
}
