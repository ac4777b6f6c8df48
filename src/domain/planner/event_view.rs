//! Event details view state.

use super::notice::Notice;
use crate::domain::conversation::Message;
use crate::domain::event::Event;
use crate::domain::foundation::TaskId;
use crate::domain::task::Task;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventDetailAction {
    Loaded {
        event: Event,
        messages: Vec<Message>,
        tasks: Vec<Task>,
    },
    TasksImported(Vec<Task>),
    TaskAdded(Task),
    TaskToggled { task_id: TaskId, completed: bool },
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventDetailState {
    pub event: Option<Event>,
    pub messages: Vec<Message>,
    pub tasks: Vec<Task>,
    pub loading: bool,
    pub notice: Option<Notice>,
}

impl EventDetailState {
    pub fn new() -> Self {
        Self {
            event: None,
            messages: Vec::new(),
            tasks: Vec::new(),
            loading: true,
            notice: None,
        }
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    pub fn reduce(mut self, action: EventDetailAction) -> Self {
        match action {
            EventDetailAction::Loaded {
                event,
                messages,
                tasks,
            } => {
                self.event = Some(event);
                self.messages = messages;
                self.tasks = tasks;
                self.loading = false;
            }
            EventDetailAction::TasksImported(tasks) => {
                if !tasks.is_empty() {
                    self.notice = Some(Notice::tasks_imported(tasks.len()));
                    self.tasks = tasks;
                }
            }
            EventDetailAction::TaskAdded(task) => {
                self.tasks.push(task);
            }
            EventDetailAction::TaskToggled { task_id, completed } => {
                if let Some(task) = self.tasks.iter_mut().find(|t| t.id == task_id) {
                    task.completed = completed;
                }
            }
            EventDetailAction::Failed(message) => {
                self.loading = false;
                self.notice = Some(Notice::error("Error", message));
            }
        }
        self
    }
}

impl Default for EventDetailState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use crate::domain::task::import_tasks;

    fn loaded() -> EventDetailState {
        let event = Event::from_conversation(UserId::new("u").unwrap(), &[]);
        EventDetailState::new().reduce(EventDetailAction::Loaded {
            event,
            messages: vec![Message::assistant("plan")],
            tasks: Vec::new(),
        })
    }

    #[test]
    fn loaded_clears_loading() {
        let state = loaded();
        assert!(!state.loading);
        assert!(state.event.is_some());
        assert_eq!(state.messages.len(), 1);
    }

    #[test]
    fn import_sets_tasks_and_notice() {
        let state = loaded();
        let event_id = state.event.as_ref().unwrap().id;
        let tasks = import_tasks(event_id, &["Book venue".to_string(), "Hire DJ".to_string()]);

        let state = state.reduce(EventDetailAction::TasksImported(tasks));

        assert_eq!(state.tasks.len(), 2);
        assert_eq!(
            state.notice.unwrap().description,
            "Imported 2 tasks from your AI plan."
        );
    }

    #[test]
    fn empty_import_is_silent() {
        let state = loaded().reduce(EventDetailAction::TasksImported(Vec::new()));
        assert!(state.notice.is_none());
    }

    #[test]
    fn toggle_updates_matching_task_only() {
        let state = loaded();
        let event_id = state.event.as_ref().unwrap().id;
        let a = Task::new(event_id, "Book venue").unwrap();
        let b = Task::new(event_id, "Hire DJ").unwrap();
        let a_id = a.id;

        let state = state
            .reduce(EventDetailAction::TaskAdded(a))
            .reduce(EventDetailAction::TaskAdded(b))
            .reduce(EventDetailAction::TaskToggled {
                task_id: a_id,
                completed: true,
            });

        assert_eq!(state.completed_count(), 1);
        assert!(state.tasks[0].completed);
        assert!(!state.tasks[1].completed);
    }

    #[test]
    fn failure_sets_error_notice() {
        let state = EventDetailState::new().reduce(EventDetailAction::Failed("boom".to_string()));
        assert!(!state.loading);
        assert_eq!(state.notice.unwrap().description, "boom");
    }
}
