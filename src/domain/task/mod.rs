//! Task module - Checklist items attached to an event.

mod task;

pub use task::{import_tasks, should_import_tasks, Task, MAX_TASK_TITLE_LENGTH};
