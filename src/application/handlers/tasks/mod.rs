//! Task command handlers.

mod add_task;
mod toggle_task;

pub use add_task::{AddTaskCommand, AddTaskHandler};
pub use toggle_task::{ToggleTaskCommand, ToggleTaskHandler};
