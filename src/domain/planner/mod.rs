//! Planner module - View state for the chat planner and event details.
//!
//! Both views are modelled as immutable state plus a pure `reduce`.

mod chat;
mod event_view;
mod notice;

pub use chat::{PlannerAction, PlannerState, WELCOME_MESSAGE};
pub use event_view::{EventDetailAction, EventDetailState};
pub use notice::{Notice, NoticeLevel, RelayFailure};
