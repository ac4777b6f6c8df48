//! Planner chat view state.
//!
//! The chat starts with a fixed assistant greeting. Submitting adds the user
//! message and marks a reply in flight; streamed deltas grow a single
//! assistant message; the reply ends on `Finished` or `Failed`.

use super::notice::{Notice, RelayFailure};
use crate::domain::conversation::{Message, Role};

pub const WELCOME_MESSAGE: &str = "👋 Welcome to Planam's AI Event Planner! I'm here to help you create the perfect event. Tell me about your event - what are you planning?";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannerAction {
    /// User sends text.
    Submit(String),
    /// A content fragment of the in-flight reply.
    Delta(String),
    /// The reply stream ended.
    Finished,
    Failed(RelayFailure),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerState {
    messages: Vec<Message>,
    loading: bool,
    reply_started: bool,
    notice: Option<Notice>,
}

impl PlannerState {
    pub fn new() -> Self {
        Self {
            messages: vec![Message::assistant(WELCOME_MESSAGE)],
            loading: false,
            reply_started: false,
            notice: None,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Messages worth persisting: everything after the greeting.
    pub fn saveable_messages(&self) -> &[Message] {
        self.messages.get(1..).unwrap_or(&[])
    }

    pub fn reduce(mut self, action: PlannerAction) -> Self {
        match action {
            PlannerAction::Submit(text) => {
                let text = text.trim();
                if text.is_empty() || self.loading {
                    return self;
                }
                self.messages.push(Message::user(text));
                self.loading = true;
                self.reply_started = false;
                self.notice = None;
            }
            PlannerAction::Delta(fragment) => {
                if !self.loading || fragment.is_empty() {
                    return self;
                }
                if self.reply_started {
                    if let Some(last) = self.messages.pop() {
                        let content = last.content + &fragment;
                        self.messages.push(Message::reconstitute(
                            last.id,
                            Role::Assistant,
                            content,
                            last.created_at,
                        ));
                    }
                } else {
                    self.messages.push(Message::assistant(fragment));
                    self.reply_started = true;
                }
            }
            PlannerAction::Finished => {
                self.loading = false;
                self.reply_started = false;
            }
            PlannerAction::Failed(failure) => {
                self.loading = false;
                self.reply_started = false;
                self.notice = Some(Notice::relay_failure(failure));
            }
        }
        self
    }
}

impl Default for PlannerState {
    fn default() -> Self {
        Self::new()
    }
}
