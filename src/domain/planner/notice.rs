//! User-facing notices produced by planner state transitions.

use serde::Serialize;

/// Why a relayed completion failed, as far as the user needs to know.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayFailure {
    RateLimited,
    PaymentRequired,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A short title plus a sentence, shown once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn relay_failure(failure: RelayFailure) -> Self {
        match failure {
            RelayFailure::RateLimited => {
                Self::error("Rate Limit Exceeded", "Please try again in a moment.")
            }
            RelayFailure::PaymentRequired => {
                Self::error("Payment Required", "Please add credits to continue.")
            }
            RelayFailure::Other => {
                Self::error("Error", "Failed to get AI response. Please try again.")
            }
        }
    }

    pub fn tasks_imported(count: usize) -> Self {
        Self::info(
            "Tasks Added",
            format!("Imported {} tasks from your AI plan.", count),
        )
    }
}
