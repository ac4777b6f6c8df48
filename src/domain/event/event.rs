//! Event aggregate.
//!
//! Events are created either from the planning form (all core fields
//! required) or implicitly when a planner conversation is first saved, in
//! which case only a title and description are known.

use crate::domain::conversation::{Message, Role};
use crate::domain::foundation::{EventId, Timestamp, UserId, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const MAX_TITLE_LENGTH: usize = 200;
pub const MAX_DESCRIPTION_LENGTH: usize = 5_000;

/// Characters of the first user message used as a conversation event title.
pub const CONVERSATION_TITLE_CHARS: usize = 100;

/// Characters of the last message used as a conversation event description.
pub const CONVERSATION_DESCRIPTION_CHARS: usize = 500;

pub const DEFAULT_EVENT_TITLE: &str = "My Event";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub user_id: UserId,
    pub title: String,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub location: Option<String>,
    pub attendee_count: u32,
    pub event_type: Option<String>,
    pub created_at: Timestamp,
}

/// Raw form input for creating an event.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub event_type: String,
    /// `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub location: String,
    /// Free text; anything that does not start with a number counts as zero.
    #[serde(default)]
    pub attendees: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Event {
    /// Validates a form draft into a new event owned by `user_id`.
    pub fn create(user_id: UserId, draft: EventDraft) -> Result<Self, ValidationError> {
        let title = required("title", &draft.title, MAX_TITLE_LENGTH)?;
        let event_type = required("event_type", &draft.event_type, MAX_TITLE_LENGTH)?;
        let location = required("location", &draft.location, MAX_TITLE_LENGTH)?;
        let date_text = required("date", &draft.date, 10)?;
        let date = NaiveDate::parse_from_str(&date_text, "%Y-%m-%d")
            .map_err(|_| ValidationError::invalid_format("date", "expected YYYY-MM-DD"))?;

        let description = match draft.description.as_deref().map(str::trim) {
            Some(d) if !d.is_empty() => {
                if d.chars().count() > MAX_DESCRIPTION_LENGTH {
                    return Err(ValidationError::too_long(
                        "description",
                        MAX_DESCRIPTION_LENGTH,
                    ));
                }
                Some(d.to_string())
            }
            _ => None,
        };

        Ok(Self {
            id: EventId::new(),
            user_id,
            title,
            description,
            date: Some(date),
            location: Some(location),
            attendee_count: parse_attendee_count(&draft.attendees),
            event_type: Some(event_type),
            created_at: Timestamp::now(),
        })
    }

    /// Event implied by a planner conversation that is saved for the first time.
    pub fn from_conversation(user_id: UserId, messages: &[Message]) -> Self {
        let title = messages
            .iter()
            .find(|m| m.role == Role::User)
            .map(|m| truncate_chars(&m.content, CONVERSATION_TITLE_CHARS))
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_EVENT_TITLE.to_string());

        let description = messages
            .last()
            .map(|m| truncate_chars(&m.content, CONVERSATION_DESCRIPTION_CHARS));

        Self {
            id: EventId::new(),
            user_id,
            title,
            description,
            date: None,
            location: None,
            attendee_count: 0,
            event_type: None,
            created_at: Timestamp::now(),
        }
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    /// Dashboard order: by date ascending, undated events last, then by creation.
    pub fn dashboard_order(a: &Event, b: &Event) -> Ordering {
        match (a.date, b.date) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
        .then_with(|| a.created_at.cmp(&b.created_at))
    }
}

/// Leading decimal digits of `input`, ignoring surrounding whitespace; otherwise 0.
pub fn parse_attendee_count(input: &str) -> u32 {
    let trimmed = input.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: String = unsigned.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

fn required(field: &str, value: &str, max: usize) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    if trimmed.chars().count() > max {
        return Err(ValidationError::too_long(field, max));
    }
    Ok(trimmed.to_string())
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner() -> UserId {
        UserId::new("user-1").unwrap()
    }

    fn draft() -> EventDraft {
        EventDraft {
            title: "  Sam's 30th  ".to_string(),
            event_type: "birthday".to_string(),
            date: "2026-06-12".to_string(),
            location: "Austin".to_string(),
            attendees: "45 people".to_string(),
            description: Some("   ".to_string()),
        }
    }

    #[test]
    fn create_trims_and_parses_fields() {
        let event = Event::create(owner(), draft()).unwrap();

        assert_eq!(event.title, "Sam's 30th");
        assert_eq!(event.date, NaiveDate::from_ymd_opt(2026, 6, 12));
        assert_eq!(event.attendee_count, 45);
        assert_eq!(event.event_type.as_deref(), Some("birthday"));
        assert!(event.description.is_none());
        assert!(event.is_owned_by(&owner()));
    }

    #[test]
    fn create_requires_core_fields() {
        for field in ["title", "event_type", "date", "location"] {
            let mut d = draft();
            match field {
                "title" => d.title.clear(),
                "event_type" => d.event_type = " ".to_string(),
                "date" => d.date.clear(),
                _ => d.location.clear(),
            }
            let err = Event::create(owner(), d).unwrap_err();
            assert_eq!(err.field(), field);
        }
    }

    #[test]
    fn create_rejects_malformed_date() {
        let mut d = draft();
        d.date = "12/06/2026".to_string();
        assert!(matches!(
            Event::create(owner(), d),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn attendee_count_falls_back_to_zero() {
        assert_eq!(parse_attendee_count("120"), 120);
        assert_eq!(parse_attendee_count(" 12abc"), 12);
        assert_eq!(parse_attendee_count("about 50"), 0);
        assert_eq!(parse_attendee_count(""), 0);
        assert_eq!(parse_attendee_count("-5"), 0);
        assert_eq!(parse_attendee_count("99999999999"), 0);
    }

    #[test]
    fn conversation_event_uses_first_user_message_as_title() {
        let long = "a".repeat(150);
        let messages = vec![
            Message::assistant("Welcome"),
            Message::user(long),
            Message::assistant("Here is a plan"),
        ];
        let event = Event::from_conversation(owner(), &messages);

        assert_eq!(event.title.chars().count(), CONVERSATION_TITLE_CHARS);
        assert_eq!(event.description.as_deref(), Some("Here is a plan"));
        assert!(event.date.is_none());
    }

    #[test]
    fn conversation_event_without_user_message_gets_default_title() {
        let event = Event::from_conversation(owner(), &[Message::assistant("Welcome")]);
        assert_eq!(event.title, DEFAULT_EVENT_TITLE);

        let event = Event::from_conversation(owner(), &[]);
        assert_eq!(event.title, DEFAULT_EVENT_TITLE);
        assert!(event.description.is_none());
    }

    #[test]
    fn dashboard_order_puts_undated_events_last() {
        let mut dated_late = Event::create(owner(), draft()).unwrap();
        dated_late.date = NaiveDate::from_ymd_opt(2026, 9, 1);
        let dated_early = Event::create(owner(), draft()).unwrap();
        let undated = Event::from_conversation(owner(), &[]);

        let mut events = vec![undated.clone(), dated_late.clone(), dated_early.clone()];
        events.sort_by(Event::dashboard_order);

        assert_eq!(events[0].id, dated_early.id);
        assert_eq!(events[1].id, dated_late.id);
        assert_eq!(events[2].id, undated.id);
    }
}
