//! Task and vendor-category extraction from the latest assistant plan.
//!
//! Extraction is a pure function of message text. Each output list is
//! assembled from one or more template sections through an [`ItemFilter`]:
//!
//! - tasks: `Task List` items, then `Next Steps` items not already covered,
//!   capped at [`MAX_EXTRACTED_TASKS`]
//! - vendor categories: `Vendor Categories Needed` items

use super::document::PlanDocument;
use super::template::{PlanTemplate, SectionKind};
use crate::domain::conversation::{last_assistant_message, Message};
use once_cell::sync::Lazy;
use serde::Serialize;

/// Upper bound on tasks derived from one plan.
pub const MAX_EXTRACTED_TASKS: usize = 25;

/// Leading characters of a next step compared against already kept tasks.
pub const NEXT_STEP_DEDUP_PREFIX: usize = 20;

/// Acceptance rules applied to the items of one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemFilter {
    /// Items must be strictly longer than this many characters.
    pub min_chars_exclusive: usize,
    /// Reject items that still start with `*` (bold sub-headings).
    pub reject_emphasis: bool,
    /// Reject items whose first N characters already appear in a kept item.
    pub dedupe_prefix: Option<usize>,
}

impl ItemFilter {
    fn accepts(&self, item: &str, kept: &[String]) -> bool {
        if item.chars().count() <= self.min_chars_exclusive {
            return false;
        }
        if self.reject_emphasis && item.starts_with('*') {
            return false;
        }
        if let Some(prefix_len) = self.dedupe_prefix {
            let prefix = char_prefix(item, prefix_len);
            if kept.iter().any(|k| k.contains(prefix)) {
                return false;
            }
        }
        true
    }
}

/// How one output list is assembled from template sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRule {
    pub sources: Vec<(SectionKind, ItemFilter)>,
    pub limit: Option<usize>,
}

impl ExtractionRule {
    fn apply(&self, document: &PlanDocument) -> Vec<String> {
        let mut kept: Vec<String> = Vec::new();
        for (kind, filter) in &self.sources {
            for item in document.item_texts(*kind) {
                if filter.accepts(item, &kept) {
                    kept.push(item.to_string());
                }
            }
        }
        if let Some(limit) = self.limit {
            kept.truncate(limit);
        }
        kept
    }
}

/// Everything derived from one assistant message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractedPlan {
    pub tasks: Vec<String>,
    pub vendor_categories: Vec<String>,
}

impl ExtractedPlan {
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty() && self.vendor_categories.is_empty()
    }
}

/// Template plus the rules that turn its sections into task and vendor lists.
#[derive(Debug, Clone)]
pub struct PlanExtractor {
    template: PlanTemplate,
    tasks: ExtractionRule,
    vendors: ExtractionRule,
}

impl PlanExtractor {
    pub fn new(template: PlanTemplate, tasks: ExtractionRule, vendors: ExtractionRule) -> Self {
        Self {
            template,
            tasks,
            vendors,
        }
    }

    /// Rules matching the planner's system prompt.
    pub fn standard() -> &'static PlanExtractor {
        &STANDARD_EXTRACTOR
    }

    pub fn template(&self) -> &PlanTemplate {
        &self.template
    }

    pub fn parse(&self, text: &str) -> PlanDocument {
        PlanDocument::parse(text, &self.template)
    }

    pub fn extract(&self, text: &str) -> ExtractedPlan {
        let document = self.parse(text);
        ExtractedPlan {
            tasks: self.tasks.apply(&document),
            vendor_categories: self.vendors.apply(&document),
        }
    }

    pub fn extract_tasks_from_text(&self, text: &str) -> Vec<String> {
        self.tasks.apply(&self.parse(text))
    }

    pub fn extract_vendors_from_text(&self, text: &str) -> Vec<String> {
        self.vendors.apply(&self.parse(text))
    }
}

static STANDARD_EXTRACTOR: Lazy<PlanExtractor> = Lazy::new(|| {
    PlanExtractor::new(
        PlanTemplate::standard().clone(),
        ExtractionRule {
            sources: vec![
                (
                    SectionKind::TaskList,
                    ItemFilter {
                        min_chars_exclusive: 5,
                        reject_emphasis: true,
                        dedupe_prefix: None,
                    },
                ),
                (
                    SectionKind::NextSteps,
                    ItemFilter {
                        min_chars_exclusive: 5,
                        reject_emphasis: false,
                        dedupe_prefix: Some(NEXT_STEP_DEDUP_PREFIX),
                    },
                ),
            ],
            limit: Some(MAX_EXTRACTED_TASKS),
        },
        ExtractionRule {
            sources: vec![(
                SectionKind::VendorCategories,
                ItemFilter {
                    min_chars_exclusive: 3,
                    reject_emphasis: true,
                    dedupe_prefix: None,
                },
            )],
            limit: None,
        },
    )
});

/// Tasks derived from the most recent assistant message; empty if none.
pub fn extract_tasks(messages: &[Message]) -> Vec<String> {
    last_assistant_message(messages)
        .map(|m| PlanExtractor::standard().extract_tasks_from_text(&m.content))
        .unwrap_or_default()
}

/// Vendor categories derived from the most recent assistant message; empty if none.
pub fn extract_vendors(messages: &[Message]) -> Vec<String> {
    last_assistant_message(messages)
        .map(|m| PlanExtractor::standard().extract_vendors_from_text(&m.content))
        .unwrap_or_default()
}

fn char_prefix(s: &str, chars: usize) -> &str {
    match s.char_indices().nth(chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SAMPLE_PLAN: &str = "Here is your plan!\n\n\
        ✅ **Task List**\n\
        - [ ] Book venue and confirm date\n\
        - [ ] Hire catering service\n\
        - [ ] **Week 1**\n\n\
        🎯 **Next Steps**\n\
        1. Call venues this week\n\
        2. Confirm catering by Friday\n\n\
        👥 **Vendor Categories Needed**\n\
        - Venue\n\
        - Catering\n\
        - DJ\n\
        - **Optional**\n";

    fn conversation(assistant: &str) -> Vec<Message> {
        vec![
            Message::assistant("Welcome!"),
            Message::user("Plan my birthday"),
            Message::assistant(assistant),
        ]
    }

    // ════════════════════════════════════════════════════════════════════════
    // Tasks
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn extracts_task_list_then_next_steps() {
        let tasks = extract_tasks(&conversation(SAMPLE_PLAN));
        assert_eq!(
            tasks,
            vec![
                "Book venue and confirm date",
                "Hire catering service",
                "Call venues this week",
                "Confirm catering by Friday",
            ]
        );
    }

    #[test]
    fn no_assistant_message_yields_nothing() {
        let messages = vec![Message::user("hello")];
        assert!(extract_tasks(&messages).is_empty());
        assert!(extract_vendors(&messages).is_empty());
        assert!(extract_tasks(&[]).is_empty());
    }

    #[test]
    fn only_latest_assistant_message_is_used() {
        let messages = vec![
            Message::assistant(SAMPLE_PLAN),
            Message::user("thanks"),
            Message::assistant("Glad to help!"),
        ];
        assert!(extract_tasks(&messages).is_empty());
    }

    #[test]
    fn latest_assistant_message_before_trailing_user_message_is_used() {
        let mut messages = conversation(SAMPLE_PLAN);
        messages.push(Message::user("Can you add more?"));
        assert_eq!(extract_tasks(&messages).len(), 4);
    }

    #[test]
    fn short_items_are_dropped() {
        let text = "✅ **Task List**\n- Venue\n- Cake!\n- Order cake";
        assert_eq!(
            PlanExtractor::standard().extract_tasks_from_text(text),
            vec!["Order cake"]
        );
    }

    #[test]
    fn next_step_covered_by_task_prefix_is_dropped() {
        let text = "✅ **Task List**\n\
            - Book venue and confirm date for Saturday\n\n\
            🎯 **Next Steps**\n\
            1. Book venue and confirm date early\n\
            2. Send invitations";
        assert_eq!(
            PlanExtractor::standard().extract_tasks_from_text(text),
            vec!["Book venue and confirm date for Saturday", "Send invitations"]
        );
    }

    #[test]
    fn next_steps_dedupe_against_each_other() {
        let text = "🎯 **Next Steps**\n\
            1. Call the venue manager today\n\
            2. Call the venue manager tomorrow";
        assert_eq!(
            PlanExtractor::standard().extract_tasks_from_text(text),
            vec!["Call the venue manager today"]
        );
    }

    #[test]
    fn next_steps_keep_leading_emphasis() {
        let text = "🎯 **Next Steps**\n1. **Call** the venue";
        assert_eq!(
            PlanExtractor::standard().extract_tasks_from_text(text),
            vec!["**Call** the venue"]
        );
    }

    #[test]
    fn tasks_are_capped() {
        let mut text = String::from("✅ **Task List**\n");
        for i in 0..30 {
            text.push_str(&format!("- Task number {i:02}\n"));
        }
        let tasks = PlanExtractor::standard().extract_tasks_from_text(&text);
        assert_eq!(tasks.len(), MAX_EXTRACTED_TASKS);
        assert_eq!(tasks[0], "Task number 00");
        assert_eq!(tasks[24], "Task number 24");
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // Five characters, more than five bytes.
        let text = "✅ **Task List**\n- Café!\n- Crème brûlée";
        assert_eq!(
            PlanExtractor::standard().extract_tasks_from_text(text),
            vec!["Crème brûlée"]
        );
    }

    // ════════════════════════════════════════════════════════════════════════
    // Vendors
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn extracts_vendor_categories() {
        assert_eq!(
            extract_vendors(&conversation(SAMPLE_PLAN)),
            vec!["Venue", "Catering"]
        );
    }

    #[test]
    fn numbered_vendor_categories_are_accepted() {
        let text = "👥 **Vendor Categories Needed**\n1. Photographer\n2. Florist";
        assert_eq!(
            PlanExtractor::standard().extract_vendors_from_text(text),
            vec!["Photographer", "Florist"]
        );
    }

    #[test]
    fn vendor_categories_keep_source_order_without_cap_or_dedup() {
        let mut text = String::from("👥 **Vendor Categories Needed**\n");
        let mut expected = Vec::new();
        for i in 0..30 {
            let label = format!("Vendor {:02}", i);
            text.push_str(&format!("- {}\n", label));
            expected.push(label);
            if i % 10 == 0 {
                text.push_str("- Catering\n");
                expected.push("Catering".to_string());
            }
        }

        let vendors = PlanExtractor::standard().extract_vendors_from_text(&text);

        assert_eq!(vendors.len(), 33);
        assert_eq!(vendors, expected);
        assert_eq!(vendors.iter().filter(|v| *v == "Catering").count(), 3);
    }

    #[test]
    fn extract_returns_both_lists() {
        let plan = PlanExtractor::standard().extract(SAMPLE_PLAN);
        assert_eq!(plan.tasks.len(), 4);
        assert_eq!(plan.vendor_categories.len(), 2);
        assert!(!plan.is_empty());
        assert!(PlanExtractor::standard().extract("hi").is_empty());
    }

    #[test]
    fn char_prefix_respects_multibyte_boundaries() {
        assert_eq!(char_prefix("ééééé", 2), "éé");
        assert_eq!(char_prefix("ab", 20), "ab");
    }

    proptest! {
        #[test]
        fn extraction_is_deterministic(text in "\\PC{0,400}") {
            let first = PlanExtractor::standard().extract(&text);
            let second = PlanExtractor::standard().extract(&text);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn extracted_tasks_respect_filters(
            items in proptest::collection::vec("[a-zA-Z ]{0,30}", 0..40)
        ) {
            let mut text = String::from("✅ **Task List**\n");
            for item in &items {
                text.push_str("- ");
                text.push_str(item);
                text.push('\n');
            }
            let tasks = PlanExtractor::standard().extract_tasks_from_text(&text);
            prop_assert!(tasks.len() <= MAX_EXTRACTED_TASKS);
            for task in &tasks {
                prop_assert!(task.chars().count() > 5);
                prop_assert!(!task.starts_with('*'));
                prop_assert_eq!(task.trim(), task.as_str());
            }
        }
    }
}
