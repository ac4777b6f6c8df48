//! Plan module - Extraction of structured items from assistant plans.
//!
//! The assistant answers in a sectioned markdown template (see
//! [`PLANNER_SYSTEM_PROMPT`]). This module declares that template as data,
//! parses assistant text against it and derives task titles and vendor
//! categories. Everything here is pure; extraction never fails, missing
//! sections yield empty lists.

mod cache;
mod document;
mod extractor;
mod line;
mod prompt;
mod template;

pub use cache::{PlanCache, DEFAULT_PLAN_CACHE_CAPACITY};
pub use document::{find_section, PlanDocument, PlanSection};
pub use extractor::{
    extract_tasks, extract_vendors, ExtractedPlan, ExtractionRule, ItemFilter, PlanExtractor,
    MAX_EXTRACTED_TASKS, NEXT_STEP_DEDUP_PREFIX,
};
pub use line::{parse_line, ItemMarker, LineItem};
pub use prompt::PLANNER_SYSTEM_PROMPT;
pub use template::{LineSyntax, PlanTemplate, SectionKind, SectionSpec};
