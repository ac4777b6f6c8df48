//! Declared section grammar of an assistant event plan.
//!
//! The assistant is prompted to answer with a fixed markdown template whose
//! sections open with an emoji marker and a bold label, e.g.
//! `✅ **Task List**`. The template here is the single source of truth for
//! which sections exist and how their lines are itemized; adding or removing
//! a section is a data change.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Sections the planner template declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Overview,
    Timeline,
    TaskList,
    VendorCategories,
    BudgetBreakdown,
    NextSteps,
    ProTips,
}

/// Which leading syntax turns a line into an item, and what gets stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSyntax {
    /// Characters that mark an item when followed by whitespace.
    pub markers: &'static [char],
    /// Whether `12. text` lines are items.
    pub numbered: bool,
    /// Whether `[ ]` / `[x]` checkbox prefixes are stripped from items.
    pub checkboxes: bool,
}

impl LineSyntax {
    /// Plain bullet or numbered lists.
    pub const BULLETED: LineSyntax = LineSyntax {
        markers: &['-', '•', '*'],
        numbered: true,
        checkboxes: false,
    };

    /// Checklists: bullets, numbers and bare bracket checkboxes.
    pub const CHECKLIST: LineSyntax = LineSyntax {
        markers: &['-', '•', '*', '[', ']'],
        numbered: true,
        checkboxes: true,
    };

    /// Numbered steps only.
    pub const NUMBERED: LineSyntax = LineSyntax {
        markers: &[],
        numbered: true,
        checkboxes: false,
    };
}

/// One declared section: its marker, its label and its item syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSpec {
    pub kind: SectionKind,
    pub marker: char,
    pub label: &'static str,
    pub syntax: LineSyntax,
}

impl SectionSpec {
    pub const fn new(
        kind: SectionKind,
        marker: char,
        label: &'static str,
        syntax: LineSyntax,
    ) -> Self {
        Self {
            kind,
            marker,
            label,
            syntax,
        }
    }
}

/// Ordered list of recognized sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanTemplate {
    sections: Vec<SectionSpec>,
}

impl PlanTemplate {
    pub fn new(sections: Vec<SectionSpec>) -> Self {
        Self { sections }
    }

    /// The template the planner system prompt asks the assistant to follow.
    pub fn standard() -> &'static PlanTemplate {
        &STANDARD_TEMPLATE
    }

    pub fn sections(&self) -> &[SectionSpec] {
        &self.sections
    }

    pub fn section(&self, kind: SectionKind) -> Option<&SectionSpec> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// Markers that close a section of the given kind: every other section's marker.
    pub fn boundary_markers(&self, kind: SectionKind) -> impl Iterator<Item = char> + '_ {
        self.sections
            .iter()
            .filter(move |s| s.kind != kind)
            .map(|s| s.marker)
    }
}

static STANDARD_TEMPLATE: Lazy<PlanTemplate> = Lazy::new(|| {
    PlanTemplate::new(vec![
        SectionSpec::new(
            SectionKind::Overview,
            '📋',
            "Event Overview",
            LineSyntax::BULLETED,
        ),
        SectionSpec::new(
            SectionKind::Timeline,
            '⏰',
            "Timeline & Milestones",
            LineSyntax::BULLETED,
        ),
        SectionSpec::new(
            SectionKind::TaskList,
            '✅',
            "Task List",
            LineSyntax::CHECKLIST,
        ),
        SectionSpec::new(
            SectionKind::VendorCategories,
            '👥',
            "Vendor Categories Needed",
            LineSyntax::BULLETED,
        ),
        SectionSpec::new(
            SectionKind::BudgetBreakdown,
            '💰',
            "Budget Breakdown",
            LineSyntax::BULLETED,
        ),
        SectionSpec::new(
            SectionKind::NextSteps,
            '🎯',
            "Next Steps",
            LineSyntax::NUMBERED,
        ),
        SectionSpec::new(SectionKind::ProTips, '💡', "Pro Tips", LineSyntax::BULLETED),
    ])
});
