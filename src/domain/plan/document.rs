//! Locating declared sections within assistant text.

use super::line::{parse_line, LineItem};
use super::template::{PlanTemplate, SectionKind, SectionSpec};
use serde::Serialize;

/// A located section and the items parsed from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanSection {
    pub kind: SectionKind,
    pub items: Vec<LineItem>,
}

/// Assistant text parsed against a template.
///
/// Sections are listed in template order; sections missing from the text are
/// absent here rather than empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlanDocument {
    pub sections: Vec<PlanSection>,
}

impl PlanDocument {
    pub fn parse(text: &str, template: &PlanTemplate) -> Self {
        let sections = template
            .sections()
            .iter()
            .filter_map(|spec| {
                let body = find_section(text, spec, template)?;
                Some(PlanSection {
                    kind: spec.kind,
                    items: body
                        .lines()
                        .filter_map(|line| parse_line(line, &spec.syntax))
                        .collect(),
                })
            })
            .collect();
        Self { sections }
    }

    pub fn section(&self, kind: SectionKind) -> Option<&PlanSection> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// Item texts of a section, empty if the section was not found.
    pub fn item_texts(&self, kind: SectionKind) -> impl Iterator<Item = &str> {
        self.section(kind)
            .into_iter()
            .flat_map(|s| s.items.iter().map(|i| i.text.as_str()))
    }
}

/// Returns the slice of `text` covering the first occurrence of `spec`'s header.
///
/// A header is the marker, optional whitespace, then `**Label**` compared
/// ASCII case-insensitively. The section runs from the marker up to the first
/// blank line (`"\n\n"`) directly followed by another declared section's
/// marker, or to the end of the text.
pub fn find_section<'a>(
    text: &'a str,
    spec: &SectionSpec,
    template: &PlanTemplate,
) -> Option<&'a str> {
    let (start, header_end) = find_header(text, spec)?;
    let body = &text[header_end..];
    let end = find_boundary(body, spec.kind, template).unwrap_or(body.len());
    Some(&text[start..header_end + end])
}

fn find_header(text: &str, spec: &SectionSpec) -> Option<(usize, usize)> {
    let header = format!("**{}**", spec.label);

    text.match_indices(spec.marker).find_map(|(start, marker)| {
        let after_marker = &text[start + marker.len()..];
        let rest = after_marker.trim_start();
        let candidate = rest.get(..header.len())?;
        if candidate.eq_ignore_ascii_case(&header) {
            let header_end = text.len() - rest.len() + header.len();
            Some((start, header_end))
        } else {
            None
        }
    })
}

fn find_boundary(body: &str, kind: SectionKind, template: &PlanTemplate) -> Option<usize> {
    // Blank-line runs overlap ("\n\n\n👥"), so every newline is a candidate start.
    body.match_indices('\n').find_map(|(pos, _)| {
        let next = body[pos..].strip_prefix("\n\n")?;
        let marker = next.chars().next()?;
        template
            .boundary_markers(kind)
            .any(|m| m == marker)
            .then_some(pos)
    })
}
