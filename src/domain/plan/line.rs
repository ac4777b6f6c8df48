//! Line-level item recognition within a plan section.

use super::template::LineSyntax;
use serde::Serialize;

/// The leading syntax that made a line an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "char", rename_all = "snake_case")]
pub enum ItemMarker {
    Bullet(char),
    Numbered,
}

/// A line item with its leading syntax removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    pub marker: ItemMarker,
    /// Some when a checkbox prefix was stripped.
    pub checked: Option<bool>,
    pub text: String,
}

/// Characters that get stripped as a bullet. Bracket markers only identify
/// an item; they are removed by the checkbox pass.
const BULLET_CHARS: [char; 3] = ['-', '•', '*'];

/// Parses one raw line of a section body.
///
/// Returns `None` when the trimmed line does not start with an item marker of
/// `syntax`. Stripping is applied in a fixed order: bullet, numbering, empty
/// checkbox, ticked checkbox; then the remainder is trimmed.
pub fn parse_line(line: &str, syntax: &LineSyntax) -> Option<LineItem> {
    let trimmed = line.trim();
    let marker = recognize(trimmed, syntax)?;

    let mut rest = trimmed;
    if let Some(after) = strip_bullet(rest, syntax) {
        rest = after;
    }
    if syntax.numbered {
        if let Some(after) = strip_numbering(rest) {
            rest = after;
        }
    }

    let mut checked = None;
    if syntax.checkboxes {
        if let Some(after) = strip_empty_checkbox(rest) {
            rest = after;
            checked = Some(false);
        }
        if let Some(after) = strip_ticked_checkbox(rest) {
            rest = after;
            checked = Some(true);
        }
    }

    Some(LineItem {
        marker,
        checked,
        text: rest.trim().to_string(),
    })
}

fn recognize(trimmed: &str, syntax: &LineSyntax) -> Option<ItemMarker> {
    let mut chars = trimmed.chars();
    if let (Some(first), Some(second)) = (chars.next(), chars.next()) {
        if syntax.markers.contains(&first) && second.is_whitespace() {
            return Some(ItemMarker::Bullet(first));
        }
    }
    if syntax.numbered && strip_numbering(trimmed).is_some() {
        return Some(ItemMarker::Numbered);
    }
    None
}

/// `^[-•*]\s+`
fn strip_bullet<'a>(s: &'a str, syntax: &LineSyntax) -> Option<&'a str> {
    let first = s.chars().next()?;
    if !BULLET_CHARS.contains(&first) || !syntax.markers.contains(&first) {
        return None;
    }
    strip_required_whitespace(&s[first.len_utf8()..])
}

/// `^\d+\.\s+`
fn strip_numbering(s: &str) -> Option<&str> {
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let after = s[digits..].strip_prefix('.')?;
    strip_required_whitespace(after)
}

/// `^\[\s*\]\s*`
fn strip_empty_checkbox(s: &str) -> Option<&str> {
    let inner = s.strip_prefix('[')?.trim_start();
    let after = inner.strip_prefix(']')?;
    Some(after.trim_start())
}

/// `^\[x\]\s*`, case-insensitive.
fn strip_ticked_checkbox(s: &str) -> Option<&str> {
    let head = s.get(..3)?;
    if head.eq_ignore_ascii_case("[x]") {
        Some(s[3..].trim_start())
    } else {
        None
    }
}

fn strip_required_whitespace(s: &str) -> Option<&str> {
    let rest = s.trim_start();
    if rest.len() == s.len() {
        None
    } else {
        Some(rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &str, syntax: &LineSyntax) -> Option<String> {
        parse_line(line, syntax).map(|item| item.text)
    }

    #[test]
    fn bullet_lines_are_items() {
        assert_eq!(
            text("- Book venue", &LineSyntax::BULLETED).as_deref(),
            Some("Book venue")
        );
        assert_eq!(
            text("• Hire DJ", &LineSyntax::BULLETED).as_deref(),
            Some("Hire DJ")
        );
        assert_eq!(
            text("   * Order cake  ", &LineSyntax::BULLETED).as_deref(),
            Some("Order cake")
        );
    }

    #[test]
    fn bullet_without_whitespace_is_not_an_item() {
        assert!(parse_line("-Book venue", &LineSyntax::BULLETED).is_none());
        assert!(parse_line("**Bold heading**", &LineSyntax::BULLETED).is_none());
    }

    #[test]
    fn numbered_lines_are_items() {
        let item = parse_line("12. Send invitations", &LineSyntax::NUMBERED).unwrap();
        assert_eq!(item.marker, ItemMarker::Numbered);
        assert_eq!(item.text, "Send invitations");
    }

    #[test]
    fn numbered_syntax_ignores_bullets() {
        assert!(parse_line("- Call venues", &LineSyntax::NUMBERED).is_none());
    }

    #[test]
    fn numbered_syntax_keeps_inner_bullet() {
        assert_eq!(
            text("1. - Call venues", &LineSyntax::NUMBERED).as_deref(),
            Some("- Call venues")
        );
    }

    #[test]
    fn checklist_strips_bullet_then_checkbox() {
        let item = parse_line("- [ ] Book venue", &LineSyntax::CHECKLIST).unwrap();
        assert_eq!(item.marker, ItemMarker::Bullet('-'));
        assert_eq!(item.checked, Some(false));
        assert_eq!(item.text, "Book venue");

        let item = parse_line("- [X] Send invites", &LineSyntax::CHECKLIST).unwrap();
        assert_eq!(item.checked, Some(true));
        assert_eq!(item.text, "Send invites");
    }

    #[test]
    fn checklist_bracket_marker_needs_whitespace() {
        // "[ ] task" starts with '[' followed by a space.
        let item = parse_line("[ ] Rent chairs", &LineSyntax::CHECKLIST).unwrap();
        assert_eq!(item.marker, ItemMarker::Bullet('['));
        assert_eq!(item.text, "Rent chairs");

        // "[x] task" has no whitespace after the first character.
        assert!(parse_line("[x] Rent chairs", &LineSyntax::CHECKLIST).is_none());
    }

    #[test]
    fn emphasis_bullet_keeps_remaining_asterisks() {
        assert_eq!(
            text("* **Week 1** venue", &LineSyntax::CHECKLIST).as_deref(),
            Some("**Week 1** venue")
        );
    }

    #[test]
    fn plain_text_is_not_an_item() {
        assert!(parse_line("Here is your plan:", &LineSyntax::CHECKLIST).is_none());
        assert!(parse_line("", &LineSyntax::CHECKLIST).is_none());
        assert!(parse_line("2024. year", &LineSyntax::NUMBERED).is_some());
        assert!(parse_line("3.five", &LineSyntax::NUMBERED).is_none());
    }
}
