/// Whether a list renders as `<ol>` or `<ul>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Ordered,
    Unordered,
}

impl ListKind {
    pub fn open_tag(self) -> &'static str {
        match self {
            ListKind::Ordered => "<ol>",
            ListKind::Unordered => "<ul>",
        }
    }

    pub fn close_tag(self) -> &'static str {
        match self {
            ListKind::Ordered => "</ol>",
            ListKind::Unordered => "</ul>",
        }
    }
}

/// A matched list item line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMarker<'a> {
    pub kind: ListKind,
    pub text: &'a str,
}

/// List item block type with owned marker constants.
pub struct ListItem;

impl ListItem {
    pub const BULLETS: [char; 3] = ['-', '*', '+'];
    pub const ORDERED_SUFFIX: char = '.';

    /// Matches optional leading whitespace, a bullet or `digits.`, required
    /// whitespace, then the item text.
    pub fn parse(line: &str) -> Option<ListMarker<'_>> {
        let rest = line.trim_start_matches([' ', '\t']);

        let (kind, after_marker) = if let Some(after) = rest.strip_prefix(Self::BULLETS) {
            (ListKind::Unordered, after)
        } else {
            let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
            if digits == 0 {
                return None;
            }
            let after = rest[digits..].strip_prefix(Self::ORDERED_SUFFIX)?;
            (ListKind::Ordered, after)
        };

        if !after_marker.starts_with([' ', '\t']) {
            return None;
        }

        Some(ListMarker {
            kind,
            text: after_marker.trim(),
        })
    }
}
