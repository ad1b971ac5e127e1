use crate::parsing::lines::{indent_width, is_blank, strip_indent};

/// Indented code block type.
///
/// Inside a list the threshold doubles so that naturally indented item
/// continuation text is not read as code. Nested-indent inputs near the
/// thresholds are ambiguous and resolved purely by width.
pub struct IndentedCode;

impl IndentedCode {
    /// Columns of indent that open code outside a list.
    pub const INDENT: usize = 4;
    /// Columns of indent that open code while a list is open.
    pub const LIST_INDENT: usize = 8;

    pub fn required_indent(in_list: bool) -> usize {
        if in_list {
            Self::LIST_INDENT
        } else {
            Self::INDENT
        }
    }

    /// Returns the line with the qualifying indent stripped if it is a
    /// non-blank indented-code line.
    pub fn strip(line: &str, in_list: bool) -> Option<&str> {
        let required = Self::required_indent(in_list);
        if is_blank(line) || indent_width(line) < required {
            return None;
        }
        Some(strip_indent(line, required))
    }

    /// A blank line inside a code run, with the qualifying indent stripped.
    pub fn blank(line: &str, in_list: bool) -> &str {
        strip_indent(line, Self::required_indent(in_list))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_spaces_open_code() {
        assert_eq!(IndentedCode::strip("    let x = 1;", false), Some("let x = 1;"));
    }

    #[test]
    fn extra_indent_is_kept() {
        assert_eq!(IndentedCode::strip("      nested", false), Some("  nested"));
    }

    #[test]
    fn tab_counts_as_four() {
        assert_eq!(IndentedCode::strip("\tcode", false), Some("code"));
    }

    #[test]
    fn list_context_needs_eight() {
        assert_eq!(IndentedCode::strip("    continuation", true), None);
        assert_eq!(IndentedCode::strip("        code", true), Some("code"));
    }

    #[test]
    fn blank_lines_never_open_code() {
        assert_eq!(IndentedCode::strip("        ", false), None);
    }
}
