use std::sync::OnceLock;

use regex::Regex;

/// Pipe table row block type.
///
/// Alignment rows are recognised only so they can be dropped; cells are
/// never aligned and the first row is not promoted to a header.
pub struct TableRow;

impl TableRow {
    pub const SEPARATOR: char = '|';

    /// True if the line participates in a table.
    pub fn is_row(line: &str) -> bool {
        line.contains(Self::SEPARATOR)
    }

    /// True if the line is an alignment row such as `|:--|--:|`.
    pub fn is_alignment(line: &str) -> bool {
        static ALIGNMENT_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = ALIGNMENT_REGEX.get_or_init(|| {
            Regex::new(r"^\s*\|?\s*:?-+:?\s*(\|\s*:?-+:?\s*)*\|?\s*$")
                .expect("Invalid table alignment regex")
        });
        re.is_match(line)
    }

    /// Splits a row into trimmed cells, ignoring one outer pipe on each side.
    pub fn cells(line: &str) -> Vec<&str> {
        let t = line.trim();
        let t = t.strip_prefix(Self::SEPARATOR).unwrap_or(t);
        let t = t.strip_suffix(Self::SEPARATOR).unwrap_or(t);
        t.split(Self::SEPARATOR).map(str::trim).collect()
    }
}
