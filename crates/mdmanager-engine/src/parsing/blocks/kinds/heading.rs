/// ATX heading block type.
pub struct Heading;

impl Heading {
    /// Heading prefixes, longest first so `###### x` is never matched by a
    /// shorter prefix.
    pub const PREFIXES: [(u8, &'static str); 6] = [
        (6, "###### "),
        (5, "##### "),
        (4, "#### "),
        (3, "### "),
        (2, "## "),
        (1, "# "),
    ];

    /// Returns `(level, text)` if `line` is a heading. A marker with no
    /// text after it is not a heading.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        Self::PREFIXES.iter().find_map(|&(level, prefix)| {
            let text = line.strip_prefix(prefix)?.trim();
            (!text.is_empty()).then_some((level, text))
        })
    }
}
