/// Blockquote block type with owned delimiter constant.
///
/// Each quoted line is its own block; consecutive quote lines are not merged.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Returns the quoted text if `line` starts with the prefix.
    pub fn parse(line: &str) -> Option<&str> {
        line.trim_start().strip_prefix(Self::PREFIX).map(str::trim)
    }
}
