/// Fenced code block type with owned delimiter constant.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Returns the info string if `line` is a fence delimiter.
    ///
    /// The right-trimmed line must start with three backticks; whatever
    /// follows, trimmed, is the language tag (empty if absent). Leading
    /// whitespace disqualifies the line.
    pub fn sig(line: &str) -> Option<&str> {
        line.trim_end()
            .strip_prefix(Self::BACKTICKS)
            .map(str::trim)
    }
}
