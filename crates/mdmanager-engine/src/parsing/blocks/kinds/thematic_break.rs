/// Horizontal rule block type.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKERS: [&'static str; 3] = ["---", "***", "___"];

    /// True if the trimmed line is exactly one of the markers.
    pub fn matches(line: &str) -> bool {
        Self::MARKERS.contains(&line.trim())
    }
}
