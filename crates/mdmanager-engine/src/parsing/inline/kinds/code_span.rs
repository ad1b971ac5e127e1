/// Code span inline type with owned delimiter constant.
///
/// Code spans are "raw zones" - no other inline parsing occurs inside them.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    /// Returns the length of the inner text if `rest` opens a closed,
    /// non-empty code span.
    pub fn inner_len(rest: &str) -> Option<usize> {
        let inner = rest.strip_prefix(Self::TICK as char)?;
        let len = inner.find(Self::TICK as char)?;
        (len > 0).then_some(len)
    }
}
