/// Scanning position within one inline span.
///
/// The cursor only ever rests on `char` boundaries: [`Cursor::step`] moves
/// over a whole character and [`Cursor::advance`] is only called with the
/// byte length of a matched construct, which starts and ends on ASCII
/// delimiters.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    src: &'a str,
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, offset: 0 }
    }

    /// Byte offset into the span.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn at_end(&self) -> bool {
        self.offset >= self.src.len()
    }

    /// True if the next byte is `delim`.
    pub fn at(&self, delim: u8) -> bool {
        self.src.as_bytes().get(self.offset) == Some(&delim)
    }

    /// The unconsumed remainder of the span.
    pub fn rest(&self) -> &'a str {
        self.src.get(self.offset..).unwrap_or_default()
    }

    /// The character just before the cursor, used for word-boundary checks.
    pub fn prev_char(&self) -> Option<char> {
        self.src
            .get(..self.offset)
            .and_then(|consumed| consumed.chars().next_back())
    }

    /// Moves past the next character.
    pub fn step(&mut self) {
        if let Some(c) = self.rest().chars().next() {
            self.offset += c.len_utf8();
        }
    }

    /// Moves past a matched construct of `len` bytes.
    pub fn advance(&mut self, len: usize) {
        self.offset = (self.offset + len).min(self.src.len());
    }
}
