/// Which wrapping element a delimited run renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmphasisKind {
    Strong,
    Emphasis,
    Strikethrough,
}

impl EmphasisKind {
    /// HTML element name for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            EmphasisKind::Strong => "strong",
            EmphasisKind::Emphasis => "em",
            EmphasisKind::Strikethrough => "del",
        }
    }
}

/// A matched delimiter run starting at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmphasisRun {
    pub kind: EmphasisKind,
    /// Byte length of one delimiter (opening and closing are equal).
    pub delim_len: usize,
    /// Byte length of the text between the delimiters.
    pub inner_len: usize,
}

impl EmphasisRun {
    /// Total byte length including both delimiters.
    pub fn len(&self) -> usize {
        self.delim_len * 2 + self.inner_len
    }
}

/// Emphasis-family inline types with owned delimiter constants.
pub struct Emphasis;

impl Emphasis {
    pub const UNDERSCORE: char = '_';

    /// Delimiters in match order. Double delimiters precede single ones so
    /// `**x**` is strong rather than emphasis wrapping stray asterisks.
    pub const DELIMITERS: [(EmphasisKind, &'static str); 5] = [
        (EmphasisKind::Strong, "**"),
        (EmphasisKind::Strong, "__"),
        (EmphasisKind::Strikethrough, "~~"),
        (EmphasisKind::Emphasis, "*"),
        (EmphasisKind::Emphasis, "_"),
    ];

    /// Matches the first delimiter whose run opens at the start of `rest`.
    ///
    /// `prev` is the character before the cursor; underscores inside words
    /// (`snake_case_name`) never open or close a run.
    pub fn parse(rest: &str, prev: Option<char>) -> Option<EmphasisRun> {
        Self::DELIMITERS
            .iter()
            .find_map(|&(kind, delim)| Self::try_delim(rest, prev, kind, delim))
    }

    fn try_delim(
        rest: &str,
        prev: Option<char>,
        kind: EmphasisKind,
        delim: &str,
    ) -> Option<EmphasisRun> {
        let body = rest.strip_prefix(delim)?;
        let inner_len = body.find(delim)?;
        let inner = &body[..inner_len];

        if inner.trim().is_empty() {
            return None;
        }
        if kind == EmphasisKind::Emphasis
            && (inner.starts_with(char::is_whitespace) || inner.ends_with(char::is_whitespace))
        {
            return None;
        }
        if delim.starts_with(Self::UNDERSCORE) {
            let after = body[inner_len + delim.len()..].chars().next();
            if prev.is_some_and(char::is_alphanumeric) || after.is_some_and(char::is_alphanumeric)
            {
                return None;
            }
        }

        Some(EmphasisRun {
            kind,
            delim_len: delim.len(),
            inner_len,
        })
    }
}
