/// A parsed `[label](url)` target, with byte lengths relative to the
/// start of the construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkTarget<'a> {
    pub label: &'a str,
    pub url: &'a str,
    /// Total byte length of the construct, including any `!` prefix.
    pub len: usize,
}

/// Link and image inline types with owned delimiter constants.
pub struct Link;

impl Link {
    pub const IMAGE_PREFIX: u8 = b'!';
    pub const LABEL_OPEN: char = '[';
    pub const LABEL_CLOSE: char = ']';
    pub const URL_OPEN: char = '(';
    pub const URL_CLOSE: char = ')';

    /// Parses `[label](url)` at the start of `rest`. The label must be non-empty.
    pub fn parse_link(rest: &str) -> Option<LinkTarget<'_>> {
        let target = Self::parse_target(rest)?;
        (!target.label.is_empty()).then_some(target)
    }

    /// Parses `![alt](url)` at the start of `rest`. The alt text may be empty.
    pub fn parse_image(rest: &str) -> Option<LinkTarget<'_>> {
        let body = rest.strip_prefix(Self::IMAGE_PREFIX as char)?;
        let target = Self::parse_target(body)?;
        Some(LinkTarget {
            len: target.len + 1,
            ..target
        })
    }

    fn parse_target(rest: &str) -> Option<LinkTarget<'_>> {
        let body = rest.strip_prefix(Self::LABEL_OPEN)?;
        let label_len = body.find(Self::LABEL_CLOSE)?;
        let label = &body[..label_len];

        let after_label = body[label_len + 1..].strip_prefix(Self::URL_OPEN)?;
        let url_len = after_label.find(Self::URL_CLOSE)?;
        if url_len == 0 {
            return None;
        }
        let url = &after_label[..url_len];

        Some(LinkTarget {
            label,
            url,
            // [ label ] ( url )
            len: 1 + label_len + 2 + url_len + 1,
        })
    }
}
