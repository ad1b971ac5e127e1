pub mod blocks;
pub mod inline;
pub mod lines;

#[cfg(test)]
mod tests;

use blocks::{HtmlBuilder, MarkdownLineClassifier};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConvertError {
    #[error("Input of {len} bytes exceeds the {limit} byte limit")]
    InputTooLarge { len: usize, limit: usize },
}

/// Converts Markdown to an HTML fragment.
///
/// Never fails: anything that is not recognised as a block or inline
/// construct is rendered as paragraph text. Empty input yields `""`.
pub fn to_html(markdown: &str) -> String {
    if markdown.is_empty() {
        return String::new();
    }

    let normalized = lines::normalize_line_endings(markdown);
    let classifier = MarkdownLineClassifier;
    let mut builder = HtmlBuilder::new();

    for line in lines::lines(&normalized) {
        let class = classifier.classify(line, builder.context());
        builder.push(class);
    }

    builder.finish()
}

/// A reusable converter with an optional bound on input size.
///
/// Holds no per-conversion state, so one instance can serve concurrent
/// callers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Converter {
    max_input_bytes: Option<usize>,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects inputs longer than `limit` bytes.
    pub fn with_max_input_bytes(limit: usize) -> Self {
        Self {
            max_input_bytes: Some(limit),
        }
    }

    pub fn max_input_bytes(&self) -> Option<usize> {
        self.max_input_bytes
    }

    pub fn convert(&self, markdown: &str) -> Result<String, ConvertError> {
        if let Some(limit) = self.max_input_bytes
            && markdown.len() > limit
        {
            log::warn!(
                "Rejecting markdown input of {} bytes (limit {limit})",
                markdown.len()
            );
            return Err(ConvertError::InputTooLarge {
                len: markdown.len(),
                limit,
            });
        }

        let html = to_html(markdown);
        log::debug!(
            "Converted {} bytes of markdown to {} bytes of HTML",
            markdown.len(),
            html.len()
        );
        Ok(html)
    }
}
