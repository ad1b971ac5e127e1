use serde::{Deserialize, Serialize};

/// File name used when the opener does not supply one.
pub const DEFAULT_FILE_NAME: &str = "Untitled.md";

/// Content handed from a viewer page to the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingContent {
    pub content: String,
    pub source_url: String,
    pub file_name: String,
    pub start_in_preview: bool,
}

impl Default for PendingContent {
    fn default() -> Self {
        Self {
            content: String::new(),
            source_url: String::new(),
            file_name: DEFAULT_FILE_NAME.to_string(),
            start_in_preview: false,
        }
    }
}

/// A single slot holding at most one [`PendingContent`].
///
/// Reading is destructive: [`PendingSlot::take`] empties the slot, so the
/// editor picks up handed-over content exactly once.
#[derive(Debug, Default)]
pub struct PendingSlot(Option<PendingContent>);

impl PendingSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores content, returning whatever was waiting before.
    pub fn put(&mut self, content: PendingContent) -> Option<PendingContent> {
        self.0.replace(content)
    }

    pub fn take(&mut self) -> Option<PendingContent> {
        self.0.take()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}
