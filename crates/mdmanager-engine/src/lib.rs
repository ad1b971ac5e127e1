pub mod io;
pub mod messaging;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use messaging::{
    MessageError, MessageHandler, PendingContent, PendingSlot, Request, Response, Settings,
    is_markdown_source,
};
pub use parsing::{ConvertError, Converter, to_html};
