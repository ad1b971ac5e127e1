//! # Inline Rendering
//!
//! Cursor-based inline rendering with explicit raw zones.
//!
//! ## Architecture
//!
//! Inline rendering is separate from block parsing and is applied to every
//! textual span a block emits (paragraph lines, headings, list items,
//! blockquotes, table cells).
//!
//! The renderer walks the text once with a cursor. Literal runs are
//! HTML-escaped on the way out, so escaping always happens before any
//! generated tag exists and user text can never inject markup.
//!
//! ## Modules
//!
//! - **`kinds`**: Inline-specific types with owned delimiters (CodeSpan, Emphasis, Link)
//! - **`cursor`**: `Cursor` tracking the scan offset on char boundaries
//! - **`parser`**: `render_inline()` main entry point with `try_*` helpers
//!
//! ## Raw Zone Precedence
//!
//! Code spans take precedence: `` `**not bold**` `` renders as a single
//! `<code>` element containing the literal asterisks.

pub mod cursor;
pub mod kinds;
pub mod parser;

pub use parser::{escape_attribute, escape_text, render_inline};
