//! # Block Parsing
//!
//! Two-phase, single-pass block parsing over the lines of a document.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    using only the small `LineContext` the builder exposes (inside a fence,
//!    a list, or an indented-code run)
//!
//! 2. **Block Construction** (`builder`): An `HtmlBuilder` keeps the open
//!    buffers and emits HTML as blocks open and close
//!
//! ## Modules
//!
//! - **`kinds`**: Block-specific types with owned delimiters (CodeFence, Heading, ListItem, ...)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `HtmlBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - Opening any block flushes every other open block first
//! - Unterminated blocks are flushed at end of input, never dropped
//!
//! ## Known deviations from CommonMark
//!
//! - Indented code needs 4 columns outside a list but 8 inside one, so that
//!   list continuation text is not read as code
//! - A list's type (`<ol>`/`<ul>`) is fixed by its first marker; later
//!   markers of the other type continue the same list
//! - Lists do not nest; every blockquote line is its own block

pub mod builder;
pub mod classify;
pub mod kinds;

pub use builder::HtmlBuilder;
pub use classify::{LineClass, LineContext, MarkdownLineClassifier};
