//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `` TICK = b'`' `` - raw zone that suppresses other parsing
//! - **`Emphasis`**: `**`/`__` strong, `*`/`_` emphasis, `~~` strikethrough
//! - **`Link`**: `[text](url)` and the image form `![alt](url)`
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.
//! The parser calls these constants; it never hardcodes `**` or `` ` ``.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, EmphasisKind};
pub use link::{Link, LinkTarget};
