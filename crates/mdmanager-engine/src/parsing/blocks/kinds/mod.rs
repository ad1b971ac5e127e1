pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod indented_code;
pub mod list_item;
pub mod table_row;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use indented_code::IndentedCode;
pub use list_item::{ListItem, ListKind, ListMarker};
pub use table_row::TableRow;
pub use thematic_break::ThematicBreak;
