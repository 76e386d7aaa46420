//! Block constructs, each owning its own syntax.
//!
//! The classifier asks these types whether a line opens their construct; it
//! never matches a `#`, `-` or a fence itself.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list_item;
pub mod table_row;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceOpen};
pub use heading::Heading;
pub use list_item::{ListItem, ListKind};
pub use table_row::TableRow;
