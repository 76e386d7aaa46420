//! In-memory document model: [`Block`]s made of [`Span`]s.

pub mod block;
pub mod span;

pub use block::{Block, BlockKind};
pub use span::{Emphasis, Reference, Span};
