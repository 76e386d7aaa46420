//! # Block Parsing
//!
//! Two-phase, line-oriented block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` containing only local facts (heading level, list indent,
//!    fence opener, table cells, blank status)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` owns the list
//!    nesting state and the open fence, and emits [`Block`]s in source order
//!
//! ## Modules
//!
//! - **`kinds`**: block-specific types with owned delimiters (Heading,
//!   ListItem, BlockQuote, CodeFence, TableRow)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`containers`**: `ListNesting` for the list stack
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Precedence is fixed: heading, list item, quote, fence, table row, blank, text
//! - Any line that is not a list item resets list nesting, blank lines included
//! - Fenced code blocks are raw zones: no block or inline parsing inside
//! - All state lives in one `BlockBuilder`; nothing survives a parse call
//!
//! [`Block`]: crate::model::Block

pub mod builder;
pub mod classify;
pub mod containers;
pub mod kinds;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineKind, MarkdownLineClassifier};
pub use containers::ListNesting;
