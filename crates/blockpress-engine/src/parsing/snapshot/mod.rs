//! # Snapshot Testing Support
//!
//! Utilities for testing the compiler via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: renders a block sequence as a stable one-line-per-block
//!   outline for `insta` snapshot testing
//! - **`invariants`**: runtime checks for parser and limiter correctness
//!   (no empty spans, indent only on list items, limits respected)
//!
//! ## Testing Strategy
//!
//! Parsing behavior is defined by snapshot tests rather
//! than a formal grammar. Outlines show block kinds, nesting, span
//! text and span formatting, and nothing else.

pub mod invariants;
pub mod normalize;

pub use invariants::{check as invariants, check_limited};
pub use normalize::outline;
