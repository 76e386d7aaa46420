//! # Inline Formatting
//!
//! Turns one line of text into an ordered list of styled [`Span`]s.
//!
//! ## Architecture
//!
//! Inline formatting runs after block classification, once per text-bearing
//! line. It is a two-step interval-selection pass:
//!
//! 1. **Collect**: every pattern in [`MatchKind::ALL`] scans the line once,
//!    left to right; each hit becomes an [`InlineMatch`] candidate
//! 2. **Select**: candidates sorted by `(start, priority)` are walked left to
//!    right and any candidate overlapping an accepted one is dropped
//!
//! Gaps between accepted candidates become plain spans.
//!
//! ## Modules
//!
//! - **`types`**: `MatchKind` (priority order) and `InlineMatch` candidates
//! - **`kinds`**: the regex and delimiters owned by each `MatchKind`
//! - **`parser`**: `format_inline()` entry point and the selection pass
//!
//! ## Overlap Policy
//!
//! The earliest-starting candidate wins a contested region, whatever its
//! pattern; priority only breaks ties between candidates with the same start.
//! `` `**x**` `` is a code span, `` **`x`** `` is bold text containing backticks.
//!
//! [`Span`]: crate::model::Span

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{collect_matches, format_inline, select_non_overlapping};
pub use types::{InlineMatch, MatchKind};
