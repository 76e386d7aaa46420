//! # Block Limiting
//!
//! Makes a block sequence fit the store's transport limits. Two independent
//! passes, applied in order:
//!
//! 1. **Span limit**: a block whose text exceeds [`SPAN_LIMIT`] characters
//!    is replaced by sibling blocks of the same kind and indent, each within
//!    the limit (see [`split_text`] for where breaks fall)
//! 2. **Block cap**: a document over [`MAX_BLOCKS`] keeps its first
//!    `MAX_BLOCKS - 1` blocks and ends with a truncation callout
//!
//! Truncation is a warning, never an error: it is reported back as a
//! [`Truncation`] so the caller can surface it.

pub mod split;

use serde::Serialize;

use crate::model::{Block, BlockKind, Span};

pub use split::{split_spans, split_text};

/// Maximum characters in one span of text.
pub const SPAN_LIMIT: usize = 2000;
/// Maximum blocks in one document (and in one create request).
pub const MAX_BLOCKS: usize = 100;

pub const TRUNCATION_ICON: &str = "⚠️";
pub const TRUNCATION_NOTICE: &str =
    "Content too long; the rest was truncated. See the original source for the full text.";

/// Limits applied by [`limit_blocks`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub span_limit: usize,
    /// Block cap per document; `None` keeps every block and leaves
    /// pagination to the persister.
    pub max_blocks: Option<usize>,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            span_limit: SPAN_LIMIT,
            max_blocks: Some(MAX_BLOCKS),
        }
    }
}

impl Limits {
    /// Span limit only; documents of any length are kept whole.
    pub fn untruncated() -> Self {
        Self {
            max_blocks: None,
            ..Self::default()
        }
    }
}

/// Blocks lost to the block cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Truncation {
    /// Original-derived blocks kept ahead of the notice.
    pub kept: usize,
    pub dropped: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limited {
    pub blocks: Vec<Block>,
    pub truncation: Option<Truncation>,
}

/// Applies both limits to `blocks`.
pub fn limit_blocks(blocks: Vec<Block>, limits: &Limits) -> Limited {
    let blocks = split_oversized(blocks, limits.span_limit);
    match limits.max_blocks {
        Some(max) => {
            let (blocks, truncation) = truncate_document(blocks, max);
            Limited { blocks, truncation }
        }
        None => Limited {
            blocks,
            truncation: None,
        },
    }
}

/// Replaces each block longer than `span_limit` with derived siblings.
///
/// Formatting survives the split; a span cut at a chunk boundary keeps its
/// emphasis and link on both sides.
pub fn split_oversized(blocks: Vec<Block>, span_limit: usize) -> Vec<Block> {
    let mut out = Vec::with_capacity(blocks.len());
    for block in blocks {
        let len = block.text_len();
        if len <= span_limit {
            out.push(block);
            continue;
        }
        let groups = split_spans(&block.spans, span_limit);
        log::debug!(
            "split {} block of {len} chars into {} blocks",
            block.kind.name(),
            groups.len()
        );
        out.extend(groups.into_iter().map(|spans| block.derive(spans)));
    }
    out
}

/// Caps the document at `max_blocks`, ending it with a truncation notice.
///
/// Returns the blocks unchanged and no [`Truncation`] when they already fit.
pub fn truncate_document(mut blocks: Vec<Block>, max_blocks: usize) -> (Vec<Block>, Option<Truncation>) {
    if blocks.len() <= max_blocks {
        return (blocks, None);
    }
    let total = blocks.len();
    let kept = max_blocks.saturating_sub(1);
    blocks.truncate(kept);
    blocks.push(truncation_notice());

    let truncation = Truncation {
        kept,
        dropped: total - kept,
    };
    log::warn!(
        "document has {total} blocks, over the limit of {max_blocks}; kept {kept}, dropped {}",
        truncation.dropped
    );
    (blocks, Some(truncation))
}

/// The synthetic callout that ends a truncated document.
pub fn truncation_notice() -> Block {
    Block::new(
        BlockKind::Callout {
            icon: Some(TRUNCATION_ICON.to_string()),
        },
        vec![Span::plain(TRUNCATION_NOTICE)],
    )
}
