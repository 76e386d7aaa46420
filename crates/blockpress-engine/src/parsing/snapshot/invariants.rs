use crate::limit::Limits;
use crate::model::{Block, BlockKind};

/// Validates parser output invariants.
///
/// Asserts that:
/// - No span has empty text
/// - Only list items carry a non-zero indent
/// - Code blocks hold at most one plain span
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(blocks: &[Block]) {
    for (i, b) in blocks.iter().enumerate() {
        assert!(
            b.spans.iter().all(|s| !s.text.is_empty()),
            "block {i} has an empty span: {b:?}"
        );
        assert!(
            b.indent == 0 || b.kind.is_list_item(),
            "non-list block {i} is indented: {b:?}"
        );
        if let BlockKind::Code { .. } = b.kind {
            assert!(
                b.spans.len() <= 1 && b.spans.iter().all(|s| s.is_plain()),
                "code block {i} has formatted or multiple spans: {b:?}"
            );
        }
    }
}

/// Validates limiter output against `limits`.
///
/// Asserts that every block's text fits the span limit and, when truncation
/// is enabled, that the document fits the block cap.
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check_limited(blocks: &[Block], limits: &Limits) {
    for (i, b) in blocks.iter().enumerate() {
        assert!(
            b.text_len() <= limits.span_limit,
            "block {i} text is {} chars (limit {})",
            b.text_len(),
            limits.span_limit
        );
    }
    if let Some(max) = limits.max_blocks {
        assert!(
            blocks.len() <= max,
            "document has {} blocks (limit {max})",
            blocks.len()
        );
    }
}
