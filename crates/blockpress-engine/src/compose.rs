//! Builds block runs from plain text for callers that are not parsing a
//! whole markdown document: highlighted notes and quoted excerpts.

use crate::limit::{SPAN_LIMIT, split_oversized, split_text};
use crate::model::{Block, BlockKind, Span};
use crate::parsing::blocks::kinds::BlockQuote;
use crate::parsing::parse_markdown;

/// Wraps `text` in callout blocks of at most [`SPAN_LIMIT`] characters.
///
/// Only the first callout carries the icon. Text is not parsed, so markup
/// stays literal. Empty text yields no blocks.
pub fn callout_blocks(text: &str, icon: Option<&str>) -> Vec<Block> {
    if text.is_empty() {
        return vec![];
    }
    split_text(text, SPAN_LIMIT)
        .into_iter()
        .enumerate()
        .map(|(i, chunk)| {
            let icon = if i == 0 { icon.map(str::to_string) } else { None };
            Block::new(BlockKind::Callout { icon }, vec![Span::plain(chunk)])
        })
        .collect()
}

/// Quotes every line of `text` and parses the result.
///
/// Inline formatting inside the quote is kept; blank lines become empty
/// paragraphs. Oversized quotes are split like any other block.
pub fn quote_blocks(text: &str) -> Vec<Block> {
    if text.is_empty() {
        return vec![];
    }
    let quoted = text
        .lines()
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                format!("{} {line}", BlockQuote::PREFIX)
            }
        })
        .collect::<Vec<_>>()
        .join("\n");
    split_oversized(parse_markdown(&quoted), SPAN_LIMIT)
}
