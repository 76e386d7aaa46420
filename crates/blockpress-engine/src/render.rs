//! Renders blocks back into the markdown subset the parser reads.
//!
//! Used to read a stored document back as text and for dry-run previews.
//! For documents built from the subset, `parse_markdown(&to_markdown(b)) == b`
//! apart from a trailing empty paragraph, which a final newline cannot carry.

use crate::model::{Block, BlockKind, Span};
use crate::parsing::blocks::kinds::{BlockQuote, CodeFence, Heading, ListItem};
use crate::parsing::inline::MatchKind;
use crate::parsing::references::STORE_SCHEME;

/// Renders a block sequence, one line per block (code blocks span several).
pub fn to_markdown(blocks: &[Block]) -> String {
    blocks.iter().map(render_block).collect::<Vec<_>>().join("\n")
}

/// Renders one block.
pub fn render_block(block: &Block) -> String {
    let text = render_spans(&block.spans);
    match &block.kind {
        BlockKind::Heading1 | BlockKind::Heading2 | BlockKind::Heading3 => {
            let level = match block.kind {
                BlockKind::Heading1 => 1,
                BlockKind::Heading2 => 2,
                _ => Heading::MAX_LEVEL,
            };
            format!("{} {text}", Heading::MARKER.to_string().repeat(level))
        }
        BlockKind::Paragraph | BlockKind::RawRow => text,
        BlockKind::BulletedItem => format!("{}- {text}", list_indent(block.indent)),
        BlockKind::NumberedItem => format!("{}1. {text}", list_indent(block.indent)),
        BlockKind::Quote => format!("{} {text}", BlockQuote::PREFIX),
        BlockKind::Callout { icon } => match icon {
            Some(icon) => format!("{} {icon} {text}", BlockQuote::PREFIX),
            None => format!("{} {text}", BlockQuote::PREFIX),
        },
        BlockKind::Code { language } => {
            // Code content is never formatted, so take the raw text.
            let code = block.text();
            let fence = CodeFence::BACKTICKS;
            if code.is_empty() {
                format!("{fence}{language}\n{fence}")
            } else {
                format!("{fence}{language}\n{code}\n{fence}")
            }
        }
    }
}

/// Renders spans back to inline markdown.
///
/// Formatter output renders back to exactly the line it came from.
pub fn render_spans(spans: &[Span]) -> String {
    spans.iter().map(render_span).collect()
}

fn render_span(span: &Span) -> String {
    let mut out = span.text.clone();
    for (on, kind) in [
        (span.emphasis.code, MatchKind::Code),
        (span.emphasis.strikethrough, MatchKind::Strikethrough),
        (span.emphasis.italic, MatchKind::Italic),
        (span.emphasis.bold, MatchKind::Bold),
    ] {
        if on {
            let (open, close) = kind.delimiters();
            out = format!("{open}{out}{close}");
        }
    }
    if let Some(r) = &span.reference {
        out = format!("[{out}]({STORE_SCHEME}{})", r.target_id);
    } else if let Some(url) = &span.link {
        out = format!("[{out}]({url})");
    }
    out
}

fn list_indent(depth: usize) -> String {
    " ".repeat(depth * ListItem::INDENT_WIDTH)
}
