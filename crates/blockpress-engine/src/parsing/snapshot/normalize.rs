use std::fmt::Write;

use crate::model::{Block, BlockKind, Span};

/// Renders blocks as a compact outline, one line per block.
///
/// Each line is the kind name, `@depth` for nested list items, the code
/// language or callout icon in parentheses, then the spans. Span text is
/// quoted; formatting shows as a prefix (`b`, `i`, `s`, `c`, `link(url)`,
/// `ref(id)`). Empty blocks end right after the kind.
pub fn outline(blocks: &[Block]) -> String {
    blocks.iter().map(block_line).collect::<Vec<_>>().join("\n")
}

fn block_line(b: &Block) -> String {
    let mut line = b.kind.name().to_string();
    if b.indent > 0 {
        let _ = write!(line, "@{}", b.indent);
    }
    match &b.kind {
        BlockKind::Code { language } if !language.is_empty() => {
            let _ = write!(line, "({language})");
        }
        BlockKind::Callout { icon: Some(icon) } => {
            let _ = write!(line, "({icon})");
        }
        _ => {}
    }
    if !b.spans.is_empty() {
        line.push(':');
        for span in &b.spans {
            line.push(' ');
            line.push_str(&span_token(span));
        }
    }
    line
}

fn span_token(s: &Span) -> String {
    let mut out = String::new();
    if let Some(r) = &s.reference {
        let _ = write!(out, "ref({})", r.target_id);
    }
    if let Some(url) = &s.link {
        let _ = write!(out, "link({url})");
    }
    for (on, flag) in [
        (s.emphasis.bold, 'b'),
        (s.emphasis.italic, 'i'),
        (s.emphasis.strikethrough, 's'),
        (s.emphasis.code, 'c'),
    ] {
        if on {
            out.push(flag);
        }
    }
    let _ = write!(out, "{:?}", s.text);
    out
}
