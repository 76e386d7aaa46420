use serde::Serialize;

use super::span::Span;

/// The kind of a block, with the fields only that kind carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockKind {
    Heading1,
    Heading2,
    Heading3,
    Paragraph,
    BulletedItem,
    NumberedItem,
    Quote,
    /// A fenced code block. `language` is the fence info string, possibly empty.
    Code {
        language: String,
    },
    Callout {
        icon: Option<String>,
    },
    /// A table row degraded to its literal `| cell | cell |` text.
    RawRow,
}

impl BlockKind {
    /// Returns the heading kind for `level` (1 to 3).
    pub fn heading(level: usize) -> Option<Self> {
        match level {
            1 => Some(Self::Heading1),
            2 => Some(Self::Heading2),
            3 => Some(Self::Heading3),
            _ => None,
        }
    }

    /// Stable lowercase name of the kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Heading1 => "heading1",
            Self::Heading2 => "heading2",
            Self::Heading3 => "heading3",
            Self::Paragraph => "paragraph",
            Self::BulletedItem => "bulleted_item",
            Self::NumberedItem => "numbered_item",
            Self::Quote => "quote",
            Self::Code { .. } => "code",
            Self::Callout { .. } => "callout",
            Self::RawRow => "raw_row",
        }
    }

    pub fn is_list_item(&self) -> bool {
        matches!(self, Self::BulletedItem | Self::NumberedItem)
    }
}

/// One structural unit of a document.
///
/// Blocks are values: the limiter replaces an oversized block with derived
/// siblings rather than editing it, and the persister only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub kind: BlockKind,
    pub spans: Vec<Span>,
    /// List nesting depth; zero for everything that is not a list item.
    pub indent: usize,
}

impl Block {
    pub fn new(kind: BlockKind, spans: Vec<Span>) -> Self {
        Self {
            kind,
            spans,
            indent: 0,
        }
    }

    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn paragraph(spans: Vec<Span>) -> Self {
        Self::new(BlockKind::Paragraph, spans)
    }

    /// The empty paragraph used to preserve vertical spacing.
    pub fn empty_paragraph() -> Self {
        Self::paragraph(vec![])
    }

    /// Concatenated text of all spans.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Length of the concatenated text in Unicode scalar values.
    #[must_use]
    pub fn text_len(&self) -> usize {
        self.spans.iter().map(Span::char_len).sum()
    }

    /// A sibling of the same kind and indent carrying different spans.
    pub(crate) fn derive(&self, spans: Vec<Span>) -> Self {
        Self {
            kind: self.kind.clone(),
            spans,
            indent: self.indent,
        }
    }
}
