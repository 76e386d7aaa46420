use super::kinds::{BlockQuote, CodeFence, FenceOpen, Heading, ListItem, TableRow};

/// What a single line is, judged without reference to surrounding lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Heading { level: usize, text: &'a str },
    ListItem(ListItem<'a>),
    Quote { text: &'a str },
    Fence(FenceOpen<'a>),
    TableRow { cells: Vec<&'a str> },
    Blank,
    Text { text: &'a str },
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing. The raw line is kept because a line
/// inside an open fence is code, whatever it looks like.
#[derive(Debug, Clone)]
pub struct LineClass<'a> {
    /// The line without its terminator.
    pub raw: &'a str,
    pub kind: LineKind<'a>,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line, trying constructs in precedence order; first match wins.
    ///
    /// List items are matched with leading whitespace intact (it sets the
    /// nesting depth); everything else is matched on the trimmed line.
    pub fn classify<'a>(&self, raw: &'a str) -> LineClass<'a> {
        LineClass {
            raw,
            kind: Self::kind(raw),
        }
    }

    fn kind(raw: &str) -> LineKind<'_> {
        let trimmed = raw.trim();

        if let Some((level, text)) = Heading::parse(trimmed) {
            return LineKind::Heading { level, text };
        }
        if let Some(item) = ListItem::parse(raw.trim_end()) {
            return LineKind::ListItem(item);
        }
        if let Some(text) = BlockQuote::parse(trimmed) {
            return LineKind::Quote { text };
        }
        if let Some(open) = CodeFence::open(trimmed) {
            return LineKind::Fence(open);
        }
        if let Some(cells) = TableRow::parse(trimmed) {
            return LineKind::TableRow { cells };
        }
        if trimmed.is_empty() {
            return LineKind::Blank;
        }
        LineKind::Text { text: trimmed }
    }
}
