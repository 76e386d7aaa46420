use std::sync::LazyLock;

use regex::Regex;

static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)[-*]\s+(.+)$").expect("bullet regex"));
static NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)(\d+)\.\s+(.+)$").expect("numbered regex"));

/// Which list a list item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Bulleted,
    Numbered,
}

/// A list item line: its nesting depth and its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListItem<'a> {
    pub kind: ListKind,
    pub indent: usize,
    pub text: &'a str,
}

impl<'a> ListItem<'a> {
    /// Leading columns per nesting level.
    pub const INDENT_WIDTH: usize = 2;
    /// Columns a tab counts for in leading whitespace.
    pub const TAB_WIDTH: usize = 2;

    /// Parses a line (leading whitespace intact) as a bulleted or numbered item.
    ///
    /// Bullets are tried first. The ordinal of a numbered item is discarded:
    /// display numbering belongs to the store.
    pub fn parse(line: &'a str) -> Option<Self> {
        if let Some(caps) = BULLET.captures(line) {
            return Some(Self {
                kind: ListKind::Bulleted,
                indent: Self::indent_level(caps.get(1)?.as_str()),
                text: caps.get(2)?.as_str(),
            });
        }
        let caps = NUMBERED.captures(line)?;
        Some(Self {
            kind: ListKind::Numbered,
            indent: Self::indent_level(caps.get(1)?.as_str()),
            text: caps.get(3)?.as_str(),
        })
    }

    fn indent_level(leading: &str) -> usize {
        let columns: usize = leading
            .chars()
            .map(|c| if c == '\t' { Self::TAB_WIDTH } else { 1 })
            .sum();
        columns / Self::INDENT_WIDTH
    }
}
