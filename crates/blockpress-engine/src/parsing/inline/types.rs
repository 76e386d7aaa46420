use crate::model::{Emphasis, Span};

/// The pattern that produced a candidate match.
///
/// Declaration order is pattern priority: when two candidates start at the
/// same byte, the one whose kind sorts first wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchKind {
    /// `[label](store://ID)`
    StoreLink,
    /// `[text](url)`
    Link,
    /// `**x**`
    Bold,
    /// `*x*`
    Italic,
    /// `~~x~~`
    Strikethrough,
    /// `` `x` ``
    Code,
}

impl MatchKind {
    /// All kinds in priority order.
    pub const ALL: [MatchKind; 6] = [
        MatchKind::StoreLink,
        MatchKind::Link,
        MatchKind::Bold,
        MatchKind::Italic,
        MatchKind::Strikethrough,
        MatchKind::Code,
    ];
}

/// A candidate formatted region of a line.
///
/// `start..end` is the byte range of the whole construct including its
/// delimiters; `content` is the text that ends up in the span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineMatch {
    pub start: usize,
    pub end: usize,
    pub kind: MatchKind,
    pub content: String,
    /// Link target or reference id, for the kinds that carry one.
    pub extra: Option<String>,
}

impl InlineMatch {
    /// True if the two byte ranges share at least one byte.
    #[must_use]
    pub fn overlaps(&self, other: &InlineMatch) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Converts the accepted match into the span it stands for.
    pub fn into_span(self) -> Span {
        match self.kind {
            MatchKind::StoreLink => Span::reference(self.content, self.extra.unwrap_or_default()),
            MatchKind::Link => Span::link(self.content, self.extra.unwrap_or_default()),
            MatchKind::Bold => Span::styled(self.content, Emphasis::BOLD),
            MatchKind::Italic => Span::styled(self.content, Emphasis::ITALIC),
            MatchKind::Strikethrough => Span::styled(self.content, Emphasis::STRIKETHROUGH),
            MatchKind::Code => Span::styled(self.content, Emphasis::CODE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(start: usize, end: usize) -> InlineMatch {
        InlineMatch {
            start,
            end,
            kind: MatchKind::Bold,
            content: String::new(),
            extra: None,
        }
    }

    #[test]
    fn adjacent_ranges_do_not_overlap() {
        assert!(!m(0, 3).overlaps(&m(3, 5)));
        assert!(!m(3, 5).overlaps(&m(0, 3)));
    }

    #[test]
    fn nested_and_crossing_ranges_overlap() {
        assert!(m(0, 10).overlaps(&m(2, 4)));
        assert!(m(2, 6).overlaps(&m(4, 8)));
    }

    #[test]
    fn priority_follows_declaration_order() {
        assert!(MatchKind::StoreLink < MatchKind::Link);
        assert!(MatchKind::Bold < MatchKind::Italic);
        assert!(MatchKind::Strikethrough < MatchKind::Code);
    }
}
