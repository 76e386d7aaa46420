//! Span patterns, one per [`MatchKind`].
//!
//! Every inline delimiter lives here; the parser asks a kind for its regex
//! and for how to read a match, it never spells `**` or `` ` `` itself.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::types::{InlineMatch, MatchKind};
use crate::parsing::references::STORE_SCHEME;

static STORE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]\(store://([A-Za-z0-9]+)\)").expect("store link regex")
});
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\((.+?)\)").expect("link regex"));
static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("bold regex"));
static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.+?)\*").expect("italic regex"));
static STRIKETHROUGH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"~~(.+?)~~").expect("strikethrough regex"));
static CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`(.+?)`").expect("code regex"));

impl MatchKind {
    /// The regex recognising this construct. Group 1 is always the content.
    pub fn pattern(self) -> &'static Regex {
        match self {
            MatchKind::StoreLink => &STORE_LINK,
            MatchKind::Link => &LINK,
            MatchKind::Bold => &BOLD,
            MatchKind::Italic => &ITALIC,
            MatchKind::Strikethrough => &STRIKETHROUGH,
            MatchKind::Code => &CODE,
        }
    }

    /// Opening and closing delimiters, for rendering a span back to markdown.
    ///
    /// Link kinds return the label brackets only; the target is rendered
    /// separately.
    pub fn delimiters(self) -> (&'static str, &'static str) {
        match self {
            MatchKind::StoreLink | MatchKind::Link => ("[", "]"),
            MatchKind::Bold => ("**", "**"),
            MatchKind::Italic => ("*", "*"),
            MatchKind::Strikethrough => ("~~", "~~"),
            MatchKind::Code => ("`", "`"),
        }
    }

    /// Reads a regex match into a candidate.
    ///
    /// Generic links pointing at the store scheme are rejected: those belong
    /// to [`MatchKind::StoreLink`], and when that pattern refuses them (a
    /// malformed id) they must stay literal text.
    pub fn read(self, caps: &Captures<'_>) -> Option<InlineMatch> {
        let whole = caps.get(0)?;
        let content = caps.get(1)?.as_str().to_string();
        let extra = match self {
            MatchKind::StoreLink => Some(caps.get(2)?.as_str().to_string()),
            MatchKind::Link => {
                let url = caps.get(2)?.as_str();
                if url.starts_with(STORE_SCHEME) {
                    return None;
                }
                Some(url.to_string())
            }
            _ => None,
        };
        Some(InlineMatch {
            start: whole.start(),
            end: whole.end(),
            kind: self,
            content,
            extra,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_first(kind: MatchKind, text: &str) -> Option<InlineMatch> {
        kind.pattern()
            .captures(text)
            .and_then(|caps| kind.read(&caps))
    }

    #[test]
    fn store_link_captures_label_and_id() {
        let m = read_first(MatchKind::StoreLink, "[Notes](store://abc123)").unwrap();
        assert_eq!(m.content, "Notes");
        assert_eq!(m.extra.as_deref(), Some("abc123"));
        assert_eq!((m.start, m.end), (0, 23));
    }

    #[test]
    fn generic_link_refuses_store_targets() {
        assert!(read_first(MatchKind::Link, "[Notes](store://abc-123)").is_none());
    }

    #[test]
    fn generic_link_captures_url() {
        let m = read_first(MatchKind::Link, "go [here](https://x.io/a) now").unwrap();
        assert_eq!(m.content, "here");
        assert_eq!(m.extra.as_deref(), Some("https://x.io/a"));
        assert_eq!((m.start, m.end), (3, 25));
    }

    #[test]
    fn link_label_stops_at_the_first_closing_bracket() {
        let m = read_first(MatchKind::Link, "[1] see [docs](https://x.io)").unwrap();
        assert_eq!(m.content, "docs");
        assert_eq!(m.start, 8);
        let m = read_first(MatchKind::StoreLink, "[x] done [Notes](store://ab12)").unwrap();
        assert_eq!(m.content, "Notes");
    }

    #[test]
    fn emphasis_patterns_are_non_greedy() {
        let m = read_first(MatchKind::Bold, "**a** and **b**").unwrap();
        assert_eq!(m.content, "a");
        let m = read_first(MatchKind::Code, "`x` `y`").unwrap();
        assert_eq!(m.content, "x");
    }

    #[test]
    fn empty_content_never_matches() {
        assert!(read_first(MatchKind::Strikethrough, "~~~~").is_none());
        assert!(read_first(MatchKind::Code, "``").is_none());
    }
}
