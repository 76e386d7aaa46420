use std::sync::LazyLock;

use regex::Regex;

static QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^>\s+(.+)$").expect("quote regex"));

/// Single-level block quote.
///
/// Nested quotes are not modelled: `> > x` is a quote whose text is `> x`.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Parses a trimmed line, returning the quoted text.
    pub fn parse(line: &str) -> Option<&str> {
        QUOTE.captures(line)?.get(1).map(|m| m.as_str())
    }
}
