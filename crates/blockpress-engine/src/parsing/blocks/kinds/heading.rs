use std::sync::LazyLock;

use regex::Regex;

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,3})\s+(.+)$").expect("heading regex"));

/// ATX heading, levels one to three.
///
/// Deeper headings (`####`) are not recognised and fall through to paragraphs.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 3;

    /// Parses a trimmed line into `(level, text)`.
    pub fn parse(line: &str) -> Option<(usize, &str)> {
        let caps = HEADING.captures(line)?;
        let level = caps.get(1)?.as_str().len();
        Some((level, caps.get(2)?.as_str()))
    }
}
