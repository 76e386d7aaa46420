/// What the opening line of a fence says.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceOpen<'a> {
    /// A fence that continues on the following lines; the info string is the language.
    Block { language: &'a str },
    /// Opening and closing fence on one line: ```` ```code``` ````.
    Inline { code: &'a str },
}

/// Backtick code fences.
///
/// Tilde fences are not recognised. A fence closes on the first later line
/// whose trimmed text ends with the marker; anything before the marker on
/// that line is still code.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Classifies a trimmed line that starts a fence.
    pub fn open(line: &str) -> Option<FenceOpen<'_>> {
        let rest = line.strip_prefix(Self::BACKTICKS)?;
        if let Some(code) = rest.strip_suffix(Self::BACKTICKS) {
            return Some(FenceOpen::Inline { code });
        }
        Some(FenceOpen::Block {
            language: rest.trim(),
        })
    }

    /// If `raw` closes an open fence, returns the code preceding the marker.
    pub fn close(raw: &str) -> Option<&str> {
        let trimmed = raw.trim_end();
        if !trimmed.trim_start().ends_with(Self::BACKTICKS) {
            return None;
        }
        Some(&trimmed[..trimmed.len() - Self::BACKTICKS.len()])
    }
}
