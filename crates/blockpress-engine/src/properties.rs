//! Container metadata sent with the create request.
//!
//! Properties are owned by the caller; the engine only clamps lengths the
//! store would reject and derives a title when none is given.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::limit::SPAN_LIMIT;
use crate::parsing::blocks::kinds::Heading;
use crate::parsing::references::normalize_id;
use crate::persist::ContainerId;

/// Longest title derived from document text.
pub const TITLE_LIMIT: usize = 100;
const ELLIPSIS: &str = "...";

/// Base URL for browsing a container.
pub const STORE_URL_BASE: &str = "https://notion.so/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageProperties {
    pub title: String,
    pub summary: String,
    pub tags: Vec<String>,
    pub source_url: Option<String>,
    pub created: DateTime<FixedOffset>,
}

impl PageProperties {
    pub fn new(title: impl Into<String>, created: DateTime<FixedOffset>) -> Self {
        Self {
            title: title.into(),
            summary: String::new(),
            tags: vec![],
            source_url: None,
            created,
        }
    }

    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }

    /// Returns a copy whose title and summary fit in one span.
    #[must_use]
    pub fn clamped(&self) -> Self {
        Self {
            title: clamp_chars(&self.title, SPAN_LIMIT).to_string(),
            summary: clamp_chars(&self.summary, SPAN_LIMIT).to_string(),
            ..self.clone()
        }
    }

    /// Derives a title from raw document text.
    ///
    /// Short text is its own title. Otherwise the first non-empty line,
    /// without heading markers, cut to [`TITLE_LIMIT`] characters with an
    /// ellipsis when it is longer.
    pub fn fallback_title(content: &str) -> String {
        let content = content.trim();
        if content.chars().count() <= TITLE_LIMIT {
            return content.to_string();
        }
        let first = content
            .lines()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .unwrap_or_default();
        let first = Heading::parse(first).map_or(first, |(_, text)| text);
        if first.chars().count() <= TITLE_LIMIT {
            return first.to_string();
        }
        let keep = TITLE_LIMIT - ELLIPSIS.len();
        format!("{}{ELLIPSIS}", clamp_chars(first, keep).trim_end())
    }
}

/// Everything the store needs to create a container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContainerRequest {
    /// The collection (database) the container is created in.
    pub parent_id: String,
    pub properties: PageProperties,
}

impl ContainerRequest {
    pub fn new(parent_id: impl Into<String>, properties: PageProperties) -> Self {
        Self {
            parent_id: parent_id.into(),
            properties,
        }
    }
}

/// Browsable URL of a container.
pub fn store_url(id: &ContainerId) -> String {
    format!("{STORE_URL_BASE}{}", normalize_id(id.as_str()))
}

fn clamp_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn created() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(8 * 3600)
            .unwrap()
            .with_ymd_and_hms(2025, 3, 1, 9, 30, 0)
            .unwrap()
    }

    #[test]
    fn short_content_is_its_own_title() {
        assert_eq!(PageProperties::fallback_title("  quick note \n"), "quick note");
    }

    #[test]
    fn long_content_uses_first_line_without_heading_marker() {
        let content = format!("\n# Weekly digest\n{}", "body ".repeat(40));
        assert_eq!(PageProperties::fallback_title(&content), "Weekly digest");
    }

    #[test]
    fn long_first_line_is_cut_with_ellipsis() {
        let content = "word ".repeat(60);
        let title = PageProperties::fallback_title(&content);
        assert_eq!(title.chars().count(), TITLE_LIMIT);
        assert!(title.ends_with("word wo..."));
    }

    #[test]
    fn clamped_limits_title_and_summary() {
        let props = PageProperties::new("t".repeat(2500), created())
            .with_summary("日".repeat(2001))
            .with_tags(["a", "b"]);
        let clamped = props.clamped();
        assert_eq!(clamped.title.chars().count(), SPAN_LIMIT);
        assert_eq!(clamped.summary.chars().count(), SPAN_LIMIT);
        assert_eq!(clamped.tags, vec!["a", "b"]);
    }

    #[test]
    fn store_url_drops_separators() {
        let id = ContainerId::new("1a2b3c4d-0000-1111-2222-333344445555");
        assert_eq!(
            store_url(&id),
            "https://notion.so/1a2b3c4d000011112222333344445555"
        );
    }
}
