use serde::Serialize;

/// Formatting flags carried by a [`Span`].
///
/// The set is closed: the block store understands exactly these four
/// annotations, so anything else the inline formatter cannot express
/// stays as literal text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Emphasis {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub code: bool,
}

impl Emphasis {
    pub const PLAIN: Self = Self {
        bold: false,
        italic: false,
        strikethrough: false,
        code: false,
    };
    pub const BOLD: Self = Self {
        bold: true,
        ..Self::PLAIN
    };
    pub const ITALIC: Self = Self {
        italic: true,
        ..Self::PLAIN
    };
    pub const STRIKETHROUGH: Self = Self {
        strikethrough: true,
        ..Self::PLAIN
    };
    pub const CODE: Self = Self {
        code: true,
        ..Self::PLAIN
    };

    /// Returns true if no flag is set.
    #[must_use]
    pub fn is_plain(self) -> bool {
        self == Self::PLAIN
    }
}

/// A cross-document reference: a label pointing at another container by id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Reference {
    pub label: String,
    /// Container id with separators already removed.
    pub target_id: String,
}

/// A run of text inside a block carrying uniform formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub text: String,
    pub link: Option<String>,
    pub emphasis: Emphasis,
    pub reference: Option<Reference>,
}

impl Span {
    /// Creates an unformatted span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, Emphasis::PLAIN)
    }

    /// Creates a span with the given emphasis and no link.
    pub fn styled(text: impl Into<String>, emphasis: Emphasis) -> Self {
        Self {
            text: text.into(),
            link: None,
            emphasis,
            reference: None,
        }
    }

    /// Creates a hyperlink span.
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            link: Some(url.into()),
            ..Self::plain(text)
        }
    }

    /// Creates a cross-document reference span; its text is the label.
    pub fn reference(label: impl Into<String>, target_id: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            reference: Some(Reference {
                label: label.clone(),
                target_id: target_id.into(),
            }),
            ..Self::plain(label)
        }
    }

    /// Length of the text in Unicode scalar values, the unit the store counts in.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// True if the span carries no emphasis, link or reference.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.emphasis.is_plain() && self.link.is_none() && self.reference.is_none()
    }

    /// Copies this span's formatting onto different text.
    pub(crate) fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..self.clone()
        }
    }
}
