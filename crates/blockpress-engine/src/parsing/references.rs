//! Rewrites reference tags into store-native links before block parsing.
//!
//! A reference tag is `[label](ref:ID)`. The inline formatter only knows the
//! store-native form `[label](store://ID)`, so tags are rewritten up front and
//! every later stage sees a single link syntax.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Scheme of the store-native link syntax.
pub const STORE_SCHEME: &str = "store://";

/// Separator characters stripped from ids before embedding.
const ID_SEPARATORS: &[char] = &['-'];

static REFERENCE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]*?)\]\(ref:([A-Za-z0-9-]+)\)").expect("reference tag regex")
});

/// Removes separator characters from a container id.
pub fn normalize_id(id: &str) -> String {
    id.chars().filter(|c| !ID_SEPARATORS.contains(c)).collect()
}

/// Rewrites every `[label](ref:ID)` in `text` to `[label](store://ID)` with
/// separators removed from the id.
///
/// Anything that does not match the tag syntax exactly is left untouched.
/// Returns the input unchanged (borrowed) when it contains no tags.
pub fn resolve_references(text: &str) -> Cow<'_, str> {
    let mut rewritten = 0usize;
    let out = REFERENCE_TAG.replace_all(text, |caps: &Captures<'_>| {
        rewritten += 1;
        format!("[{}]({STORE_SCHEME}{})", &caps[1], normalize_id(&caps[2]))
    });
    if rewritten > 0 {
        log::debug!("rewrote {rewritten} reference tag(s) to store links");
    }
    out
}
