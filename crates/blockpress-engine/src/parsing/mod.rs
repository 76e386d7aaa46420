pub mod blocks;
pub mod inline;
pub mod references;
pub mod snapshot;

#[cfg(test)]
mod tests;

use crate::model::Block;
use blocks::{BlockBuilder, MarkdownLineClassifier};

pub use inline::format_inline;
pub use references::resolve_references;

/// Parses the markdown subset into a flat, ordered sequence of blocks.
///
/// Lines are split on `\n` with a trailing `\r` removed; a single trailing
/// newline does not produce an extra blank line. Empty input yields one
/// empty paragraph. Parsing never fails: anything unrecognised is text.
pub fn parse_markdown(text: &str) -> Vec<Block> {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for line in lines(text) {
        let lc = classifier.classify(line);
        builder.push(&lc);
    }

    builder.finish()
}

fn lines(text: &str) -> impl Iterator<Item = &str> {
    let body = text.strip_suffix('\n').unwrap_or(text);
    body.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}
