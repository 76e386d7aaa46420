use crate::model::{Block, BlockKind, Span};
use crate::parsing::inline::format_inline;

use super::{
    classify::{LineClass, LineKind},
    containers::ListNesting,
    kinds::{CodeFence, FenceOpen, ListItem, ListKind, TableRow},
};

#[derive(Debug, Clone)]
enum LeafState {
    None,
    Fence { language: String, lines: Vec<String> },
}

/// Phase 2 of block parsing: turns classified lines into [`Block`]s.
///
/// Every line emits at most one block, except fence lines, which are
/// collected until the fence closes (or input ends) and emitted as one.
pub struct BlockBuilder {
    lists: ListNesting,
    leaf: LeafState,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            lists: ListNesting::default(),
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        if self.in_fence() {
            self.consume_fence_line(c.raw);
            return;
        }

        let block = match &c.kind {
            LineKind::ListItem(item) => {
                self.push_list_item(item);
                return;
            }
            LineKind::Fence(FenceOpen::Block { language }) => {
                self.lists.reset();
                self.leaf = LeafState::Fence {
                    language: (*language).to_string(),
                    lines: vec![],
                };
                return;
            }
            LineKind::Heading { level, text } => match BlockKind::heading(*level) {
                Some(kind) => Block::new(kind, format_inline(text)),
                None => Block::paragraph(format_inline(text)),
            },
            LineKind::Quote { text } => Block::new(BlockKind::Quote, format_inline(text)),
            LineKind::Fence(FenceOpen::Inline { code }) => code_block("", code),
            LineKind::TableRow { cells } => Block::new(
                BlockKind::RawRow,
                vec![Span::plain(TableRow::render(cells))],
            ),
            LineKind::Blank => Block::empty_paragraph(),
            LineKind::Text { text } => Block::paragraph(format_inline(text)),
        };
        // Any line that is not a list item ends the list.
        self.lists.reset();
        self.out.push(block);
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush: an unterminated fence still becomes a code block
        self.flush_fence();
        self.out
    }

    /// Current list nesting, for inspection between lines.
    pub fn lists(&self) -> &ListNesting {
        &self.lists
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn push_list_item(&mut self, item: &ListItem<'_>) {
        let depth = self.lists.enter(item.kind, item.indent);
        let kind = match item.kind {
            ListKind::Bulleted => BlockKind::BulletedItem,
            ListKind::Numbered => BlockKind::NumberedItem,
        };
        self.out
            .push(Block::new(kind, format_inline(item.text)).with_indent(depth));
    }

    fn consume_fence_line(&mut self, raw: &str) {
        let LeafState::Fence { lines, .. } = &mut self.leaf else {
            return;
        };
        match CodeFence::close(raw) {
            Some(before) => {
                if !before.trim().is_empty() {
                    lines.push(before.to_string());
                }
                self.flush_fence();
            }
            None => lines.push(raw.to_string()),
        }
    }

    fn flush_fence(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Fence { language, lines } = prev {
            self.out.push(code_block(&language, &lines.join("\n")));
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn code_block(language: &str, code: &str) -> Block {
    let spans = if code.is_empty() {
        vec![]
    } else {
        vec![Span::plain(code)]
    };
    Block::new(
        BlockKind::Code {
            language: language.to_string(),
        },
        spans,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::MarkdownLineClassifier;
    use rstest::rstest;

    fn build(lines: &[&str]) -> (Vec<Block>, ListNesting) {
        let mut builder = BlockBuilder::new();
        for line in lines {
            builder.push(&MarkdownLineClassifier.classify(line));
        }
        let lists = builder.lists().clone();
        (builder.finish(), lists)
    }

    #[test]
    fn fence_collects_raw_lines() {
        let (blocks, _) = build(&["```rust", "  - not a list", "# not a heading", "```"]);
        assert_eq!(blocks.len(), 1);
        assert_eq!(
            blocks[0].kind,
            BlockKind::Code {
                language: "rust".into()
            }
        );
        assert_eq!(blocks[0].text(), "  - not a list\n# not a heading");
    }

    #[test]
    fn unterminated_fence_is_flushed_at_eof() {
        let (blocks, _) = build(&["```", "a", "b"]);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].text(), "a\nb");
    }

    #[test]
    fn closing_line_keeps_preceding_code() {
        let (blocks, _) = build(&["```", "a", "b```", "after"]);
        assert_eq!(blocks[0].text(), "a\nb");
        assert_eq!(blocks[1].text(), "after");
    }

    #[test]
    fn empty_fence_has_no_spans() {
        let (blocks, _) = build(&["```", "```"]);
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].spans.is_empty());
    }

    #[test]
    fn list_state_survives_only_list_lines() {
        let (_, lists) = build(&["- a", "  1. b"]);
        assert_eq!(lists.frames(), &[ListKind::Bulleted, ListKind::Numbered]);

        let (_, lists) = build(&["- a", "text"]);
        assert_eq!(lists.depth(), 0);

        let (_, lists) = build(&["- a", ""]);
        assert_eq!(lists.depth(), 0);
    }

    #[rstest]
    #[case("# heading")]
    #[case("> quote")]
    #[case("```")]
    #[case("```one line```")]
    #[case("| a | b |")]
    #[case("")]
    #[case("text")]
    fn any_non_list_line_resets_nesting(#[case] line: &str) {
        let (blocks, lists) = build(&["- a", "  - b", line]);
        assert_eq!(lists.depth(), 0);
        assert_eq!(blocks[1].indent, 1);
    }

    #[test]
    fn table_row_is_literal_text() {
        let (blocks, _) = build(&["|**a**|b|"]);
        assert_eq!(blocks[0].kind, BlockKind::RawRow);
        assert_eq!(blocks[0].spans, vec![Span::plain("| **a** | b |")]);
    }
}
