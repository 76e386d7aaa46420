//! Parser tests over whole documents.
//!
//! Snapshots are inline outlines (see `snapshot::normalize`), so each test
//! shows its input and the block structure side by side.

use pretty_assertions::assert_eq;

use crate::model::{BlockKind, Span};
use crate::parsing::{parse_markdown, snapshot};

fn outline(md: &str) -> String {
    let blocks = parse_markdown(md);
    snapshot::invariants(&blocks);
    snapshot::outline(&blocks)
}

#[test]
fn heading_blank_and_formatted_paragraph() {
    insta::assert_snapshot!(outline("# Title\n\nSome **bold** and *italic* text."), @r#"
    heading1: "Title"
    paragraph
    paragraph: "Some " b"bold" " and " i"italic" " text."
    "#);
}

#[test]
fn nested_bullets_pop_back_out() {
    insta::assert_snapshot!(outline("- a\n  - b\n- c"), @r#"
    bulleted_item: "a"
    bulleted_item@1: "b"
    bulleted_item: "c"
    "#);
}

#[test]
fn mixed_document() {
    let md = "\
## Setup
1. Install
   - with **cargo**
> quoted [ref](store://abc)
```rust
fn main() {}
```
| a | b |
text after
";
    insta::assert_snapshot!(outline(md), @r#"
    heading2: "Setup"
    numbered_item: "Install"
    bulleted_item@1: "with " b"cargo"
    quote: "quoted " ref(abc)"ref"
    code(rust): "fn main() {}"
    raw_row: "| a | b |"
    paragraph: "text after"
    "#);
}

#[test]
fn fence_interrupts_list_and_resets_it() {
    insta::assert_snapshot!(outline("- a\n  - b\n```\n- not a list\n```\n  - c"), @r#"
    bulleted_item: "a"
    bulleted_item@1: "b"
    code: "- not a list"
    bulleted_item@1: "c"
    "#);
}

#[test]
fn raw_zone_suppresses_inline_formatting() {
    insta::assert_snapshot!(outline("```\n**not bold** [x](https://y)\n```"), @r#"
    code: "**not bold** [x](https://y)"
    "#);
}

#[test]
fn deep_heading_and_loose_quote_are_paragraphs() {
    insta::assert_snapshot!(outline("#### four\n>no space\n  > spaced"), @r#####"
    paragraph: "#### four"
    paragraph: ">no space"
    quote: "spaced"
    "#####);
}

#[test]
fn links_and_strikethrough() {
    insta::assert_snapshot!(outline("See [docs](https://docs.rs) and ~~old~~ `new`."), @r#"
    paragraph: "See " link(https://docs.rs)"docs" " and " s"old" " " c"new" "."
    "#);
}

#[test]
fn unterminated_fence_keeps_collected_lines() {
    let blocks = parse_markdown("intro\n```python\nprint(1)\nprint(2)");
    assert_eq!(blocks.len(), 2);
    assert_eq!(
        blocks[1].kind,
        BlockKind::Code {
            language: "python".into()
        }
    );
    assert_eq!(blocks[1].spans, vec![Span::plain("print(1)\nprint(2)")]);
}

#[test]
fn one_line_fence_is_code() {
    let blocks = parse_markdown("```let x = 1;```");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].text(), "let x = 1;");
}

#[test]
fn empty_document_is_one_empty_paragraph() {
    let blocks = parse_markdown("");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].kind, BlockKind::Paragraph);
    assert!(blocks[0].spans.is_empty());
}

#[test]
fn trailing_newline_and_crlf() {
    let unix = parse_markdown("# T\nbody\n");
    let windows = parse_markdown("# T\r\nbody\r\n");
    assert_eq!(unix.len(), 2);
    assert_eq!(unix, windows);
}

#[test]
fn blank_lines_are_kept_as_spacing() {
    let blocks = parse_markdown("a\n\n\nb");
    let kinds: Vec<_> = blocks.iter().map(|b| b.text()).collect();
    assert_eq!(kinds, vec!["a", "", "", "b"]);
}

#[test]
fn blank_line_ends_a_list() {
    // The second item is nested by indentation alone, not by the earlier list.
    insta::assert_snapshot!(outline("- a\n\n  - b"), @r#"
    bulleted_item: "a"
    paragraph
    bulleted_item@1: "b"
    "#);
}

#[test]
fn parsing_is_idempotent() {
    let md = "# A\n- x\n  1. y\n> z\n```\nc\n```\n| p | q |\n";
    assert_eq!(parse_markdown(md), parse_markdown(md));
}
