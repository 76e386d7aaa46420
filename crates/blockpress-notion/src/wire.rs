//! JSON encoding of blocks and page properties for the Notion API.
//!
//! The encoding is flat: list nesting depth is not sent, every block is a
//! top-level child of the page.

use blockpress_engine::properties::store_url;
use blockpress_engine::{Block, BlockKind, ContainerId, ContainerRequest, PageProperties, Span};
use serde_json::{Value, json};

/// Language sent for code blocks with no or an unrecognised info string.
pub const PLAIN_TEXT: &str = "plain text";

/// Languages accepted as-is.
const LANGUAGES: &[&str] = &[
    "bash", "c", "c#", "c++", "css", "dart", "diff", "docker", "elixir", "go", "graphql",
    "haskell", "html", "java", "javascript", "json", "kotlin", "latex", "lua", "makefile",
    "markdown", "mermaid", "nix", "php", "powershell", "python", "r", "ruby", "rust", "scala",
    "shell", "sql", "swift", "typescript", "xml", "yaml",
];

/// Maps a fence info string to a Notion code language.
pub fn code_language(info: &str) -> &'static str {
    let lang = info.trim().to_ascii_lowercase();
    let alias = match lang.as_str() {
        "py" | "python3" => "python",
        "js" | "jsx" | "node" => "javascript",
        "ts" | "tsx" => "typescript",
        "sh" | "zsh" | "console" => "shell",
        "rs" => "rust",
        "yml" => "yaml",
        "md" => "markdown",
        "cpp" | "cc" | "hpp" => "c++",
        "cs" | "csharp" => "c#",
        "golang" => "go",
        "kt" => "kotlin",
        "rb" => "ruby",
        "dockerfile" => "docker",
        "ps1" => "powershell",
        "text" | "txt" | "plain" => PLAIN_TEXT,
        other => other,
    };
    LANGUAGES
        .iter()
        .copied()
        .find(|l| *l == alias)
        .unwrap_or(PLAIN_TEXT)
}

/// Encodes spans as a rich text array.
pub fn rich_text(spans: &[Span]) -> Vec<Value> {
    spans.iter().map(rich_text_item).collect()
}

fn rich_text_item(span: &Span) -> Value {
    if let Some(reference) = &span.reference {
        let id = ContainerId::new(reference.target_id.clone());
        return json!({
            "type": "mention",
            "mention": { "type": "page", "page": { "id": reference.target_id } },
            "plain_text": span.text,
            "href": store_url(&id),
        });
    }
    let link = span.link.as_ref().map(|url| json!({ "url": url }));
    json!({
        "type": "text",
        "text": { "content": span.text, "link": link },
        "annotations": {
            "bold": span.emphasis.bold,
            "italic": span.emphasis.italic,
            "strikethrough": span.emphasis.strikethrough,
            "underline": false,
            "code": span.emphasis.code,
            "color": "default",
        },
    })
}

/// Encodes one block as a Notion block object.
pub fn block(block: &Block) -> Value {
    let text = rich_text(&block.spans);
    let (kind, body) = match &block.kind {
        BlockKind::Heading1 => ("heading_1", json!({ "rich_text": text })),
        BlockKind::Heading2 => ("heading_2", json!({ "rich_text": text })),
        BlockKind::Heading3 => ("heading_3", json!({ "rich_text": text })),
        BlockKind::Paragraph | BlockKind::RawRow => ("paragraph", json!({ "rich_text": text })),
        BlockKind::BulletedItem => ("bulleted_list_item", json!({ "rich_text": text })),
        BlockKind::NumberedItem => ("numbered_list_item", json!({ "rich_text": text })),
        BlockKind::Quote => ("quote", json!({ "rich_text": text })),
        BlockKind::Code { language } => (
            "code",
            json!({ "rich_text": text, "language": code_language(language) }),
        ),
        BlockKind::Callout { icon } => {
            let mut body = json!({ "rich_text": text });
            if let Some(emoji) = icon {
                body["icon"] = json!({ "type": "emoji", "emoji": emoji });
            }
            ("callout", body)
        }
    };
    json!({ "object": "block", "type": kind, kind: body })
}

pub fn blocks(children: &[Block]) -> Vec<Value> {
    children.iter().map(block).collect()
}

/// Encodes page properties for a database with `Name`, `Summary`, `Tags`,
/// `URL` and `Created` columns.
pub fn page_properties(props: &PageProperties) -> Value {
    let tags: Vec<Value> = props.tags.iter().map(|t| json!({ "name": t })).collect();
    json!({
        "Name": { "title": [{ "text": { "content": props.title } }] },
        "Summary": { "rich_text": [{ "text": { "content": props.summary } }] },
        "Tags": { "multi_select": tags },
        "URL": { "url": props.source_url },
        "Created": { "date": { "start": props.created.to_rfc3339() } },
    })
}

/// Body of `POST /v1/pages`.
pub fn create_page_body(request: &ContainerRequest, children: &[Block]) -> Value {
    json!({
        "parent": { "database_id": request.parent_id },
        "properties": page_properties(&request.properties),
        "children": blocks(children),
    })
}

/// Body of `PATCH /v1/blocks/{id}/children`.
pub fn append_children_body(children: &[Block]) -> Value {
    json!({ "children": blocks(children) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockpress_engine::Emphasis;
    use blockpress_engine::limit::split_spans;
    use chrono::{FixedOffset, TimeZone};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("", "plain text")]
    #[case("rust", "rust")]
    #[case("  Python ", "python")]
    #[case("py", "python")]
    #[case("ts", "typescript")]
    #[case("yml", "yaml")]
    #[case("cpp", "c++")]
    #[case("brainfuck", "plain text")]
    fn maps_code_languages(#[case] info: &str, #[case] expected: &str) {
        assert_eq!(code_language(info), expected);
    }

    #[test]
    fn text_span_carries_annotations_and_link() {
        let spans = vec![
            Span::styled("b", Emphasis::BOLD),
            Span::link("docs", "https://docs.rs"),
        ];
        assert_eq!(
            rich_text(&spans),
            vec![
                json!({
                    "type": "text",
                    "text": { "content": "b", "link": null },
                    "annotations": {
                        "bold": true, "italic": false, "strikethrough": false,
                        "underline": false, "code": false, "color": "default"
                    }
                }),
                json!({
                    "type": "text",
                    "text": { "content": "docs", "link": { "url": "https://docs.rs" } },
                    "annotations": {
                        "bold": false, "italic": false, "strikethrough": false,
                        "underline": false, "code": false, "color": "default"
                    }
                }),
            ]
        );
    }

    #[test]
    fn reference_becomes_page_mention() {
        let value = rich_text(&[Span::reference("Notes", "abcd1234")]);
        assert_eq!(
            value[0],
            json!({
                "type": "mention",
                "mention": { "type": "page", "page": { "id": "abcd1234" } },
                "plain_text": "Notes",
                "href": "https://notion.so/abcd1234",
            })
        );
    }

    #[test]
    fn split_reference_halves_carry_their_own_text() {
        let spans = [Span::reference("Research Notes", "abcd1234")];
        let chunks = split_spans(&spans, 9);
        assert_eq!(chunks.len(), 2);

        let texts: Vec<Value> = chunks
            .iter()
            .flat_map(|chunk| rich_text(chunk))
            .map(|item| {
                assert_eq!(item["mention"]["page"]["id"], "abcd1234");
                item["plain_text"].clone()
            })
            .collect();
        let joined: String = texts.iter().filter_map(Value::as_str).collect();
        assert_eq!(joined, "Research Notes");
    }

    #[test]
    fn block_kinds_map_to_notion_types() {
        let cases = [
            (BlockKind::Heading2, "heading_2"),
            (BlockKind::BulletedItem, "bulleted_list_item"),
            (BlockKind::NumberedItem, "numbered_list_item"),
            (BlockKind::RawRow, "paragraph"),
            (BlockKind::Quote, "quote"),
        ];
        for (kind, expected) in cases {
            let value = block(&Block::new(kind, vec![Span::plain("x")]));
            assert_eq!(value["type"], expected);
            assert_eq!(value[expected]["rich_text"][0]["text"]["content"], "x");
        }
    }

    #[test]
    fn code_and_callout_fields() {
        let code = block(&Block::new(
            BlockKind::Code {
                language: "sh".into(),
            },
            vec![Span::plain("ls")],
        ));
        assert_eq!(code["code"]["language"], "shell");

        let callout = block(&Block::new(
            BlockKind::Callout {
                icon: Some("⚠️".into()),
            },
            vec![],
        ));
        assert_eq!(callout["callout"]["icon"]["emoji"], "⚠️");
        assert_eq!(callout["callout"]["rich_text"], json!([]));

        let bare = block(&Block::new(BlockKind::Callout { icon: None }, vec![]));
        assert!(bare["callout"].get("icon").is_none());
    }

    #[test]
    fn page_properties_shape() {
        let created = FixedOffset::east_opt(8 * 3600)
            .unwrap()
            .with_ymd_and_hms(2025, 3, 1, 9, 30, 0)
            .unwrap();
        let props = PageProperties::new("Title", created)
            .with_summary("Short")
            .with_tags(["rust", "notes"]);
        assert_eq!(
            page_properties(&props),
            json!({
                "Name": { "title": [{ "text": { "content": "Title" } }] },
                "Summary": { "rich_text": [{ "text": { "content": "Short" } }] },
                "Tags": { "multi_select": [{ "name": "rust" }, { "name": "notes" }] },
                "URL": { "url": null },
                "Created": { "date": { "start": "2025-03-01T09:30:00+08:00" } },
            })
        );
    }
}
