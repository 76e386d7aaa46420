// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **some** content and a [link](https://example.com).\n\n- Bullet point\n  - Nested item\n- Another item\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n| a | b |\n> See [notes](ref:1a2b-3c4d)\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_long_paragraphs(paragraphs: usize, sentences: usize) -> String {
    let sentence = "Some paragraph content with *several* words and a `code` span. ";
    let mut content = String::new();
    for i in 0..paragraphs {
        content.push_str(&format!("## Paragraph {}\n", i));
        content.push_str(&sentence.repeat(sentences));
        content.push_str("\n\n");
    }
    content
}
