use std::collections::VecDeque;

use crate::model::Span;

/// Characters that end a sentence without needing a following space.
const CJK_SENTENCE_ENDS: [char; 3] = ['。', '！', '？'];
/// Characters that end a sentence when followed by whitespace.
const SENTENCE_ENDS: [char; 3] = ['.', '?', '!'];

/// Splits `text` into the fewest chunks of at most `limit` characters.
///
/// Within the room the fewest-chunks constraint leaves, each chunk ends as
/// late as possible after a sentence end (`. `, `? `, `! ` or a CJK stop),
/// else after whitespace, else at the hard limit. Break characters stay on
/// the chunk they end, so the chunks concatenate back to `text`.
///
/// Lengths are in Unicode scalar values. A `limit` of zero is treated as one.
pub fn split_text(text: &str, limit: usize) -> Vec<String> {
    let limit = limit.max(1);
    let chars: Vec<char> = text.chars().collect();
    let n = chars.len();
    if n <= limit {
        return vec![text.to_string()];
    }

    let chunks = n.div_ceil(limit);
    let mut out = Vec::with_capacity(chunks);
    let mut start = 0usize;
    for i in 0..chunks {
        let after = chunks - i - 1;
        let hi = (start + limit).min(n);
        let end = if hi == n {
            n
        } else {
            // Ending before `lo` would leave more than `after` chunks' worth.
            let lo = n.saturating_sub(after * limit).max(start + 1);
            find_break(&chars, lo, hi)
        };
        out.push(chars[start..end].iter().collect());
        start = end;
    }
    out
}

/// Picks a chunk end in `lo..=hi`, scanning from the right.
fn find_break(chars: &[char], lo: usize, hi: usize) -> usize {
    let sentence = (lo..=hi).rev().find(|&end| {
        let last = chars[end - 1];
        CJK_SENTENCE_ENDS.contains(&last)
            || (end >= 2 && last.is_whitespace() && SENTENCE_ENDS.contains(&chars[end - 2]))
    });
    if let Some(end) = sentence {
        return end;
    }
    (lo..=hi)
        .rev()
        .find(|&end| chars[end - 1].is_whitespace())
        .unwrap_or(hi)
}

/// Splits a span list along the chunk boundaries of its concatenated text.
///
/// Spans crossing a boundary are cut in two and both halves keep the
/// original formatting, so no formatting is lost or duplicated.
pub fn split_spans(spans: &[Span], limit: usize) -> Vec<Vec<Span>> {
    let text: String = spans.iter().map(|s| s.text.as_str()).collect();
    let mut queue: VecDeque<Span> = spans.iter().filter(|s| !s.text.is_empty()).cloned().collect();

    split_text(&text, limit)
        .iter()
        .map(|chunk| {
            let mut want = chunk.chars().count();
            let mut group = Vec::new();
            while want > 0 {
                let Some(front) = queue.pop_front() else {
                    break;
                };
                let len = front.char_len();
                if len <= want {
                    want -= len;
                    group.push(front);
                } else {
                    let cut = byte_offset(&front.text, want);
                    group.push(front.with_text(&front.text[..cut]));
                    queue.push_front(front.with_text(&front.text[cut..]));
                    want = 0;
                }
            }
            group
        })
        .collect()
}

fn byte_offset(s: &str, chars: usize) -> usize {
    s.char_indices().nth(chars).map_or(s.len(), |(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Emphasis;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn lens(chunks: &[String]) -> Vec<usize> {
        chunks.iter().map(|c| c.chars().count()).collect()
    }

    #[test]
    fn short_text_is_one_chunk() {
        assert_eq!(split_text("hello", 10), vec!["hello"]);
        assert_eq!(split_text("", 10), vec![""]);
    }

    #[test]
    fn prefers_sentence_end_over_later_space() {
        let chunks = split_text("One two. Three four five", 16);
        assert_eq!(chunks, vec!["One two. ", "Three four five"]);
    }

    #[test]
    fn falls_back_to_whitespace() {
        let chunks = split_text("aaaa bbbb cc", 7);
        assert_eq!(chunks, vec!["aaaa ", "bbbb cc"]);
    }

    #[test]
    fn hard_split_without_any_break() {
        let chunks = split_text(&"x".repeat(25), 10);
        assert_eq!(lens(&chunks), vec![10, 10, 5]);
    }

    #[test]
    fn cjk_stop_needs_no_space() {
        let text = "这是第一句。这是第二句话";
        let chunks = split_text(text, 8);
        assert_eq!(chunks, vec!["这是第一句。", "这是第二句话"]);
    }

    #[test]
    fn break_never_costs_an_extra_chunk() {
        // Ending the first chunk after "Hi. " would leave 16 chars for one chunk.
        let text = "Hi. xxxxxxxxxxxxxxxx";
        let chunks = split_text(text, 10);
        assert_eq!(chunks.len(), 2);
        assert!(chunks.iter().all(|c| c.chars().count() <= 10));
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn five_thousand_words_split_into_three_at_spaces() {
        let text = "word ".repeat(1000);
        let chunks = split_text(text.trim_end(), 2000);
        assert_eq!(chunks.len(), 3);
        for c in &chunks[..2] {
            assert!(c.ends_with(' '));
        }
        assert_eq!(chunks.concat(), text.trim_end());
    }

    #[rstest]
    #[case("a. b. c. d. e. f. g.", 5)]
    #[case("日本語のテキスト、とても長い文章です。続き。", 7)]
    #[case("mixed 🎉 emoji 🎉 content 🎉 here", 6)]
    #[case("nospacesatallinthisline", 4)]
    fn chunks_fit_and_reassemble(#[case] text: &str, #[case] limit: usize) {
        let chunks = split_text(text, limit);
        assert!(chunks.iter().all(|c| c.chars().count() <= limit));
        assert_eq!(chunks.len(), text.chars().count().div_ceil(limit));
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn split_spans_keeps_formatting_across_cut() {
        let spans = vec![
            Span::plain("aaaa "),
            Span::styled("bbbbbb", Emphasis::BOLD),
        ];
        let groups = split_spans(&spans, 8);
        assert_eq!(
            groups,
            vec![
                vec![Span::plain("aaaa ")],
                vec![Span::styled("bbbbbb", Emphasis::BOLD)],
            ]
        );

        let groups = split_spans(&[Span::styled("abcdefghij", Emphasis::ITALIC)], 4);
        assert_eq!(
            groups,
            vec![
                vec![Span::styled("abcd", Emphasis::ITALIC)],
                vec![Span::styled("efgh", Emphasis::ITALIC)],
                vec![Span::styled("ij", Emphasis::ITALIC)],
            ]
        );
    }
}
