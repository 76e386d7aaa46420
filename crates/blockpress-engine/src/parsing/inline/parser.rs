use crate::model::Span;

use super::types::{InlineMatch, MatchKind};

/// Formats a single line into an ordered list of [`Span`]s.
///
/// Every pattern is run over the whole line and every candidate is kept,
/// then [`select_non_overlapping`] picks the winners. Text between winners
/// becomes plain spans, so the output covers the line with no gaps and no
/// duplicated characters. An empty line yields no spans.
pub fn format_inline(line: &str) -> Vec<Span> {
    if line.is_empty() {
        return vec![];
    }

    let accepted = select_non_overlapping(collect_matches(line));
    if accepted.is_empty() {
        return vec![Span::plain(line)];
    }

    let mut out = Vec::with_capacity(accepted.len() * 2 + 1);
    let mut last_end = 0usize;
    for m in accepted {
        if m.start > last_end {
            out.push(Span::plain(&line[last_end..m.start]));
        }
        last_end = m.end;
        out.push(m.into_span());
    }
    if last_end < line.len() {
        out.push(Span::plain(&line[last_end..]));
    }
    out
}

/// Collects candidate matches of every pattern, sorted by start offset
/// and then by pattern priority.
///
/// Each pattern scans the line once, resuming after its previous match, so
/// the work is linear in the line length. Overlaps between different
/// patterns are left to [`select_non_overlapping`].
pub fn collect_matches(line: &str) -> Vec<InlineMatch> {
    let mut out = Vec::new();
    for kind in MatchKind::ALL {
        let re = kind.pattern();
        let mut at = 0usize;
        while at < line.len() {
            let Some(caps) = re.captures_at(line, at) else {
                break;
            };
            let Some(whole) = caps.get(0) else {
                break;
            };
            if let Some(m) = kind.read(&caps) {
                out.push(m);
            }
            // Every pattern has delimiters, so a match is never empty.
            at = whole.end();
        }
    }
    out.sort_by_key(|m| (m.start, m.kind));
    out
}

/// Interval selection over candidates sorted by `(start, kind)`.
///
/// Walks left to right and accepts a candidate only if it starts at or after
/// the end of the last accepted one. The earliest-starting candidate always
/// wins a contested region; losers are dropped, never merged.
pub fn select_non_overlapping(sorted: Vec<InlineMatch>) -> Vec<InlineMatch> {
    let mut accepted: Vec<InlineMatch> = Vec::new();
    for m in sorted {
        if accepted.last().is_some_and(|prev| prev.overlaps(&m)) {
            continue;
        }
        accepted.push(m);
    }
    accepted
}
