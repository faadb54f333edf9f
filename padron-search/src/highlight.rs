//! Case-insensitive match highlighting.

/// A byte range of the original suggestion text to render highlighted.
///
/// Always falls on character boundaries of the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

/// Finds every disjoint case-insensitive occurrence of `query` in `text`.
///
/// Matching happens in lowercase space; an index map translates the hits
/// back to byte ranges of the original text, so mixed-case and accented
/// text highlight correctly. No occurrence yields an empty vector — the
/// suggestion is still shown, just unmarked.
#[must_use]
pub fn match_spans(text: &str, query: &str) -> Vec<MatchSpan> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    // Lowercased haystack plus, per lowered byte, the byte offset of the
    // original character it came from.
    let mut lowered = String::with_capacity(text.len());
    let mut origin = Vec::with_capacity(text.len());
    for (offset, ch) in text.char_indices() {
        for lc in ch.to_lowercase() {
            let before = lowered.len();
            lowered.push(lc);
            origin.resize(before + lc.len_utf8(), offset);
        }
    }
    origin.push(text.len());

    let mut spans = Vec::new();
    let mut from = 0;
    while let Some(found) = lowered[from..].find(&needle) {
        let lo = from + found;
        let hi = lo + needle.len();
        let start = origin[lo];
        let end = origin[hi];
        // A match that begins and ends inside one expanded character maps
        // to an empty original range; skip it.
        if end > start {
            spans.push(MatchSpan { start, end });
        }
        from = hi;
    }
    spans
}
