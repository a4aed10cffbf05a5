//! Fenced-code extraction — first-pass decomposition of raw comment text.

use crate::indent;
use crate::model::ContentPart;
use regex::Regex;
use std::sync::LazyLock;

// Three backticks, optional language tag, newline, non-greedy body, then a
// closing line of exactly three backticks. Backticks mid-line do not close a
// fence. Only complete open/close pairs match; an unterminated fence stays
// behind as literal text.
static RE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```[^\n]*\n(.*?)(?m:^```$)").unwrap());

/// Split raw text into alternating `Text`/`CodeBlock` parts in source order.
///
/// Code bodies are indentation-normalized. Text segments that are blank after
/// trimming are dropped, as are empty code bodies. Input with no fence at all
/// becomes a single `Text` part, even when empty — callers filter.
pub fn extract(text: &str) -> Vec<ContentPart> {
    let mut parts = Vec::new();
    let mut cursor = 0;

    for caps in RE_FENCE.captures_iter(text) {
        let whole = caps.get(0).expect("match always has group 0");
        let before = &text[cursor..whole.start()];
        if !before.trim().is_empty() {
            parts.push(ContentPart::Text(before.to_string()));
        }
        let body = indent::normalize(caps.get(1).map(|m| m.as_str()).unwrap_or(""));
        if !body.is_empty() {
            parts.push(ContentPart::CodeBlock(body));
        }
        cursor = whole.end();
    }

    if cursor == 0 {
        // No fence found: the whole input is one text part.
        return vec![ContentPart::Text(text.to_string())];
    }

    let rest = &text[cursor..];
    if !rest.trim().is_empty() {
        parts.push(ContentPart::Text(rest.to_string()));
    }
    parts
}
