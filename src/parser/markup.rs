//! List and callout extraction from prose segments.
//!
//! Operates on already fence-extracted `Text` parts, splitting each into the
//! alternating Description / List / Note pattern consumers render. Headings
//! and inline markdown (`**bold**`, `` `code` ``, `*italic*`) are passed
//! through as literal text — this is not a markdown renderer.

use crate::model::{ContentNode, ListKind, NoteKind};
use regex::Regex;
use std::sync::LazyLock;

// Blockquote callout: `> Keyword: text` or `> Keyword text` — the colon is
// optional, the keyword token followed by whitespace (or end of line) is
// sufficient.
static RE_CALLOUT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^>\s*(note|warning|important|deprecated|experimental|tip)\b\s*:?\s*(.*)$")
        .unwrap()
});

static RE_QUOTE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^>\s?(.*)$").unwrap());

// A marker must be followed by at least one whitespace character, which
// excludes prose such as "-5 degrees" and "1 + 2 = 3".
static RE_UNORDERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*+]\s+(.*)$").unwrap());

static RE_ORDERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.\s+(.*)$").unwrap());

#[derive(Default)]
struct Splitter {
    nodes: Vec<ContentNode>,
    /// Completed paragraphs awaiting coalescing into one Description.
    paragraphs: Vec<String>,
    /// Lines of the paragraph currently being read.
    para: Vec<String>,
    list: Option<(ListKind, Vec<String>)>,
    note: Option<(NoteKind, Vec<String>)>,
}

/// Split one plain-text block into ordered content nodes.
pub fn extract(text: &str) -> Vec<ContentNode> {
    let mut s = Splitter::default();

    for line in text.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            s.end_note();
            s.end_list();
            s.end_paragraph();
            continue;
        }

        // Blockquote callouts first: `>` is unambiguous.
        if let Some(caps) = RE_CALLOUT.captures(trimmed) {
            if let Some(kind) = NoteKind::from_keyword(&caps[1]) {
                s.end_note();
                s.end_list();
                s.flush_description();
                let rest = caps[2].trim_end();
                let body = if rest.is_empty() { Vec::new() } else { vec![rest.to_string()] };
                s.note = Some((kind, body));
                continue;
            }
        }

        if s.note.is_some() {
            // `>` continuation lines extend the open callout.
            if let Some(caps) = RE_QUOTE.captures(trimmed) {
                if let Some((_, body)) = s.note.as_mut() {
                    body.push(caps[1].trim_end().to_string());
                }
                continue;
            }
            s.end_note();
        }

        if let Some(caps) = RE_UNORDERED.captures(trimmed) {
            s.push_item(ListKind::Unordered, caps[1].trim().to_string());
            continue;
        }
        if let Some(caps) = RE_ORDERED.captures(trimmed) {
            s.push_item(ListKind::Ordered, caps[1].trim().to_string());
            continue;
        }

        // Default: prose. A keyword-less blockquote is "actually a quote" and
        // stays literal, as do headings.
        s.end_list();
        s.para.push(trimmed.to_string());
    }

    s.end_note();
    s.end_list();
    s.flush_description();
    s.nodes
}

impl Splitter {
    fn push_item(&mut self, kind: ListKind, item: String) {
        self.end_note();
        if let Some((open_kind, items)) = self.list.as_mut() {
            if *open_kind == kind {
                items.push(item);
                return;
            }
        }
        // Either no list is open or the marker kind changed mid-run.
        self.end_list();
        self.flush_description();
        self.list = Some((kind, vec![item]));
    }

    fn end_paragraph(&mut self) {
        if !self.para.is_empty() {
            self.paragraphs.push(std::mem::take(&mut self.para).join("\n"));
        }
    }

    /// Coalesce pending paragraphs into a single Description node, joined
    /// with blank lines.
    fn flush_description(&mut self) {
        self.end_paragraph();
        if !self.paragraphs.is_empty() {
            let text = std::mem::take(&mut self.paragraphs).join("\n\n");
            self.nodes.push(ContentNode::Description { text });
        }
    }

    fn end_list(&mut self) {
        if let Some((kind, items)) = self.list.take() {
            self.nodes.push(ContentNode::List { kind, items });
        }
    }

    fn end_note(&mut self) {
        if let Some((kind, body)) = self.note.take() {
            self.nodes.push(ContentNode::Note {
                kind,
                body: body.join("\n"),
            });
        }
    }
}
