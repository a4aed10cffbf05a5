//! Doc-comment parser — line-oriented state machine.
//!
//! Consumes a raw comment string (comment markers already stripped) and
//! produces a [`DocComment`]: summary, discussion, ordered content parts,
//! parameter map, returns/throws text, and flat callout lists. Fenced code is
//! split off first ([`fence`]); the state machine then walks the prose
//! segments line by line, with section state persisting across code blocks.
//!
//! Parsing never fails: unrecognized markers degrade to ordinary prose.

use crate::model::{ContentPart, DocComment};
use crate::parser::classify::{self, LineClass, SectionKind};
use crate::parser::fence;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Summary,
    Discussion,
    Parameters,
    Returns,
    Throws,
    Note,
    Warning,
    Important,
}

impl From<SectionKind> for Section {
    fn from(kind: SectionKind) -> Section {
        match kind {
            SectionKind::Returns => Section::Returns,
            SectionKind::Throws => Section::Throws,
            SectionKind::Note => Section::Note,
            SectionKind::Warning => Section::Warning,
            SectionKind::Important => Section::Important,
        }
    }
}

/// Transient parse state, owned for the duration of one parse call.
struct ParsingState {
    section: Section,
    /// Open Summary/Discussion prose buffer; flushed into `content_parts`.
    text: Vec<String>,
    /// Open buffer for the typed sections (Returns/Throws/callouts).
    section_text: Vec<String>,
    param_name: Option<String>,
    param_text: Vec<String>,
}

impl ParsingState {
    fn new() -> ParsingState {
        ParsingState {
            section: Section::Summary,
            text: Vec::new(),
            section_text: Vec::new(),
            param_name: None,
            param_text: Vec::new(),
        }
    }
}

/// Parse one declaration's raw documentation text.
///
/// Empty input yields a well-formed, entirely empty record — not an error.
pub fn parse(raw: &str) -> DocComment {
    let mut doc = DocComment::default();
    let mut st = ParsingState::new();

    for part in fence::extract(raw) {
        match part {
            ContentPart::CodeBlock(body) => {
                flush_text(&mut st, &mut doc);
                // A code block after a completed first paragraph ends the
                // summary; later prose is discussion.
                if st.section == Section::Summary && doc.summary.is_some() {
                    st.section = Section::Discussion;
                }
                doc.content_parts.push(ContentPart::CodeBlock(body));
            }
            ContentPart::Text(text) => {
                for line in text.lines() {
                    process_line(&mut st, &mut doc, line);
                }
            }
        }
    }

    commit_param(&mut st, &mut doc);
    commit_section(&mut st, &mut doc);
    flush_text(&mut st, &mut doc);
    doc
}

fn process_line(st: &mut ParsingState, doc: &mut DocComment, line: &str) {
    let in_parameters = st.section == Section::Parameters;
    match classify::classify(line, in_parameters) {
        LineClass::Blank => match st.section {
            Section::Summary => {
                // First blank line after summary text demotes what follows
                // into the discussion. Leading blanks are ignored.
                if !st.text.is_empty() {
                    flush_text(st, doc);
                    st.section = Section::Discussion;
                }
            }
            Section::Discussion => {
                if !st.text.is_empty() {
                    st.text.push(String::new());
                }
            }
            // Typed sections hold flat text; blank lines are not preserved.
            _ => {}
        },
        LineClass::Parameters => {
            change_section(st, doc, Section::Parameters);
        }
        LineClass::Parameter { name, rest } => {
            change_section(st, doc, Section::Parameters);
            st.param_name = Some(name);
            if !rest.is_empty() {
                st.param_text.push(rest);
            }
        }
        LineClass::Section { kind, rest } => {
            change_section(st, doc, kind.into());
            if !rest.is_empty() {
                st.section_text.push(rest);
            }
        }
        LineClass::Continuation => {
            let text = line.trim_end();
            match st.section {
                Section::Summary | Section::Discussion => st.text.push(text.to_string()),
                Section::Parameters => {
                    if st.param_name.is_some() {
                        st.param_text.push(text.trim_start().to_string());
                    } else {
                        // Prose inside `- Parameters:` with no open name:
                        // degrade to discussion text.
                        st.section = Section::Discussion;
                        st.text.push(text.to_string());
                    }
                }
                _ => st.section_text.push(text.trim_start().to_string()),
            }
        }
    }
}

/// Commit whatever is open, then switch to `next`. Every section change
/// flushes the prose buffer first so content-part order matches source order.
fn change_section(st: &mut ParsingState, doc: &mut DocComment, next: Section) {
    flush_text(st, doc);
    commit_param(st, doc);
    commit_section(st, doc);
    st.section = next;
}

/// Flush the open Summary/Discussion buffer as one `Text` content part,
/// preserving original line breaks. Also populates the flat summary and
/// discussion fields.
fn flush_text(st: &mut ParsingState, doc: &mut DocComment) {
    let joined = drain_buffer(&mut st.text);
    let Some(joined) = joined else { return };

    match st.section {
        Section::Summary if doc.summary.is_none() => doc.summary = Some(joined.clone()),
        _ => match &mut doc.discussion {
            Some(discussion) => {
                discussion.push_str("\n\n");
                discussion.push_str(&joined);
            }
            None => doc.discussion = Some(joined.clone()),
        },
    }
    doc.content_parts.push(ContentPart::Text(joined));
}

fn commit_param(st: &mut ParsingState, doc: &mut DocComment) {
    let Some(name) = st.param_name.take() else {
        st.param_text.clear();
        return;
    };
    let text = drain_buffer(&mut st.param_text).unwrap_or_default();
    doc.parameters.insert(name, text);
}

fn commit_section(st: &mut ParsingState, doc: &mut DocComment) {
    let Some(text) = drain_buffer(&mut st.section_text) else {
        return;
    };
    match st.section {
        Section::Returns => append_opt(&mut doc.returns, text),
        Section::Throws => append_opt(&mut doc.throws, text),
        Section::Note => doc.notes.push(text),
        Section::Warning => doc.warnings.push(text),
        Section::Important => doc.important.push(text),
        _ => {}
    }
}

/// Join buffered lines with newlines, trimming fully-blank edge lines.
/// Returns `None` when nothing meaningful was buffered.
fn drain_buffer(buf: &mut Vec<String>) -> Option<String> {
    let lines = std::mem::take(buf);
    let start = lines.iter().position(|l| !l.trim().is_empty())?;
    let end = lines.iter().rposition(|l| !l.trim().is_empty())?;
    Some(lines[start..=end].join("\n"))
}

fn append_opt(slot: &mut Option<String>, text: String) {
    match slot {
        Some(existing) => {
            existing.push('\n');
            existing.push_str(&text);
        }
        None => *slot = Some(text),
    }
}
