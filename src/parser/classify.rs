//! Per-line classification for the doc-comment state machine.

use regex::Regex;
use std::sync::LazyLock;

static RE_PARAMETER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^-\s*parameter\s+([A-Za-z_][A-Za-z0-9_]*)\s*:\s*(.*)$").unwrap()
});

static RE_PARAMETERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^-\s*parameters\s*:\s*$").unwrap());

static RE_SECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:-\s*)?(returns|throws|note|warning|important)\s*:\s*(.*)$").unwrap()
});

// `- name: text` item inside an open Parameters block.
static RE_PARAM_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-\s*([A-Za-z_][A-Za-z0-9_]*)\s*:\s*(.*)$").unwrap());

/// Sections opened by an explicit marker line. The marker's payload (text
/// after the colon) becomes the first content line of the section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Returns,
    Throws,
    Note,
    Warning,
    Important,
}

impl SectionKind {
    fn from_keyword(word: &str) -> Option<SectionKind> {
        match word.to_ascii_lowercase().as_str() {
            "returns" => Some(SectionKind::Returns),
            "throws" => Some(SectionKind::Throws),
            "note" => Some(SectionKind::Note),
            "warning" => Some(SectionKind::Warning),
            "important" => Some(SectionKind::Important),
            _ => None,
        }
    }
}

/// What a single (fence-free) line means to the parser.
#[derive(Debug, Clone, PartialEq)]
pub enum LineClass {
    Blank,
    /// `- Parameters:` block opener.
    Parameters,
    /// `- Parameter name: text`, or `- name: text` inside a Parameters block.
    Parameter { name: String, rest: String },
    /// `- Returns:` / `- Throws:` / callout marker with its payload.
    Section { kind: SectionKind, rest: String },
    /// Anything else extends whatever section is currently open.
    Continuation,
}

/// Classify one line. Markers are recognized only at the start of the trimmed
/// line; a line without a recognizable keyword is a continuation — there is
/// no error case.
pub fn classify(line: &str, in_parameters: bool) -> LineClass {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineClass::Blank;
    }

    if let Some(caps) = RE_PARAMETER.captures(trimmed) {
        return LineClass::Parameter {
            name: caps[1].to_string(),
            rest: caps[2].trim_end().to_string(),
        };
    }

    if RE_PARAMETERS.is_match(trimmed) {
        return LineClass::Parameters;
    }

    if let Some(caps) = RE_SECTION.captures(trimmed) {
        if let Some(kind) = SectionKind::from_keyword(&caps[1]) {
            return LineClass::Section {
                kind,
                rest: caps[2].trim_end().to_string(),
            };
        }
    }

    if in_parameters {
        if let Some(caps) = RE_PARAM_ITEM.captures(trimmed) {
            return LineClass::Parameter {
                name: caps[1].to_string(),
                rest: caps[2].trim_end().to_string(),
            };
        }
    }

    LineClass::Continuation
}
