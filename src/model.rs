//! Data model for parsed showcase documentation — format-agnostic.

use serde::Serialize;
use std::collections::BTreeMap;

/// Complete parsed showcase document from a single source file.
#[derive(Debug, Default, Serialize)]
pub struct Document {
    /// Page title, usually the source file stem.
    pub title: Option<String>,
    /// Module-level docs (`//!` lines at the top of the file).
    pub module: DocComment,
    pub declarations: Vec<DeclDoc>,
}

/// A single documented declaration.
#[derive(Debug, Serialize)]
pub struct DeclDoc {
    pub name: String,
    pub kind: DeclKind,
    /// Whether the declaration carries a `pub` modifier. Private items are
    /// kept only when the caller asks for them.
    pub is_public: bool,
    pub comment: DocComment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclKind {
    Fn,
    Struct,
    Enum,
    Trait,
    Mod,
    Const,
    Static,
    Type,
    Macro,
}

impl DeclKind {
    pub fn label(&self) -> &'static str {
        match self {
            DeclKind::Fn => "fn",
            DeclKind::Struct => "struct",
            DeclKind::Enum => "enum",
            DeclKind::Trait => "trait",
            DeclKind::Mod => "mod",
            DeclKind::Const => "const",
            DeclKind::Static => "static",
            DeclKind::Type => "type",
            DeclKind::Macro => "macro",
        }
    }
}

/// Coarse first-pass decomposition of raw comment text: prose and fenced code
/// regions, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum ContentPart {
    Text(String),
    CodeBlock(String),
}

impl ContentPart {
    pub fn is_code(&self) -> bool {
        matches!(self, ContentPart::CodeBlock(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Ordered,
    Unordered,
}

/// Callout flavor with its fixed display title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteKind {
    Note,
    Warning,
    Important,
    Deprecated,
    Experimental,
    Tip,
}

impl NoteKind {
    pub fn display_title(&self) -> &'static str {
        match self {
            NoteKind::Note => "Note",
            NoteKind::Warning => "Warning",
            NoteKind::Important => "Important",
            NoteKind::Deprecated => "Deprecated",
            NoteKind::Experimental => "Experimental",
            NoteKind::Tip => "Tip",
        }
    }

    /// Case-insensitive keyword lookup, e.g. from a `> Warning:` blockquote.
    pub fn from_keyword(word: &str) -> Option<NoteKind> {
        match word.to_ascii_lowercase().as_str() {
            "note" => Some(NoteKind::Note),
            "warning" => Some(NoteKind::Warning),
            "important" => Some(NoteKind::Important),
            "deprecated" => Some(NoteKind::Deprecated),
            "experimental" => Some(NoteKind::Experimental),
            "tip" => Some(NoteKind::Tip),
            _ => None,
        }
    }
}

/// Reference to a nested showcase topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicId(pub String);

/// Fine-grained typed unit for ordered rendering. The sequence of nodes for a
/// comment reproduces the left-to-right order of the source text exactly;
/// adjacent prose paragraphs are coalesced into one `Description`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum ContentNode {
    Description {
        text: String,
    },
    CodeBlock {
        title: Option<String>,
        body: String,
    },
    List {
        kind: ListKind,
        items: Vec<String>,
    },
    Note {
        kind: NoteKind,
        body: String,
    },
    // Produced when assembling topic graphs rather than by the comment
    // parser itself.
    #[allow(dead_code)]
    Link {
        title: String,
        url: String,
    },
    #[allow(dead_code)]
    Embed {
        reference: String,
    },
    #[allow(dead_code)]
    NestedTopic {
        id: TopicId,
    },
}

/// Parsed doc comment. Constructed once per declaration, immutable afterwards.
///
/// `content_parts` carries the ordered prose/code interleaving for rich
/// rendering. The flat fields (`parameters`, `returns`, `throws`, `notes`,
/// `warnings`, `important`) are populated in parallel for consumers that have
/// not migrated to the ordered node model.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct DocComment {
    /// First paragraph, ended by the first blank line.
    pub summary: Option<String>,
    /// Remaining prose after the summary, paragraphs joined with blank lines.
    pub discussion: Option<String>,
    pub content_parts: Vec<ContentPart>,
    /// `- Parameter name: text` entries. Keyed lookup; declaration order is
    /// not significant.
    pub parameters: BTreeMap<String, String>,
    pub returns: Option<String>,
    pub throws: Option<String>,
    pub notes: Vec<String>,
    pub warnings: Vec<String>,
    pub important: Vec<String>,
}

impl DocComment {
    pub fn is_empty(&self) -> bool {
        self.summary.is_none()
            && self.discussion.is_none()
            && self.content_parts.is_empty()
            && self.parameters.is_empty()
            && self.returns.is_none()
            && self.throws.is_none()
            && self.notes.is_empty()
            && self.warnings.is_empty()
            && self.important.is_empty()
    }
}
