//! Declaration scanner — extracts doc comment blocks from Rust source.
//!
//! Collects leading `//!` lines as module docs, then walks the file looking
//! for `///` blocks and the declaration that follows them. "Public API" is a
//! string heuristic on the `pub` modifier; it does not see macro expansion or
//! re-exports and is knowingly imprecise.

use crate::model::{DeclDoc, DeclKind, DocComment, Document};
use crate::parser::comment;
use regex::Regex;
use std::sync::LazyLock;

static RE_MODULE_DOC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^//!\s?(.*)").unwrap());

static RE_DOC_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*///\s?(.*)").unwrap());

static RE_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*#\[").unwrap());

static RE_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^\s*(pub(?:\([^)]*\))?\s+)?(?:default\s+)?(?:const\s+)?(?:async\s+)?(?:unsafe\s+)?(?:extern\s+"[^"]*"\s+)?(fn|struct|enum|trait|mod|const|static|type|macro)\s+([A-Za-z_][A-Za-z0-9_]*)"#,
    )
    .unwrap()
});

// `macro_rules!` has no `pub` modifier; `#[macro_export]` plays that role.
static RE_MACRO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*macro_rules!\s*([A-Za-z_][A-Za-z0-9_]*)").unwrap());

/// Scan a Rust source file for documented declarations.
///
/// Private declarations are skipped unless `include_private` is set.
/// Declarations with no doc comment are skipped either way — this is a
/// showcase generator, not an API index.
pub fn scan(input: &str, title: Option<String>, include_private: bool) -> Document {
    let lines: Vec<&str> = input.lines().collect();
    let mut i = 0;

    // Leading `//!` block is the module doc.
    let mut module_lines: Vec<String> = Vec::new();
    while i < lines.len() {
        let line = lines[i].trim_start();
        if let Some(caps) = RE_MODULE_DOC.captures(line) {
            module_lines.push(caps[1].to_string());
            i += 1;
        } else if line.is_empty() && module_lines.is_empty() {
            i += 1;
        } else {
            break;
        }
    }
    let module = comment::parse(&module_lines.join("\n"));

    let mut declarations: Vec<DeclDoc> = Vec::new();
    let mut pending_doc: Vec<String> = Vec::new();
    let mut exported_macro = false;

    while i < lines.len() {
        let line = lines[i];
        i += 1;

        if let Some(caps) = RE_DOC_COMMENT.captures(line) {
            pending_doc.push(caps[1].to_string());
            continue;
        }

        // Attributes between the doc block and its declaration are skipped
        // without losing the accumulated docs.
        if RE_ATTRIBUTE.is_match(line) {
            if line.contains("macro_export") {
                exported_macro = true;
            }
            continue;
        }

        let decl = if let Some(caps) = RE_DECL.captures(line) {
            Some((caps.get(1).is_some(), decl_kind(&caps[2]), caps[3].to_string()))
        } else if let Some(caps) = RE_MACRO.captures(line) {
            Some((exported_macro, DeclKind::Macro, caps[1].to_string()))
        } else {
            None
        };

        if let Some((is_public, kind, name)) = decl {
            exported_macro = false;
            let doc = std::mem::take(&mut pending_doc);

            if !doc.is_empty() && (is_public || include_private) {
                let parsed = comment::parse(&doc.join("\n"));
                if !parsed.is_empty() {
                    declarations.push(DeclDoc {
                        name,
                        kind,
                        is_public,
                        comment: parsed,
                    });
                }
            }
            continue;
        }

        // Any other non-blank line orphans the accumulated docs.
        if !line.trim().is_empty() {
            pending_doc.clear();
            exported_macro = false;
        }
    }

    Document {
        title,
        module,
        declarations,
    }
}

fn decl_kind(keyword: &str) -> DeclKind {
    match keyword {
        "fn" => DeclKind::Fn,
        "struct" => DeclKind::Struct,
        "enum" => DeclKind::Enum,
        "trait" => DeclKind::Trait,
        "mod" => DeclKind::Mod,
        "const" => DeclKind::Const,
        "static" => DeclKind::Static,
        "macro" => DeclKind::Macro,
        _ => DeclKind::Type,
    }
}
