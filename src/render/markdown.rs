//! GitHub-flavored markdown renderer for showcase pages.

use crate::generate;
use crate::model::{ContentNode, DeclDoc, Document, ListKind};
use crate::render::{anchor, Renderer};

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, doc: &Document) -> anyhow::Result<String> {
        let mut out = String::new();

        if let Some(ref title) = doc.title {
            out.push_str(&format!("# {}\n\n", title));
        }

        // Module-level docs, reconstructed through the same node pipeline as
        // declaration docs.
        let module_content = generate::content(&doc.module);
        if !module_content.is_empty() {
            for node in &module_content.items {
                push_node(&mut out, node);
            }
        }

        if !doc.declarations.is_empty() {
            out.push_str("## Index\n\n");
            for decl in &doc.declarations {
                out.push_str(&anchor::index_item(&decl.name));
                out.push('\n');
            }
            out.push('\n');
        }

        for decl in &doc.declarations {
            render_declaration(&mut out, decl);
        }

        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

fn render_declaration(out: &mut String, decl: &DeclDoc) {
    out.push_str(&format!("### {}\n\n", decl.name));

    // Kind badge, plus a private marker when private items were requested.
    let mut badges = vec![format!("`{}`", decl.kind.label())];
    if !decl.is_public {
        badges.push("*`private`*".to_string());
    }
    out.push_str(&format!("> {}\n\n", badges.join(" ")));

    for node in &generate::content(&decl.comment).items {
        push_node(out, node);
    }

    let comment = &decl.comment;

    if !comment.parameters.is_empty() {
        out.push_str("#### Parameters\n\n");
        for (name, text) in &comment.parameters {
            out.push_str(&format!("* **{}**: {}\n", name, text.replace('\n', " ")));
        }
        out.push('\n');
    }

    if let Some(ref returns) = comment.returns {
        out.push_str("#### Returns\n\n");
        out.push_str(returns);
        out.push_str("\n\n");
    }

    if let Some(ref throws) = comment.throws {
        out.push_str("#### Throws\n\n");
        out.push_str(throws);
        out.push_str("\n\n");
    }

    // Legacy flat callouts from `- Note:`-style section markers.
    for (title, entries) in [
        ("Note", &comment.notes),
        ("Warning", &comment.warnings),
        ("Important", &comment.important),
    ] {
        for entry in entries {
            push_quote(out, title, entry);
        }
    }
}

fn push_node(out: &mut String, node: &ContentNode) {
    match node {
        ContentNode::Description { text } => {
            out.push_str(text);
            out.push_str("\n\n");
        }
        ContentNode::CodeBlock { title, body } => {
            if let Some(title) = title {
                out.push_str(&format!("#### {}\n\n", title));
            }
            out.push_str("```rust\n");
            out.push_str(body);
            out.push_str("\n```\n\n");
        }
        ContentNode::List { kind, items } => {
            for (i, item) in items.iter().enumerate() {
                match kind {
                    ListKind::Unordered => out.push_str(&format!("* {}\n", item)),
                    ListKind::Ordered => out.push_str(&format!("{}. {}\n", i + 1, item)),
                }
            }
            out.push('\n');
        }
        ContentNode::Note { kind, body } => push_quote(out, kind.display_title(), body),
        ContentNode::Link { title, url } => {
            out.push_str(&format!("[{}]({})\n\n", title, url));
        }
        ContentNode::Embed { reference } => {
            out.push_str(&format!("*Embedded: {}*\n\n", reference));
        }
        ContentNode::NestedTopic { id } => {
            out.push_str(&format!("* [{}](#{})\n\n", id.0, anchor::slug(&id.0)));
        }
    }
}

/// Blockquote callout: every body line gets the `> ` prefix.
fn push_quote(out: &mut String, title: &str, body: &str) {
    let mut lines = body.lines();
    match lines.next() {
        Some(first) => out.push_str(&format!("> **{}:** {}\n", title, first)),
        None => out.push_str(&format!("> **{}:**\n", title)),
    }
    for line in lines {
        out.push_str(&format!("> {}\n", line));
    }
    out.push('\n');
}
