//! HTML renderer — standalone showcase page with semantic markup.

use crate::generate;
use crate::model::{ContentNode, DeclDoc, Document, ListKind, NoteKind};
use crate::render::{anchor, Renderer};

pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, doc: &Document) -> anyhow::Result<String> {
        let mut out = String::new();

        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        if let Some(ref title) = doc.title {
            out.push_str(&format!("<title>{}</title>\n", escape(title)));
        }
        out.push_str("<style>\n");
        out.push_str("body { font-family: system-ui, sans-serif; max-width: 48em; margin: 2em auto; padding: 0 1em; }\n");
        out.push_str("code { background: #f4f4f4; padding: 0.15em 0.3em; border-radius: 3px; }\n");
        out.push_str("pre { background: #f4f4f4; padding: 1em; border-radius: 5px; overflow-x: auto; }\n");
        out.push_str("aside { border-left: 4px solid #ccc; padding: 0.5em 1em; margin: 1em 0; }\n");
        out.push_str("aside.warning, aside.important, aside.deprecated { border-color: #d9534f; background: #fdf3f2; }\n");
        out.push_str("aside.note, aside.tip, aside.experimental { border-color: #5b9bd5; background: #f2f7fd; }\n");
        out.push_str(".badge { display: inline-block; font-size: 0.75em; padding: 0.1em 0.4em; border-radius: 3px; background: #eee; margin-left: 0.5em; }\n");
        out.push_str("</style>\n");
        out.push_str("</head>\n<body>\n");

        if let Some(ref title) = doc.title {
            out.push_str(&format!("<h1>{}</h1>\n", escape(title)));
        }

        for node in &generate::content(&doc.module).items {
            push_node(&mut out, node);
        }

        if !doc.declarations.is_empty() {
            out.push_str("<h2>Index</h2>\n<ul>\n");
            for decl in &doc.declarations {
                out.push_str(&format!(
                    "  <li><a href=\"#{}\">{}</a></li>\n",
                    escape(&anchor::slug(&decl.name)),
                    escape(&decl.name)
                ));
            }
            out.push_str("</ul>\n");
        }

        for decl in &doc.declarations {
            render_declaration(&mut out, decl);
        }

        out.push_str("</body>\n</html>\n");
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}

fn render_declaration(out: &mut String, decl: &DeclDoc) {
    out.push_str(&format!(
        "<h3 id=\"{}\">{}<span class=\"badge\">{}</span></h3>\n",
        escape(&anchor::slug(&decl.name)),
        escape(&decl.name),
        decl.kind.label()
    ));

    for node in &generate::content(&decl.comment).items {
        push_node(out, node);
    }

    let comment = &decl.comment;

    if !comment.parameters.is_empty() {
        out.push_str("<h4>Parameters</h4>\n<dl>\n");
        for (name, text) in &comment.parameters {
            out.push_str(&format!(
                "  <dt><code>{}</code></dt>\n  <dd>{}</dd>\n",
                escape(name),
                escape(text)
            ));
        }
        out.push_str("</dl>\n");
    }

    if let Some(ref returns) = comment.returns {
        out.push_str(&format!("<h4>Returns</h4>\n<p>{}</p>\n", escape(returns)));
    }

    if let Some(ref throws) = comment.throws {
        out.push_str(&format!("<h4>Throws</h4>\n<p>{}</p>\n", escape(throws)));
    }

    for (kind, entries) in [
        (NoteKind::Note, &comment.notes),
        (NoteKind::Warning, &comment.warnings),
        (NoteKind::Important, &comment.important),
    ] {
        for entry in entries {
            push_aside(out, kind, entry);
        }
    }
}

fn push_node(out: &mut String, node: &ContentNode) {
    match node {
        ContentNode::Description { text } => {
            for paragraph in text.split("\n\n") {
                out.push_str(&format!("<p>{}</p>\n", escape(paragraph)));
            }
        }
        ContentNode::CodeBlock { title, body } => {
            if let Some(title) = title {
                out.push_str(&format!("<h4>{}</h4>\n", escape(title)));
            }
            out.push_str(&format!("<pre><code>{}</code></pre>\n", escape(body)));
        }
        ContentNode::List { kind, items } => {
            let tag = match kind {
                ListKind::Ordered => "ol",
                ListKind::Unordered => "ul",
            };
            out.push_str(&format!("<{}>\n", tag));
            for item in items {
                out.push_str(&format!("  <li>{}</li>\n", escape(item)));
            }
            out.push_str(&format!("</{}>\n", tag));
        }
        ContentNode::Note { kind, body } => push_aside(out, *kind, body),
        ContentNode::Link { title, url } => {
            out.push_str(&format!(
                "<p><a href=\"{}\">{}</a></p>\n",
                escape(url),
                escape(title)
            ));
        }
        ContentNode::Embed { reference } => {
            out.push_str(&format!("<p><em>Embedded: {}</em></p>\n", escape(reference)));
        }
        ContentNode::NestedTopic { id } => {
            out.push_str(&format!(
                "<p><a href=\"#{}\">{}</a></p>\n",
                escape(&anchor::slug(&id.0)),
                escape(&id.0)
            ));
        }
    }
}

fn push_aside(out: &mut String, kind: NoteKind, body: &str) {
    out.push_str(&format!(
        "<aside class=\"{}\"><strong>{}:</strong> {}</aside>\n",
        kind.display_title().to_lowercase(),
        kind.display_title(),
        escape(body)
    ));
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner;

    #[test]
    fn standalone_page_with_aside() {
        let src = "/// Do it.\n///\n/// > Warning: irreversible\npub fn doit() {}\n";
        let doc = scanner::scan(src, Some("demo".into()), false);
        let out = HtmlRenderer.render(&doc).unwrap();
        assert!(out.contains("<!DOCTYPE html>"));
        assert!(out.contains("<title>demo</title>"));
        assert!(out.contains("<aside class=\"warning\"><strong>Warning:</strong> irreversible</aside>"));
    }

    #[test]
    fn code_and_text_escaped() {
        let src = "/// Compares a < b.\n///\n/// ```\n/// if a < b {}\n/// ```\npub fn cmp() {}\n";
        let doc = scanner::scan(src, None, false);
        let out = HtmlRenderer.render(&doc).unwrap();
        assert!(out.contains("<p>Compares a &lt; b.</p>"));
        assert!(out.contains("<pre><code>if a &lt; b {}</code></pre>"));
    }

    #[test]
    fn ordered_list_uses_ol() {
        let src = "/// Steps.\n///\n/// 1. first\n/// 2. second\npub fn steps() {}\n";
        let doc = scanner::scan(src, None, false);
        let out = HtmlRenderer.render(&doc).unwrap();
        assert!(out.contains("<ol>\n  <li>first</li>\n  <li>second</li>\n</ol>"));
    }
}
