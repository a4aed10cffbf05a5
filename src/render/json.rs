//! JSON renderer — structured output for tooling integration.
//!
//! Serializes the parsed model plus the generated content nodes, so
//! consumers get both the flat legacy fields and the ordered node sequence.

use crate::content::Content;
use crate::generate;
use crate::model::{DeclKind, DocComment, Document};
use crate::render::Renderer;
use anyhow::Context;
use serde::Serialize;

pub struct JsonRenderer;

#[derive(Serialize)]
struct Page<'a> {
    title: &'a Option<String>,
    module: ModuleView<'a>,
    declarations: Vec<DeclView<'a>>,
}

#[derive(Serialize)]
struct ModuleView<'a> {
    comment: &'a DocComment,
    content: Content,
}

#[derive(Serialize)]
struct DeclView<'a> {
    name: &'a str,
    kind: DeclKind,
    public: bool,
    comment: &'a DocComment,
    content: Content,
}

impl Renderer for JsonRenderer {
    fn render(&self, doc: &Document) -> anyhow::Result<String> {
        let page = Page {
            title: &doc.title,
            module: ModuleView {
                comment: &doc.module,
                content: generate::content(&doc.module),
            },
            declarations: doc
                .declarations
                .iter()
                .map(|decl| DeclView {
                    name: &decl.name,
                    kind: decl.kind,
                    public: decl.is_public,
                    comment: &decl.comment,
                    content: generate::content(&decl.comment),
                })
                .collect(),
        };
        let mut out =
            serde_json::to_string_pretty(&page).context("failed to serialize document")?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
