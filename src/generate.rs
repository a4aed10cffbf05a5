//! Content generation — ordered showcase nodes from a parsed comment.

use crate::content::Content;
use crate::model::{ContentNode, ContentPart, DocComment};
use crate::parser::markup;

/// Build the ordered content for one declaration's comment.
///
/// Code blocks are titled with full knowledge of the total count, assigned in
/// a second pass over the whole part sequence: a lone block is "Example",
/// multiple blocks are "Example 1", "Example 2", ... in source order.
pub fn content(doc: &DocComment) -> Content {
    let total_code = doc.content_parts.iter().filter(|p| p.is_code()).count();
    let mut seen_code = 0;

    doc.content_parts.iter().fold(Content::new(), |acc, part| {
        let piece = match part {
            ContentPart::Text(text) => markup::extract(text)
                .into_iter()
                .fold(Content::new(), Content::with_item),
            ContentPart::CodeBlock(body) => {
                seen_code += 1;
                let title = if total_code == 1 {
                    "Example".to_string()
                } else {
                    format!("Example {seen_code}")
                };
                Content::new().with_item(ContentNode::CodeBlock {
                    title: Some(title),
                    body: body.clone(),
                })
            }
        };
        acc.merge(piece)
    })
}
