//! Ordered content aggregate and its composition algebra.

use crate::model::{ContentNode, TopicId};
use serde::Serialize;

/// Assembled showcase content: an ordered node sequence plus references to
/// nested topics. `Content::default()` is the identity for [`Content::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Content {
    pub items: Vec<ContentNode>,
    pub children: Vec<TopicId>,
}

impl Content {
    pub fn new() -> Content {
        Content::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.children.is_empty()
    }

    /// Order-preserving concatenation: `a.merge(b)` is a's items followed by
    /// b's items, likewise for children. Associative but not commutative, so
    /// builder-style composition gives the same result as a left fold or a
    /// tree reduction.
    pub fn merge(mut self, other: Content) -> Content {
        self.items.extend(other.items);
        self.children.extend(other.children);
        self
    }

    /// Algebraic counterpart of [`Content::merge`]. Removal has no meaning
    /// for accumulated documentation content, so the left operand is returned
    /// unchanged.
    #[allow(dead_code)]
    pub fn subtracting(self, _other: &Content) -> Content {
        self
    }

    pub fn with_item(mut self, item: ContentNode) -> Content {
        self.items.push(item);
        self
    }

    #[allow(dead_code)]
    pub fn with_child(mut self, id: TopicId) -> Content {
        self.children.push(id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ListKind, NoteKind};

    fn sample(tag: &str) -> Content {
        Content::new()
            .with_item(ContentNode::Description { text: tag.into() })
            .with_child(TopicId(format!("topic-{tag}")))
    }

    #[test]
    fn identity_element() {
        let a = sample("a");
        assert_eq!(Content::new().merge(a.clone()), a);
        assert_eq!(a.clone().merge(Content::new()), a);
    }

    #[test]
    fn merge_is_associative() {
        let (a, b, c) = (sample("a"), sample("b"), sample("c"));
        let left = a.clone().merge(b.clone()).merge(c.clone());
        let right = a.merge(b.merge(c));
        assert_eq!(left, right);
    }

    #[test]
    fn merge_preserves_order() {
        let a = Content::new().with_item(ContentNode::List {
            kind: ListKind::Unordered,
            items: vec!["x".into()],
        });
        let b = Content::new().with_item(ContentNode::Note {
            kind: NoteKind::Tip,
            body: "y".into(),
        });
        let merged = a.merge(b);
        assert!(matches!(merged.items[0], ContentNode::List { .. }));
        assert!(matches!(merged.items[1], ContentNode::Note { .. }));
    }

    #[test]
    fn subtracting_is_a_no_op() {
        let a = sample("a");
        let b = sample("b");
        assert_eq!(a.clone().subtracting(&b), a);
    }

    #[test]
    fn children_concatenate_in_order() {
        let merged = sample("a").merge(sample("b"));
        assert_eq!(
            merged.children,
            vec![TopicId("topic-a".into()), TopicId("topic-b".into())]
        );
    }
}
