//! GitHub-flavored markdown heading anchors for the index.

/// GitHub heading anchor slug: lowercase, strip everything that is not a
/// word character, space, or hyphen, then replace spaces with hyphens.
/// Underscores count as word characters, so snake_case headings keep them.
pub fn slug(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() || c == '_' || c == ' ' || c == '-' {
            out.push(c);
        }
    }
    out.replace(' ', "-")
}

/// Index entry linking to a declaration heading.
pub fn index_item(name: &str) -> String {
    format!("* [{}](#{})", name, slug(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_simple() {
        assert_eq!(slug("hello world"), "hello-world");
    }

    #[test]
    fn slug_strips_punctuation() {
        assert_eq!(slug("Widget::show"), "widgetshow");
    }

    // GitHub derives `#read_to_string` from a `### read_to_string` heading;
    // the underscore survives.
    #[test]
    fn slug_keeps_underscores() {
        assert_eq!(slug("read_to_string"), "read_to_string");
        assert_eq!(index_item("cell_spacing"), "* [cell_spacing](#cell_spacing)");
    }

    #[test]
    fn slug_keeps_hyphens() {
        assert_eq!(slug("two-phase commit"), "two-phase-commit");
    }

    #[test]
    fn index_entry() {
        assert_eq!(index_item("Widget"), "* [Widget](#widget)");
    }
}
