//! Common leading-indentation stripping for code blocks and prose.

/// Strip the minimum common leading whitespace from every line.
///
/// Blank lines become true empty strings and do not count toward the common
/// indentation. Fully-blank lines at the start and end are dropped. Relative
/// indentation between sibling lines is preserved. A single-line input (no
/// newline) is returned unchanged — no indentation concept applies.
pub fn normalize(text: &str) -> String {
    if !text.contains('\n') {
        return text.to_string();
    }

    let lines: Vec<&str> = text.split('\n').collect();

    // Minimum leading whitespace (spaces or tabs) across non-blank lines.
    let min_indent = lines
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.len() - l.trim_start_matches([' ', '\t']).len())
        .min()
        .unwrap_or(0);

    let stripped: Vec<&str> = lines
        .iter()
        .map(|l| {
            if l.trim().is_empty() {
                ""
            } else {
                &l[min_indent..]
            }
        })
        .collect();

    // Drop fully-blank lines at both ends.
    let start = stripped.iter().position(|l| !l.is_empty());
    let Some(start) = start else {
        return String::new();
    };
    let end = stripped.iter().rposition(|l| !l.is_empty()).unwrap_or(start);

    stripped[start..=end].join("\n")
}
