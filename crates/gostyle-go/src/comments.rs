//! Doc comment extraction.
//!
//! A declaration's doc comment is the run of comments ending on the line
//! directly above it, with no blank line in between. A comment that trails
//! code on its own line belongs to that code, not to what follows.

use tree_sitter::Node;

use crate::parser::text;

/// Returns the normalized doc text of `decl`, or `None` if it has none.
pub(crate) fn doc_text(decl: &Node<'_>, src: &[u8]) -> Option<String> {
    let mut group = Vec::new();
    let mut next_row = decl.start_position().row;
    let mut current = decl.prev_named_sibling();

    while let Some(node) = current {
        if node.kind() != "comment" || node.end_position().row + 1 != next_row {
            break;
        }
        if is_trailing(&node) {
            break;
        }
        group.push(text(&node, src));
        next_row = node.start_position().row;
        current = node.prev_named_sibling();
    }

    group.reverse();
    let doc = normalize(&group);
    (!doc.is_empty()).then_some(doc)
}

fn is_trailing(comment: &Node<'_>) -> bool {
    comment.prev_named_sibling().is_some_and(|prev| {
        prev.kind() != "comment" && prev.end_position().row == comment.start_position().row
    })
}

/// Strips comment markers and tool directives, then trims surrounding blank space.
pub(crate) fn normalize(comments: &[&str]) -> String {
    let mut lines: Vec<&str> = Vec::new();

    for raw in comments {
        if let Some(body) = raw.strip_prefix("//") {
            if is_directive(body) {
                continue;
            }
            lines.push(body.strip_prefix(' ').unwrap_or(body));
        } else if let Some(body) = raw.strip_prefix("/*") {
            let body = body.strip_suffix("*/").unwrap_or(body);
            lines.extend(body.lines());
        }
    }

    lines
        .iter()
        .map(|l| l.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_owned()
}

/// `//go:generate`, `//line foo.go:3` and similar tool comments.
fn is_directive(body: &str) -> bool {
    if ["line ", "extern ", "export "]
        .iter()
        .any(|p| body.starts_with(p))
    {
        return true;
    }

    let Some(colon) = body.find(':') else {
        return false;
    };
    let bytes = body.as_bytes();
    if colon == 0 || colon + 1 >= bytes.len() {
        return false;
    }
    bytes[..=colon + 1]
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != colon)
        .all(|(_, b)| b.is_ascii_lowercase() || b.is_ascii_digit())
}
