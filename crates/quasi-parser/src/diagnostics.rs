//! Syntax error detection over a recovered tree-sitter tree.

use ast_grep_core::Node;
use quasi_core::ParseError;

use crate::line_index::LineIndex;

const SNIPPET_CHARS: usize = 24;

/// First `ERROR` or missing node in source order, as a `ParseError`.
pub fn first_syntax_error<D: ast_grep_core::Doc>(
    root: &Node<D>,
    index: &LineIndex<'_>,
) -> Option<ParseError> {
    let bad = root.dfs().find(|node| node.is_error() || node.is_missing())?;
    let offset = bad.range().start;
    let position = index.position(offset);

    let message = if bad.is_missing() {
        format!("Missing `{}`", bad.kind())
    } else {
        let text = bad.text();
        let snippet: String = text
            .lines()
            .next()
            .unwrap_or_default()
            .chars()
            .take(SNIPPET_CHARS)
            .collect();
        if snippet.trim().is_empty() {
            "Unexpected token".to_string()
        } else {
            format!("Unexpected token `{}`", snippet.trim())
        }
    };

    Some(ParseError::Syntax {
        message,
        line: position.line,
        column: position.column,
        offset,
    })
}
