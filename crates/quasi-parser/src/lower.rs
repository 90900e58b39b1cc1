//! Lowering from the tree-sitter concrete tree to the `quasi-core` node shape.

use std::ops::Range;

use ast_grep_core::Node as SgNode;
use quasi_core::{
    CallExpression, Identifier, ImportDeclaration, ImportSpecifier, Node, OtherNode, Program,
    Span, StringLiteral, TaggedTemplate, TemplateElement, TemplateLiteral,
};

use crate::line_index::LineIndex;

pub struct Lowerer<'s> {
    source: &'s str,
    index: LineIndex<'s>,
}

impl<'s> Lowerer<'s> {
    pub const fn new(source: &'s str, index: LineIndex<'s>) -> Self {
        Self { source, index }
    }

    pub fn program<D: ast_grep_core::Doc>(&self, root: &SgNode<D>) -> Program {
        Program {
            body: self.named_children(root),
        }
    }

    fn node<D: ast_grep_core::Doc>(&self, node: &SgNode<D>) -> Node {
        let kind = node.kind();
        match kind.as_ref() {
            "import_statement" => self
                .import(node)
                .map_or_else(|| self.other(node), Node::Import),
            "call_expression" => self.call(node),
            "identifier" => Node::Identifier(Identifier {
                name: node.text().to_string(),
                span: self.span(node.range()),
            }),
            "string" => Node::StringLiteral(self.string(node)),
            "template_string" => Node::TemplateLiteral(self.template(node)),
            _ => self.other(node),
        }
    }

    fn other<D: ast_grep_core::Doc>(&self, node: &SgNode<D>) -> Node {
        Node::Other(OtherNode {
            kind: node.kind().to_string(),
            children: self.named_children(node),
            span: self.span(node.range()),
        })
    }

    fn named_children<D: ast_grep_core::Doc>(&self, node: &SgNode<D>) -> Vec<Node> {
        node.children()
            .filter(SgNode::is_named)
            .map(|child| self.node(&child))
            .collect()
    }

    // ── imports ────────────────────────────────────────────────────

    fn import<D: ast_grep_core::Doc>(&self, node: &SgNode<D>) -> Option<ImportDeclaration> {
        let source = node.field("source")?;
        let mut specifiers = Vec::new();

        for clause in node.children().filter(|c| c.kind().as_ref() == "import_clause") {
            for part in clause.children() {
                match part.kind().as_ref() {
                    "identifier" => specifiers.push(ImportSpecifier::Default {
                        local: part.text().to_string(),
                    }),
                    "named_imports" => {
                        specifiers.extend(
                            part.children()
                                .filter(|c| c.kind().as_ref() == "import_specifier")
                                .filter_map(|spec| import_specifier(&spec)),
                        );
                    }
                    "namespace_import" => {
                        if let Some(local) =
                            part.children().find(|c| c.kind().as_ref() == "identifier")
                        {
                            specifiers.push(ImportSpecifier::Namespace {
                                local: local.text().to_string(),
                            });
                        }
                    }
                    _ => {}
                }
            }
        }

        Some(ImportDeclaration {
            source: self.quoted_inner(source.range()).to_string(),
            specifiers,
            span: self.span(node.range()),
        })
    }

    // ── calls ──────────────────────────────────────────────────────

    fn call<D: ast_grep_core::Doc>(&self, node: &SgNode<D>) -> Node {
        let (Some(function), Some(arguments)) = (node.field("function"), node.field("arguments"))
        else {
            return self.other(node);
        };
        // `tag?.(...)` is an optional call, not a plain one.
        if node.children().any(|c| c.kind().as_ref() == "optional_chain") {
            return self.other(node);
        }

        let span = self.span(node.range());
        let callee = Box::new(self.node(&unparenthesized(function)));

        if arguments.kind().as_ref() == "template_string" {
            Node::TaggedTemplate(TaggedTemplate {
                tag: callee,
                quasi: self.template(&arguments),
                span,
            })
        } else {
            Node::Call(CallExpression {
                callee,
                arguments: self.named_children(&arguments),
                span,
            })
        }
    }

    // ── literals ───────────────────────────────────────────────────

    fn string<D: ast_grep_core::Doc>(&self, node: &SgNode<D>) -> StringLiteral {
        let range = node.range();
        StringLiteral {
            value: self.quoted_inner(range.clone()).to_string(),
            raw: self.slice(range.clone()).to_string(),
            span: self.span(range),
        }
    }

    /// Splits a template string into chunks at each `${...}` substitution.
    fn template<D: ast_grep_core::Doc>(&self, node: &SgNode<D>) -> TemplateLiteral {
        let range = node.range();
        let mut quasis = Vec::new();
        let mut expressions = Vec::new();
        let mut chunk_start = range.start + 1;

        for child in node.children() {
            if child.kind().as_ref() != "template_substitution" {
                continue;
            }
            let substitution = child.range();
            quasis.push(self.element(chunk_start..substitution.start));
            expressions.extend(self.named_children(&child));
            chunk_start = substitution.end;
        }

        let chunk_end = range.end.saturating_sub(1).max(chunk_start);
        quasis.push(self.element(chunk_start..chunk_end));

        TemplateLiteral {
            quasis,
            expressions,
            span: self.span(range),
        }
    }

    /// Chunk text with `\r\n` and lone `\r` read as `\n`; the span still covers the bytes as written.
    fn element(&self, range: Range<usize>) -> TemplateElement {
        TemplateElement {
            raw: normalize_line_endings(self.slice(range.clone())),
            span: self.span(range),
        }
    }

    // ── helpers ────────────────────────────────────────────────────

    fn span(&self, range: Range<usize>) -> Span {
        Span {
            start: range.start,
            end: range.end,
            start_pos: self.index.position(range.start),
            end_pos: self.index.position(range.end),
        }
    }

    fn slice(&self, range: Range<usize>) -> &'s str {
        self.source.get(range).unwrap_or_default()
    }

    /// Text of a quoted literal without its delimiters.
    fn quoted_inner(&self, range: Range<usize>) -> &'s str {
        if range.len() < 2 {
            return "";
        }
        self.slice(range.start + 1..range.end - 1)
    }
}

/// `(hbs)` and `((hbs))` lower to the inner expression.
fn unparenthesized<D: ast_grep_core::Doc>(node: SgNode<'_, D>) -> SgNode<'_, D> {
    let mut current = node;
    while current.kind().as_ref() == "parenthesized_expression" {
        let Some(inner) = current.children().find(SgNode::is_named) else {
            break;
        };
        current = inner;
    }
    current
}

fn normalize_line_endings(text: &str) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text.to_string()
    }
}

/// `name` or `name as alias`; string export names lose their quotes.
fn import_specifier<D: ast_grep_core::Doc>(spec: &SgNode<D>) -> Option<ImportSpecifier> {
    let name = spec.field("name")?;
    let imported = unquote(&name.text());
    let local = spec
        .field("alias")
        .map_or_else(|| imported.clone(), |alias| alias.text().to_string());
    Some(ImportSpecifier::Named { imported, local })
}

fn unquote(text: &str) -> String {
    text.trim_matches(|c| c == '\'' || c == '"').to_string()
}
