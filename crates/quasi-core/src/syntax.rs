//! Syntax tree node shape shared by all providers.
//!
//! Only the constructs the extractor inspects get dedicated variants.
//! Everything else is kept as an [`OtherNode`] with its children, so a walk
//! over the tree still reaches tagged templates and calls nested anywhere.

/// A line/column location. Lines are 1-based, columns 0-based (in chars).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Source extent of a node: flat byte offsets plus line/column positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub start_pos: Position,
    pub end_pos: Position,
}

/// Root of a parsed file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// Top-level statements in source order.
    pub body: Vec<Node>,
}

impl Program {
    /// Top-level import declarations, in source order.
    pub fn imports(&self) -> impl Iterator<Item = &ImportDeclaration> {
        self.body.iter().filter_map(|node| match node {
            Node::Import(import) => Some(import),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Import(ImportDeclaration),
    TaggedTemplate(TaggedTemplate),
    Call(CallExpression),
    Identifier(Identifier),
    StringLiteral(StringLiteral),
    TemplateLiteral(TemplateLiteral),
    Other(OtherNode),
}

impl Node {
    /// Stable kind name of this node.
    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            Self::Import(_) => "ImportDeclaration",
            Self::TaggedTemplate(_) => "TaggedTemplateExpression",
            Self::Call(_) => "CallExpression",
            Self::Identifier(_) => "Identifier",
            Self::StringLiteral(_) => "StringLiteral",
            Self::TemplateLiteral(_) => "TemplateLiteral",
            Self::Other(other) => &other.kind,
        }
    }

    #[must_use]
    pub const fn span(&self) -> &Span {
        match self {
            Self::Import(n) => &n.span,
            Self::TaggedTemplate(n) => &n.span,
            Self::Call(n) => &n.span,
            Self::Identifier(n) => &n.span,
            Self::StringLiteral(n) => &n.span,
            Self::TemplateLiteral(n) => &n.span,
            Self::Other(n) => &n.span,
        }
    }

    /// Identifier name when this node is a plain identifier.
    #[must_use]
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Self::Identifier(ident) => Some(&ident.name),
            _ => None,
        }
    }

    /// Direct children of this node, in source order.
    #[must_use]
    pub fn children(&self) -> Vec<&Self> {
        match self {
            Self::Import(_) | Self::Identifier(_) | Self::StringLiteral(_) => Vec::new(),
            Self::TaggedTemplate(tagged) => std::iter::once(tagged.tag.as_ref())
                .chain(tagged.quasi.expressions.iter())
                .collect(),
            Self::Call(call) => std::iter::once(call.callee.as_ref())
                .chain(call.arguments.iter())
                .collect(),
            Self::TemplateLiteral(template) => template.expressions.iter().collect(),
            Self::Other(other) => other.children.iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDeclaration {
    /// Module source string, quotes stripped.
    pub source: String,
    pub specifiers: Vec<ImportSpecifier>,
    pub span: Span,
}

impl ImportDeclaration {
    /// Local name of the default binding (`import hbs from '...'`), if any.
    #[must_use]
    pub fn default_binding(&self) -> Option<&str> {
        self.specifiers.iter().find_map(|spec| match spec {
            ImportSpecifier::Default { local } => Some(local.as_str()),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportSpecifier {
    /// `import local from '...'`
    Default { local: String },
    /// `import { imported as local } from '...'`; `local == imported` when not renamed.
    Named { imported: String, local: String },
    /// `import * as local from '...'`
    Namespace { local: String },
}

/// `` tag`...` ``
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedTemplate {
    pub tag: Box<Node>,
    pub quasi: TemplateLiteral,
    pub span: Span,
}

/// `` `chunk ${expr} chunk` ``
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateLiteral {
    /// Literal chunks; always one more than `expressions`.
    pub quasis: Vec<TemplateElement>,
    pub expressions: Vec<Node>,
    pub span: Span,
}

/// One literal chunk of a template literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateElement {
    /// Chunk text exactly as written.
    pub raw: String,
    /// Covers the chunk text only, delimiters excluded.
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpression {
    pub callee: Box<Node>,
    pub arguments: Vec<Node>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    /// Text between the quotes, escapes left as written.
    pub value: String,
    /// Full literal including quotes.
    pub raw: String,
    /// Includes the quotes.
    pub span: Span,
}

/// Any construct without a dedicated variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtherNode {
    /// Provider-specific kind name.
    pub kind: String,
    pub children: Vec<Node>,
    pub span: Span,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str) -> Node {
        Node::Identifier(Identifier {
            name: name.to_string(),
            span: Span::default(),
        })
    }

    #[test]
    fn imports_filters_top_level_declarations() {
        let program = Program {
            body: vec![
                Node::Import(ImportDeclaration {
                    source: "a".to_string(),
                    specifiers: vec![],
                    span: Span::default(),
                }),
                ident("x"),
                Node::Import(ImportDeclaration {
                    source: "b".to_string(),
                    specifiers: vec![],
                    span: Span::default(),
                }),
            ],
        };
        let sources: Vec<_> = program.imports().map(|i| i.source.as_str()).collect();
        assert_eq!(sources, vec!["a", "b"]);
    }

    #[test]
    fn default_binding_skips_named_specifiers() {
        let import = ImportDeclaration {
            source: "m".to_string(),
            specifiers: vec![
                ImportSpecifier::Named {
                    imported: "x".to_string(),
                    local: "x".to_string(),
                },
                ImportSpecifier::Default {
                    local: "hbs".to_string(),
                },
            ],
            span: Span::default(),
        };
        assert_eq!(import.default_binding(), Some("hbs"));
    }

    #[test]
    fn call_children_include_callee_and_arguments() {
        let call = Node::Call(CallExpression {
            callee: Box::new(ident("f")),
            arguments: vec![ident("a"), ident("b")],
            span: Span::default(),
        });
        let names: Vec<_> = call
            .children()
            .into_iter()
            .filter_map(Node::as_identifier)
            .collect();
        assert_eq!(names, vec!["f", "a", "b"]);
        assert_eq!(call.kind(), "CallExpression");
    }
}
