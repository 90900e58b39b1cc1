//! ast-grep wrapper, dialect detection from file extensions, and the provider.

use std::fmt;
use std::str::FromStr;

use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::SupportLang;
use quasi_core::{ParseError, Program, SyntaxTreeProvider};

use crate::diagnostics;
use crate::line_index::LineIndex;
use crate::lower::Lowerer;

/// The concrete AST tree type returned by `parse_source`.
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// Script grammar used to parse a file.
///
/// TypeScript-only syntax parsed as JavaScript fails, the same way a
/// missing parser plugin would.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Dialect {
    JavaScript,
    #[default]
    TypeScript,
    Tsx,
}

impl Dialect {
    #[must_use]
    pub const fn support_lang(self) -> SupportLang {
        match self {
            Self::JavaScript => SupportLang::JavaScript,
            Self::TypeScript => SupportLang::TypeScript,
            Self::Tsx => SupportLang::Tsx,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Tsx => "tsx",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "js" | "javascript" => Ok(Self::JavaScript),
            "ts" | "typescript" => Ok(Self::TypeScript),
            "tsx" => Ok(Self::Tsx),
            other => Err(format!(
                "unknown dialect '{other}' (expected javascript, typescript, or tsx)"
            )),
        }
    }
}

/// Detect the script dialect from a file path extension.
///
/// Returns `None` for unsupported or unrecognized extensions.
#[must_use]
pub fn detect_dialect(file_path: &str) -> Option<Dialect> {
    let ext = file_path.rsplit('.').next()?;
    match ext {
        "js" | "mjs" | "cjs" | "jsx" => Some(Dialect::JavaScript),
        "ts" | "mts" | "cts" => Some(Dialect::TypeScript),
        "tsx" => Some(Dialect::Tsx),
        _ => None,
    }
}

/// Parse source code into an ast-grep tree for the given language.
#[must_use]
pub fn parse_source(source: &str, lang: SupportLang) -> AstTree {
    use ast_grep_language::LanguageExt;
    lang.ast_grep(source)
}

/// Syntax tree provider backed by ast-grep's tree-sitter grammars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AstGrepProvider {
    dialect: Dialect,
}

impl AstGrepProvider {
    #[must_use]
    pub const fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }
}

impl SyntaxTreeProvider for AstGrepProvider {
    fn parse(&self, source: &str) -> Result<Program, ParseError> {
        tracing::debug!(dialect = %self.dialect, bytes = source.len(), "parsing source");

        let tree = parse_source(source, self.dialect.support_lang());
        let root = tree.root();
        let index = LineIndex::new(source);

        if let Some(error) = diagnostics::first_syntax_error(&root, &index) {
            tracing::debug!(dialect = %self.dialect, %error, "source rejected");
            return Err(error);
        }

        Ok(Lowerer::new(source, index).program(&root))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn detect_script_variants() {
        assert_eq!(detect_dialect("component.ts"), Some(Dialect::TypeScript));
        assert_eq!(detect_dialect("component.mts"), Some(Dialect::TypeScript));
        assert_eq!(detect_dialect("app.tsx"), Some(Dialect::Tsx));
        assert_eq!(detect_dialect("util.js"), Some(Dialect::JavaScript));
        assert_eq!(detect_dialect("util.mjs"), Some(Dialect::JavaScript));
        assert_eq!(detect_dialect("util.cjs"), Some(Dialect::JavaScript));
        assert_eq!(detect_dialect("view.jsx"), Some(Dialect::JavaScript));
    }

    #[test]
    fn detect_nested_path() {
        assert_eq!(
            detect_dialect("tests/integration/components/foo-test.js"),
            Some(Dialect::JavaScript)
        );
    }

    #[test]
    fn detect_unknown_returns_none() {
        assert_eq!(detect_dialect("template.hbs"), None);
        assert_eq!(detect_dialect("README"), None);
    }

    #[test]
    fn dialect_from_str_accepts_short_and_long_names() {
        assert_eq!("js".parse::<Dialect>(), Ok(Dialect::JavaScript));
        assert_eq!("TypeScript".parse::<Dialect>(), Ok(Dialect::TypeScript));
        assert_eq!("tsx".parse::<Dialect>(), Ok(Dialect::Tsx));
        assert!("flow".parse::<Dialect>().is_err());
    }

    #[test]
    fn parse_source_produces_program_root() {
        let tree = parse_source("const a = 1;", SupportLang::TypeScript);
        assert_eq!(tree.root().kind().as_ref(), "program");
    }

    #[test]
    fn provider_parses_valid_source() {
        let program = AstGrepProvider::new(Dialect::JavaScript)
            .parse("import hbs from 'x';\nhbs`a`;\n")
            .expect("should parse");
        assert_eq!(program.body.len(), 2);
        assert_eq!(program.imports().count(), 1);
    }

    #[test]
    fn provider_rejects_invalid_source() {
        let result = AstGrepProvider::new(Dialect::JavaScript).parse("const = ;");
        assert!(matches!(result, Err(ParseError::Syntax { line: 1, .. })));
    }

    #[test]
    fn typescript_annotations_need_typescript_dialect() {
        let source = "class A {\n  type: string = 'text';\n}\n";
        assert!(AstGrepProvider::new(Dialect::TypeScript).parse(source).is_ok());
        assert!(AstGrepProvider::new(Dialect::JavaScript).parse(source).is_err());
    }
}
