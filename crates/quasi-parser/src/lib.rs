//! # quasi-parser
//!
//! ast-grep-based syntax tree provider for quasi.
//!
//! Parses JavaScript, TypeScript, and TSX with the tree-sitter grammars
//! bundled in `ast-grep-language`, then lowers the concrete tree into the
//! node shape defined by `quasi-core`:
//! - `import_statement` -> `Node::Import`
//! - `` tag`...` `` (a `call_expression` with template arguments) -> `Node::TaggedTemplate`
//! - `call_expression` -> `Node::Call`
//! - `string` / `template_string` -> literal nodes with chunk positions
//!
//! Tree-sitter recovers from syntax errors; this provider does not. The
//! first `ERROR` or missing node fails the parse.
//!
//! Parentheses around a callee or tag are dropped, so `(hbs)('...')` lowers
//! to a call on `hbs`. Template chunk text reads `\r\n` and lone `\r` as
//! `\n`; chunk spans still cover the bytes as written.
//!
//! Known gap: tree-sitter-typescript has no node for a tagged template with
//! type arguments. `` hbs<T>`...` `` parses as nested `binary_expression`s
//! (`hbs < T` compared with the template), so it lowers to no tagged template
//! and yields no payload.

mod diagnostics;
mod line_index;
mod lower;
mod parser;

pub use line_index::LineIndex;
pub use parser::{AstGrepProvider, AstTree, Dialect, detect_dialect, parse_source};
