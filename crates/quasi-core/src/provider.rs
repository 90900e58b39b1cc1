//! The syntax tree provider capability.

use crate::errors::ParseError;
use crate::syntax::Program;

/// Converts source text into a [`Program`].
///
/// Any conforming backend can be injected. Plain functions and closures
/// with the matching signature implement this trait directly.
pub trait SyntaxTreeProvider: Send + Sync {
    /// Parse `source` into a tree.
    ///
    /// # Errors
    /// Returns `ParseError` when the source is invalid for this provider's grammar.
    fn parse(&self, source: &str) -> Result<Program, ParseError>;
}

impl<F> SyntaxTreeProvider for F
where
    F: Fn(&str) -> Result<Program, ParseError> + Send + Sync,
{
    fn parse(&self, source: &str) -> Result<Program, ParseError> {
        self(source)
    }
}
