//! Parse failure raised by syntax tree providers.
//!
//! The extraction core never recovers from these: a provider failure is
//! handed back to the caller unchanged.

use thiserror::Error;

/// Errors a `SyntaxTreeProvider` can return.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The source is not valid in the provider's grammar.
    #[error("SyntaxError: {message} ({line}:{column})")]
    Syntax {
        message: String,
        /// 1-based line.
        line: usize,
        /// 0-based column.
        column: usize,
        /// Byte offset into the source.
        offset: usize,
    },

    /// Free-form failure from a custom provider.
    #[error("Parser failed: {0}")]
    Provider(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_error_display_carries_location() {
        let err = ParseError::Syntax {
            message: "Unexpected token `}`".to_string(),
            line: 3,
            column: 7,
            offset: 41,
        };
        assert_eq!(err.to_string(), "SyntaxError: Unexpected token `}` (3:7)");
    }
}
