//! Extraction error types.

use quasi_core::ParseError;

/// Errors that can occur while extracting embedded templates.
///
/// Finding nothing is not an error: no imports, no matching tags, or no
/// matching invocations all produce an empty result.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// No syntax tree provider was configured.
    #[error("parse is a required capability: no syntax tree provider configured")]
    MissingParser,

    /// The provider rejected the source. Passed through unchanged.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
