//! Per-call extraction options.

use std::fmt;
use std::sync::Arc;

use quasi_core::{SyntaxTreeProvider, TagSourceMap, TagSpecifier};

use crate::error::ExtractError;

/// Tag source overrides plus the syntax tree provider.
///
/// The provider is required; extraction fails with
/// [`ExtractError::MissingParser`] before parsing when it is absent.
#[derive(Clone)]
pub struct ExtractOptions {
    tag_sources: TagSourceMap,
    builtin_tag_sources: bool,
    parser: Option<Arc<dyn SyntaxTreeProvider>>,
}

impl ExtractOptions {
    /// Options with the built-in tag sources and no provider.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tag_sources: TagSourceMap::new(),
            builtin_tag_sources: true,
            parser: None,
        }
    }

    #[must_use]
    pub fn with_parser(self, parser: impl SyntaxTreeProvider + 'static) -> Self {
        self.with_shared_parser(Arc::new(parser))
    }

    #[must_use]
    pub fn with_shared_parser(mut self, parser: Arc<dyn SyntaxTreeProvider>) -> Self {
        self.parser = Some(parser);
        self
    }

    /// Adds tag source overrides; later entries win on key collision.
    #[must_use]
    pub fn with_tag_sources(mut self, overrides: TagSourceMap) -> Self {
        self.tag_sources = self.tag_sources.merged_with(&overrides);
        self
    }

    #[must_use]
    pub fn with_tag_source(mut self, source: impl Into<String>, spec: TagSpecifier) -> Self {
        self.tag_sources.insert(source, spec);
        self
    }

    /// Use only the configured overrides, without the built-in map underneath.
    #[must_use]
    pub const fn without_builtin_tag_sources(mut self) -> Self {
        self.builtin_tag_sources = false;
        self
    }

    /// The tag source map extraction runs with.
    #[must_use]
    pub fn effective_tag_sources(&self) -> TagSourceMap {
        if self.builtin_tag_sources {
            TagSourceMap::builtin().merged_with(&self.tag_sources)
        } else {
            self.tag_sources.clone()
        }
    }

    /// The configured provider.
    ///
    /// # Errors
    /// Returns `ExtractError::MissingParser` when none was set.
    pub fn parser(&self) -> Result<&dyn SyntaxTreeProvider, ExtractError> {
        self.parser.as_deref().ok_or(ExtractError::MissingParser)
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ExtractOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractOptions")
            .field("tag_sources", &self.tag_sources)
            .field("builtin_tag_sources", &self.builtin_tag_sources)
            .field("parser", &self.parser.as_ref().map(|_| "<provider>"))
            .finish()
    }
}
