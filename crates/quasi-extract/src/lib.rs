//! # quasi-extract
//!
//! Finds embedded template snippets in script source and rebuilds them into
//! one template document that keeps their original line/column layout.
//!
//! Pipeline:
//! 1. Parse through the injected [`SyntaxTreeProvider`](quasi_core::SyntaxTreeProvider)
//! 2. [`resolve_tags`]: local names bound to template tags by top-level imports
//! 3. [`collect_templates`]: tagged templates and tag calls with literal arguments
//! 4. [`sort_by_position`]: ascending source offset, stable
//! 5. [`reconstruct`]: stitch payloads together with vertical gaps and indentation
//!
//! # Usage
//!
//! ```ignore
//! use quasi_extract::{ExtractOptions, extract_template};
//! use quasi_parser::{AstGrepProvider, Dialect};
//!
//! let options = ExtractOptions::new().with_parser(AstGrepProvider::new(Dialect::TypeScript));
//! let hbs = extract_template(source, &options)?;
//! ```

mod collect;
mod error;
mod extract;
mod options;
mod reconstruct;
mod resolve;
mod sort;

pub use collect::collect_templates;
pub use error::ExtractError;
pub use extract::{extract_template, template_occurrences};
pub use options::ExtractOptions;
pub use reconstruct::reconstruct;
pub use resolve::{ResolvedTagSet, resolve_tags};
pub use sort::{Order, sort_by_position};

pub use quasi_core::{TagSourceMap, TagSpecifier, TemplatePayload};
