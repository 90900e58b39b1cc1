//! # quasi-core
//!
//! Shared types for quasi, the embedded template extractor.
//!
//! This crate provides the contract between the extraction core and any
//! parser backend:
//! - The syntax tree node shape a provider must produce
//! - The `SyntaxTreeProvider` capability and its `ParseError`
//! - Tag source configuration (`TagSourceMap`, `TagSpecifier`)
//! - The extracted `TemplatePayload` record

pub mod errors;
pub mod payload;
pub mod provider;
pub mod syntax;
pub mod tag_sources;

pub use errors::ParseError;
pub use payload::{PayloadKind, TemplatePayload};
pub use provider::SyntaxTreeProvider;
pub use syntax::{
    CallExpression, Identifier, ImportDeclaration, ImportSpecifier, Node, OtherNode, Position,
    Program, Span, StringLiteral, TaggedTemplate, TemplateElement, TemplateLiteral,
};
pub use tag_sources::{TagSourceMap, TagSpecifier};
