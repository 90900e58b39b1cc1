//! Extracted template occurrence.

use serde::{Deserialize, Serialize};

use crate::syntax::{Span, StringLiteral, TemplateElement};

/// Which literal shape a payload came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayloadKind {
    TemplateElement,
    StringLiteral,
}

/// One embedded template found in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplatePayload {
    /// Template text as written between the delimiters.
    pub template: String,
    pub start_line: usize,
    pub start_column: usize,
    pub end_line: usize,
    pub end_column: usize,
    /// Byte offset of the literal node; the ordering key.
    pub start: usize,
    pub end: usize,
    #[serde(rename = "type")]
    pub kind: PayloadKind,
    /// Raw source text of the literal node.
    pub raw: String,
}

impl TemplatePayload {
    /// Payload for a template chunk.
    #[must_use]
    pub fn from_template_element(element: &TemplateElement) -> Self {
        Self::with_span(
            element.raw.clone(),
            &element.span,
            0,
            PayloadKind::TemplateElement,
            element.raw.clone(),
        )
    }

    /// Payload for a string literal argument.
    ///
    /// The literal's span starts at the opening quote, so the start column is
    /// shifted by one to line the template up with its first character.
    #[must_use]
    pub fn from_string_literal(literal: &StringLiteral) -> Self {
        Self::with_span(
            literal.value.clone(),
            &literal.span,
            1,
            PayloadKind::StringLiteral,
            literal.raw.clone(),
        )
    }

    fn with_span(
        template: String,
        span: &Span,
        column_shift: usize,
        kind: PayloadKind,
        raw: String,
    ) -> Self {
        Self {
            template,
            start_line: span.start_pos.line,
            start_column: span.start_pos.column + column_shift,
            end_line: span.end_pos.line,
            end_column: span.end_pos.column,
            start: span.start,
            end: span.end,
            kind,
            raw,
        }
    }
}
