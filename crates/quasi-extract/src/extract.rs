//! Public extraction operations.

use quasi_core::TemplatePayload;

use crate::collect::collect_templates;
use crate::error::ExtractError;
use crate::options::ExtractOptions;
use crate::reconstruct::reconstruct;
use crate::resolve::resolve_tags;
use crate::sort::{Order, sort_by_position};

/// Extract the embedded templates of `source` as one template document.
///
/// Returns an empty string when the source has no embedded templates.
///
/// # Errors
/// Returns `ExtractError::MissingParser` when no provider is configured, or
/// the provider's `ParseError` when the source does not parse.
pub fn extract_template(source: &str, options: &ExtractOptions) -> Result<String, ExtractError> {
    let payloads = template_occurrences(source, options, Order::Source)?;
    if payloads.is_empty() {
        return Ok(String::new());
    }
    Ok(reconstruct(&payloads))
}

/// List the embedded template occurrences of `source`.
///
/// # Errors
/// Returns `ExtractError::MissingParser` when no provider is configured, or
/// the provider's `ParseError` when the source does not parse.
pub fn template_occurrences(
    source: &str,
    options: &ExtractOptions,
    order: Order,
) -> Result<Vec<TemplatePayload>, ExtractError> {
    let parser = options.parser()?;
    let tag_sources = options.effective_tag_sources();
    let program = parser.parse(source)?;

    let Some(tags) = resolve_tags(&program, &tag_sources) else {
        return Ok(Vec::new());
    };

    let payloads = collect_templates(&program, &tags);
    Ok(match order {
        Order::Walk => payloads,
        Order::Source => sort_by_position(payloads),
    })
}
