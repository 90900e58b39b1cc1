//! Tree walk collecting template payloads from tag invocations.
//!
//! Two shapes match, both keyed on a plain identifier in the resolved tag set:
//! - `` tag`...` `` takes the first chunk of the template
//! - `tag('...')` / `` tag(`...`) `` takes every string or template literal
//!   argument; other arguments (an options object, say) are skipped
//!
//! Only the leading chunk of an interpolated template is kept; text after
//! the first `${...}` is dropped.

use quasi_core::{Node, Program, TemplatePayload};

use crate::resolve::ResolvedTagSet;

/// Collect payloads for every tag invocation in `program`, in walk order.
#[must_use]
pub fn collect_templates(program: &Program, tags: &ResolvedTagSet) -> Vec<TemplatePayload> {
    let mut payloads = Vec::new();
    let mut stack: Vec<&Node> = program.body.iter().rev().collect();

    while let Some(node) = stack.pop() {
        match node {
            Node::TaggedTemplate(tagged) if is_tag(&tagged.tag, tags) => {
                tracing::trace!(offset = node.span().start, "tagged template invocation");
                if let Some(chunk) = tagged.quasi.quasis.first() {
                    push(&mut payloads, TemplatePayload::from_template_element(chunk));
                }
            }
            Node::Call(call) if is_tag(&call.callee, tags) => {
                tracing::trace!(offset = node.span().start, "tag call invocation");
                for argument in &call.arguments {
                    match argument {
                        Node::StringLiteral(literal) => {
                            push(&mut payloads, TemplatePayload::from_string_literal(literal));
                        }
                        Node::TemplateLiteral(template) => {
                            if let Some(chunk) = template.quasis.first() {
                                push(&mut payloads, TemplatePayload::from_template_element(chunk));
                            }
                        }
                        _ => {}
                    }
                }
            }
            _ => {}
        }
        stack.extend(node.children().into_iter().rev());
    }

    tracing::debug!(count = payloads.len(), "collected template payloads");
    payloads
}

fn is_tag(node: &Node, tags: &ResolvedTagSet) -> bool {
    node.as_identifier().is_some_and(|name| tags.contains(name))
}

fn push(payloads: &mut Vec<TemplatePayload>, payload: TemplatePayload) {
    tracing::trace!(
        kind = ?payload.kind,
        line = payload.start_line,
        column = payload.start_column,
        "template payload"
    );
    payloads.push(payload);
}
