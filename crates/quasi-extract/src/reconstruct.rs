//! Stitches payloads into one template document that mirrors their layout.

use quasi_core::TemplatePayload;

use crate::sort::sort_by_position;

/// Build the template document for `payloads`.
///
/// Each payload is placed on its original start line by inserting blank
/// lines, and indented to its start column unless the payload itself opens
/// with a newline. Trailing indentation after a payload's final newline is
/// dropped so multi-line templates do not leave whitespace-only lines.
#[must_use]
pub fn reconstruct(payloads: &[TemplatePayload]) -> String {
    let sorted = sort_by_position(payloads.to_vec());
    let mut output = String::new();
    let mut last_parsed_line = 1;

    for payload in &sorted {
        if payload.start_line > last_parsed_line {
            output.push_str(&"\n".repeat(payload.start_line - last_parsed_line));
        }
        if payload.start_column > 0 && !payload.template.starts_with('\n') {
            output.push_str(&" ".repeat(payload.start_column));
        }
        output.push_str(trim_trailing_indent(&payload.template));
        last_parsed_line = payload.end_line;
    }

    output
}

/// `"...\n    "` -> `"...\n"`; anything else is returned unchanged.
fn trim_trailing_indent(template: &str) -> &str {
    let trimmed = template.trim_end_matches([' ', '\t']);
    if trimmed.ends_with('\n') {
        trimmed
    } else {
        template
    }
}
