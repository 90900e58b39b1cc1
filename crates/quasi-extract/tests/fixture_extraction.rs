//! End-to-end extraction over real-world component and test files.
//!
//! Each fixture pairs a script file with the template document it should
//! produce. JavaScript fixtures run under both script dialects.

use pretty_assertions::assert_eq;
use quasi_extract::{
    ExtractOptions, Order, TagSourceMap, TagSpecifier, extract_template, template_occurrences,
};
use quasi_parser::{AstGrepProvider, Dialect};

const JS_DIALECTS: &[Dialect] = &[Dialect::JavaScript, Dialect::TypeScript];

fn options(dialect: Dialect) -> ExtractOptions {
    ExtractOptions::new().with_parser(AstGrepProvider::new(dialect))
}

#[test]
fn single_multiline_tagged_template() {
    let component = include_str!("fixtures/single-multiline-component.ts");
    let expected = include_str!("fixtures/single-multiline-template.hbs");

    let output = extract_template(component, &options(Dialect::TypeScript)).expect("should extract");
    assert_eq!(output, expected);
}

#[test]
fn typescript_component_needs_typescript_dialect() {
    let component = include_str!("fixtures/single-multiline-component.ts");
    assert!(extract_template(component, &options(Dialect::JavaScript)).is_err());
}

#[test]
fn additional_tag_sources() {
    let source = include_str!("fixtures/custom-tag-sources-test.js");
    let expected = include_str!("fixtures/custom-tag-sources-template.hbs");

    let extra: TagSourceMap = [
        ("my-custom-hbs-source".to_string(), TagSpecifier::Default),
        (
            "another-custom-hbs-source".to_string(),
            TagSpecifier::Named("handlebars".to_string()),
        ),
    ]
    .into_iter()
    .collect();

    for &dialect in JS_DIALECTS {
        let opts = options(dialect).with_tag_sources(extra.clone());
        let output = extract_template(source, &opts).expect("should extract");
        assert_eq!(output, expected, "dialect: {dialect}");
    }
}

#[test]
fn additional_tag_sources_are_needed_for_custom_modules() {
    let source = include_str!("fixtures/custom-tag-sources-test.js");
    let occurrences =
        template_occurrences(source, &options(Dialect::JavaScript), Order::Source).expect("ok");
    let templates: Vec<_> = occurrences.iter().map(|o| o.template.as_str()).collect();
    assert_eq!(templates, vec!["<HbsTagSourcesComponent />"]);
}

#[test]
fn tagged_and_string_literal_formats() {
    let source = include_str!("fixtures/tagged-and-string-literal-test.js");
    let expected = include_str!("fixtures/tagged-and-string-literal-template.hbs");

    for &dialect in JS_DIALECTS {
        let output = extract_template(source, &options(dialect)).expect("should extract");
        assert_eq!(output, expected, "dialect: {dialect}");
    }
}

#[test]
fn low_level_glimmer_api() {
    let component = include_str!("fixtures/glimmer-api-component.ts");
    let expected = include_str!("fixtures/glimmer-api-template.hbs");

    let output = extract_template(component, &options(Dialect::TypeScript)).expect("should extract");
    assert_eq!(output, expected);
}

#[test]
fn glimmer_api_occurrences_in_source_order() {
    let component = include_str!("fixtures/glimmer-api-component.ts");
    let occurrences =
        template_occurrences(component, &options(Dialect::TypeScript), Order::Source).expect("ok");

    let lines: Vec<_> = occurrences.iter().map(|o| o.start_line).collect();
    assert_eq!(lines, vec![8, 14, 22, 29]);
    assert!(occurrences.iter().all(|o| o.start_column == 7));
    assert!(occurrences.windows(2).all(|pair| pair[0].start < pair[1].start));
}

#[test]
fn occurrence_records_serialize_to_json() {
    let component = include_str!("fixtures/glimmer-api-component.ts");
    let occurrences =
        template_occurrences(component, &options(Dialect::TypeScript), Order::Walk).expect("ok");
    let json = serde_json::to_value(&occurrences).expect("should serialize");

    assert_eq!(json[0]["type"], "StringLiteral");
    assert_eq!(json[0]["startLine"], 8);
    assert_eq!(json[3]["type"], "TemplateElement");
}
