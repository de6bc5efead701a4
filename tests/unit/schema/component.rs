use super::*;
use crate::schema::field::FieldType;
use serde_json::json;

fn cta_like() -> ComponentSchema {
    ComponentSchema::new()
        .field("headline", FieldSchema::required(FieldType::string()))
        .field(
            "primaryLabel",
            FieldSchema::defaulted(FieldType::string(), json!("Get Started")),
        )
        .field(
            "align",
            FieldSchema::defaulted(FieldType::str_enum(&["left", "center"]), json!("center")),
        )
}

fn props(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture must be an object, got {other}"),
    }
}

#[test]
fn validate_fills_defaults_for_absent_fields() {
    let schema = cta_like();
    let normalized = schema.validate(&props(json!({"headline": "Go"}))).unwrap();
    assert_eq!(normalized["headline"], "Go");
    assert_eq!(normalized["primaryLabel"], "Get Started");
    assert_eq!(normalized["align"], "center");
}

#[test]
fn validate_keeps_explicit_values_over_defaults() {
    let schema = cta_like();
    let normalized = schema
        .validate(&props(json!({"headline": "Go", "align": "left"})))
        .unwrap();
    assert_eq!(normalized["align"], "left");
}

#[test]
fn unknown_props_pass_through_open_schemas() {
    let schema = cta_like();
    let normalized = schema
        .validate(&props(json!({"headline": "Go", "experimental": {"x": 1}})))
        .unwrap();
    assert_eq!(normalized["experimental"]["x"], 1);
}

#[test]
fn closed_schema_rejects_unknown_props() {
    let schema = cta_like().closed();
    let issues = schema
        .validate(&props(json!({"headline": "Go", "extra": true})))
        .unwrap_err();
    let rendered: Vec<String> = issues.iter().map(|i| i.to_string()).collect();
    assert_eq!(rendered, vec!["extra: is not a recognized field"]);
}

#[test]
fn all_issues_are_collected_not_just_the_first() {
    let schema = cta_like();
    let issues = schema
        .validate(&props(json!({"align": "right", "primaryLabel": 7})))
        .unwrap_err();
    let rendered: Vec<String> = issues.iter().map(|i| i.to_string()).collect();
    assert_eq!(issues.len(), 3);
    assert!(rendered.contains(&String::from("headline: is required")));
    assert!(rendered.contains(&String::from("primaryLabel: must be a string")));
    assert!(rendered.contains(&String::from("align: must be one of: left, center")));
}

#[test]
fn redefining_a_field_replaces_it() {
    let schema = ComponentSchema::new()
        .field("body", FieldSchema::required(FieldType::string()))
        .field("body", FieldSchema::optional(FieldType::string()));
    assert_eq!(schema.fields().len(), 1);
    assert!(schema.validate(&Map::new()).is_ok());
}

#[test]
fn issues_do_not_mutate_input() {
    let schema = cta_like();
    let input = props(json!({"headline": "Go"}));
    let normalized = schema.validate(&input).unwrap();
    assert!(!input.contains_key("primaryLabel"));
    assert!(normalized.contains_key("primaryLabel"));
}
