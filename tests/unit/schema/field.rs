use super::*;
use serde_json::json;

fn check(ty: &FieldType, value: &Value) -> Vec<Issue> {
    let mut issues = Vec::new();
    let mut path = vec![PathElem::field("f")];
    ty.check(&mut path, value, &mut issues);
    issues
}

fn messages(issues: &[Issue]) -> Vec<String> {
    issues.iter().map(|i| i.message.clone()).collect()
}

#[test]
fn string_accepts_empty_without_min_len() {
    assert!(check(&FieldType::string(), &json!("")).is_empty());
    assert!(check(&FieldType::string(), &json!("hello")).is_empty());
}

#[test]
fn string_min_len_one_reads_as_not_empty() {
    let ty = FieldType::Str { min_len: Some(1) };
    let issues = check(&ty, &json!(""));
    assert_eq!(messages(&issues), vec!["must not be empty"]);
    assert!(check(&ty, &json!("x")).is_empty());
}

#[test]
fn string_rejects_other_types() {
    let issues = check(&FieldType::string(), &json!(42));
    assert_eq!(messages(&issues), vec!["must be a string"]);
    let issues = check(&FieldType::string(), &Value::Null);
    assert_eq!(messages(&issues), vec!["must be a string"]);
}

#[test]
fn url_requires_absolute_urls() {
    assert!(check(&FieldType::Url, &json!("https://example.com/a.jpg")).is_empty());
    let issues = check(&FieldType::Url, &json!("/relative/path.jpg"));
    assert_eq!(messages(&issues), vec!["must be a valid URL"]);
    let issues = check(&FieldType::Url, &json!(7));
    assert_eq!(messages(&issues), vec!["must be a string"]);
}

#[test]
fn int_bounds_are_inclusive() {
    let ty = FieldType::Int {
        min: Some(1000),
        max: Some(30000),
    };
    assert!(check(&ty, &json!(1000)).is_empty());
    assert!(check(&ty, &json!(30000)).is_empty());
    assert_eq!(
        messages(&check(&ty, &json!(999))),
        vec!["must be between 1000 and 30000"]
    );
    assert_eq!(
        messages(&check(&ty, &json!(30001))),
        vec!["must be between 1000 and 30000"]
    );
}

#[test]
fn int_rejects_floats() {
    let ty = FieldType::Int {
        min: None,
        max: None,
    };
    assert_eq!(messages(&check(&ty, &json!(1.5))), vec!["must be an integer"]);
}

#[test]
fn num_accepts_integers_and_floats() {
    let ty = FieldType::Num {
        min: Some(1000.0),
        max: Some(30000.0),
    };
    assert!(check(&ty, &json!(5000)).is_empty());
    assert!(check(&ty, &json!(2500.5)).is_empty());
    assert_eq!(
        messages(&check(&ty, &json!(500))),
        vec!["must be between 1000 and 30000"]
    );
    assert_eq!(
        messages(&check(&ty, &json!(40000))),
        vec!["must be between 1000 and 30000"]
    );
}

#[test]
fn one_sided_bounds_name_only_their_side() {
    let ty = FieldType::Int {
        min: Some(3),
        max: None,
    };
    assert_eq!(messages(&check(&ty, &json!(2))), vec!["must be at least 3"]);
    let ty = FieldType::Int {
        min: None,
        max: Some(3),
    };
    assert_eq!(messages(&check(&ty, &json!(4))), vec!["must be at most 3"]);
}

#[test]
fn str_enum_lists_allowed_values() {
    let ty = FieldType::str_enum(&["left", "center"]);
    assert!(check(&ty, &json!("left")).is_empty());
    assert_eq!(
        messages(&check(&ty, &json!("right"))),
        vec!["must be one of: left, center"]
    );
    assert_eq!(
        messages(&check(&ty, &json!(1))),
        vec!["must be one of: left, center"]
    );
}

#[test]
fn int_enum_lists_allowed_values() {
    let ty = FieldType::int_enum(&[2, 3, 4]);
    assert!(check(&ty, &json!(3)).is_empty());
    assert_eq!(
        messages(&check(&ty, &json!(5))),
        vec!["must be one of: 2, 3, 4"]
    );
}

#[test]
fn bool_rejects_non_booleans() {
    assert!(check(&FieldType::Bool, &json!(true)).is_empty());
    assert_eq!(
        messages(&check(&FieldType::Bool, &json!("true"))),
        vec!["must be a boolean"]
    );
}

#[test]
fn list_min_items_and_item_schema() {
    let item = ComponentSchema::new()
        .field("title", FieldSchema::required(FieldType::string()))
        .field("description", FieldSchema::required(FieldType::string()));
    let ty = FieldType::List {
        min_items: Some(3),
        item: Some(Box::new(item)),
    };

    let issues = check(&ty, &json!([{"title": "a", "description": "b"}]));
    assert_eq!(messages(&issues), vec!["must have at least 3 items"]);

    let issues = check(
        &ty,
        &json!([
            {"title": "a", "description": "b"},
            {"title": "c"},
            "not-an-object"
        ]),
    );
    let rendered: Vec<String> = issues.iter().map(|i| i.to_string()).collect();
    assert!(rendered.contains(&String::from("f[1].description: is required")));
    assert!(rendered.contains(&String::from("f[2]: must be an object")));
}

#[test]
fn record_checks_nested_fields() {
    let inner = ComponentSchema::new().field("quote", FieldSchema::required(FieldType::string()));
    let ty = FieldType::Record(Box::new(inner));
    let issues = check(&ty, &json!({"author": "x"}));
    let rendered: Vec<String> = issues.iter().map(|i| i.to_string()).collect();
    assert_eq!(rendered, vec!["f.quote: is required"]);
    assert_eq!(messages(&check(&ty, &json!("nope"))), vec!["must be an object"]);
}
