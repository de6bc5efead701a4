use super::*;
use serde_json::json;

fn demo_doc() -> Value {
    json!({
        "version": 1,
        "page": {
            "meta": {
                "title": "Demo Page",
                "description": "Rendered from a PageSpec JSON",
                "ogImage": "/og.jpg"
            },
            "theme": "acme",
            "sections": [
                {"component": "text-block", "props": {"body": "hello", "align": "center"}}
            ]
        }
    })
}

#[test]
fn deserializes_wire_shape() {
    let spec: PageSpec = serde_json::from_value(demo_doc()).unwrap();
    assert_eq!(spec.version, 1);
    assert_eq!(spec.page.meta.title, "Demo Page");
    assert_eq!(spec.page.meta.og_image.as_deref(), Some("/og.jpg"));
    assert_eq!(spec.page.theme, "acme");
    assert_eq!(spec.page.sections.len(), 1);
    assert_eq!(spec.page.sections[0].component, "text-block");
    assert_eq!(spec.page.sections[0].props["align"], "center");
}

#[test]
fn serializes_og_image_under_wire_name() {
    let spec: PageSpec = serde_json::from_value(demo_doc()).unwrap();
    let v = spec.to_value().unwrap();
    assert_eq!(v["page"]["meta"]["ogImage"], "/og.jpg");
    assert!(v["page"]["meta"].get("og_image").is_none());
}

#[test]
fn absent_optionals_stay_absent_on_the_wire() {
    let spec: PageSpec = serde_json::from_value(json!({
        "version": 1,
        "page": {
            "meta": {"title": "T"},
            "theme": "acme",
            "sections": [{"component": "x"}]
        }
    }))
    .unwrap();
    assert_eq!(spec.page.meta.description, None);

    let v = spec.to_value().unwrap();
    let meta = v["page"]["meta"].as_object().unwrap();
    assert!(!meta.contains_key("description"));
    assert!(!meta.contains_key("ogImage"));
}

#[test]
fn absent_props_deserialize_to_empty_map() {
    let spec: PageSpec = serde_json::from_value(json!({
        "version": 1,
        "page": {
            "meta": {"title": "T"},
            "theme": "acme",
            "sections": [{"component": "x"}]
        }
    }))
    .unwrap();
    assert!(spec.page.sections[0].props.is_empty());

    // And they serialize back as an explicit empty object.
    let v = spec.to_value().unwrap();
    assert!(v["page"]["sections"][0]["props"].as_object().unwrap().is_empty());
}

#[test]
fn document_wraps_raw_values() {
    let doc = PageDocument::from_value(demo_doc());
    assert_eq!(doc.raw()["version"], 1);
    let v = doc.into_value();
    assert_eq!(v["page"]["theme"], "acme");
}

#[test]
fn document_from_reader_reports_parse_errors() {
    let err = PageDocument::from_reader("not json".as_bytes()).unwrap_err();
    assert!(err.to_string().contains("parse page document JSON"));
}
