use super::*;
use serde_json::json;

#[test]
fn built_documents_come_back_normalized() {
    let spec = PageSpecBuilder::new("Launch", "acme")
        .description("A launch page")
        .section(
            SectionBuilder::new("cta-section")
                .prop("headline", "Ship it")
                .prop("align", "left"),
        )
        .build()
        .unwrap();

    assert_eq!(spec.page.meta.title, "Launch");
    assert_eq!(spec.page.meta.description.as_deref(), Some("A launch page"));
    let props = &spec.page.sections[0].props;
    assert_eq!(props["align"], "left");
    assert_eq!(props["primaryLabel"], "Get Started");
    assert_eq!(props["secondaryHref"], "#");
}

#[test]
fn sections_keep_append_order() {
    let spec = PageSpecBuilder::new("T", "acme")
        .section(SectionBuilder::new("text-block").prop("body", "one"))
        .section(SectionBuilder::new("text-block").prop("body", "two"))
        .section(SectionBuilder::new("text-block").prop("body", "three"))
        .build()
        .unwrap();
    let bodies: Vec<&Value> = spec
        .page
        .sections
        .iter()
        .map(|s| &s.props["body"])
        .collect();
    assert_eq!(bodies, vec!["one", "two", "three"]);
}

#[test]
fn invalid_documents_fail_build() {
    let err = PageSpecBuilder::new("T", "acme")
        .section(SectionBuilder::new("text-block"))
        .build()
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("validation error:"));
    assert!(msg.contains("text-block: body is required"));
}

#[test]
fn empty_page_fails_the_non_empty_sections_rule() {
    let err = PageSpecBuilder::new("T", "acme").build().unwrap_err();
    assert!(err.to_string().contains("at least 1 section"));
}

#[test]
fn to_value_is_the_raw_unnormalized_shape() {
    let raw = PageSpecBuilder::new("T", "acme")
        .section(SectionBuilder::new("cta-section").prop("headline", "Go"))
        .to_value();
    assert_eq!(raw["version"], 1);
    // No defaults yet; normalization happens in build().
    assert!(raw["page"]["sections"][0]["props"].get("primaryLabel").is_none());
}

#[test]
fn later_props_replace_earlier_ones() {
    let raw = PageSpecBuilder::new("T", "acme")
        .section(
            SectionBuilder::new("text-block")
                .prop("body", "first")
                .prop("body", "second"),
        )
        .to_value();
    assert_eq!(raw["page"]["sections"][0]["props"]["body"], "second");
}

#[test]
fn build_with_honors_the_given_validator() {
    let validator = PageSpecValidator::with_mode(
        Arc::new(SchemaCatalog::builtin()),
        crate::schema::validate::ValidationMode::Permissive,
    );
    // body is missing, but the permissive validator lets props through.
    let spec = PageSpecBuilder::new("T", "acme")
        .section(SectionBuilder::new("text-block").prop("extra", json!({"k": 1})))
        .build_with(&validator)
        .unwrap();
    assert_eq!(spec.page.sections[0].props["extra"]["k"], 1);
}
