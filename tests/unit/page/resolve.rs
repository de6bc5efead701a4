use super::*;

#[test]
fn demo_page_resolves_and_normalizes() {
    let resolver = PageResolver::builtin();
    let outcome = resolver.resolve("demo").unwrap();
    assert_eq!(outcome.status(), 200);

    let spec = outcome.page().unwrap();
    assert_eq!(spec.page.meta.title, "Demo Page");
    assert_eq!(spec.page.sections.len(), 4);

    // The demo authors no align for feature-grid; normalization adds it.
    let grid = &spec.page.sections[2];
    assert_eq!(grid.component, "feature-grid");
    assert_eq!(grid.props["align"], "left");
}

#[test]
fn unknown_slugs_fall_back_to_demo() {
    let resolver = PageResolver::builtin();
    let outcome = resolver.resolve("no-such-page").unwrap();
    let spec = outcome.page().unwrap();
    assert_eq!(spec.page.meta.title, "Demo Page");
}

#[test]
fn empty_source_yields_not_found() {
    let resolver = PageResolver::new(
        Box::new(StaticPages::new("demo")),
        PageSpecValidator::new(Arc::new(SchemaCatalog::builtin())),
    );
    let outcome = resolver.resolve("demo").unwrap();
    assert_eq!(outcome.status(), 404);
    let body = outcome.body().unwrap();
    assert_eq!(body["error"], "Page not found");
    assert_eq!(body["slug"], "demo");
}

#[test]
fn invalid_documents_reject_with_envelope_body() {
    let mut pages = StaticPages::new("broken");
    pages.insert(
        "broken",
        json!({
            "version": 1,
            "page": {
                "meta": {"title": "Broken"},
                "theme": "acme",
                "sections": [{"component": "text-block", "props": {}}]
            }
        }),
    );
    let resolver = PageResolver::new(
        Box::new(pages),
        PageSpecValidator::new(Arc::new(SchemaCatalog::builtin())),
    );

    let outcome = resolver.resolve("broken").unwrap();
    assert_eq!(outcome.status(), 400);
    assert!(outcome.page().is_none());

    let body = outcome.body().unwrap();
    assert_eq!(body["error"], "Invalid PageSpec");
    let messages = body["details"]["page.sections[0]"].as_array().unwrap();
    assert_eq!(messages[0], "text-block: body is required");
}

#[test]
fn resolved_body_is_the_normalized_document() {
    let resolver = PageResolver::builtin();
    let outcome = resolver.resolve("demo").unwrap();
    let body = outcome.body().unwrap();
    assert_eq!(body["version"], 1);
    assert_eq!(
        body["page"]["sections"][3]["props"]["primaryLabel"],
        "View Docs"
    );
}

#[test]
fn inserted_pages_win_over_fallback() {
    let mut pages = StaticPages::builtin();
    pages.insert(
        "launch",
        PageSpecBuilder::new("Launch", "beta")
            .section(SectionBuilder::new("text-block").prop("body", "b"))
            .to_value(),
    );
    assert_eq!(pages.slugs().collect::<Vec<_>>(), vec!["demo", "launch"]);

    let resolver = PageResolver::new(
        Box::new(pages),
        PageSpecValidator::new(Arc::new(SchemaCatalog::builtin())),
    );
    let outcome = resolver.resolve("launch").unwrap();
    assert_eq!(outcome.page().unwrap().page.meta.title, "Launch");
}
