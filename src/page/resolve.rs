use crate::foundation::error::PagecraftResult;
use crate::page::dsl::{PageSpecBuilder, SectionBuilder};
use crate::page::model::{PageDocument, PageSpec};
use crate::schema::catalog::SchemaCatalog;
use crate::schema::issue::IssueReport;
use crate::schema::validate::PageSpecValidator;
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Capability for loading raw page documents by slug.
pub trait PageSource: Send + Sync {
    /// Load the raw document for `slug`, or `None` when the slug is unknown.
    fn load(&self, slug: &str) -> PagecraftResult<Option<PageDocument>>;
}

/// In-memory page source.
///
/// The built-in variant holds the demo page and answers *every* slug:
/// unknown slugs fall back to the fallback document, so a starter site
/// always has something to render.
pub struct StaticPages {
    pages: BTreeMap<String, Value>,
    fallback: String,
}

impl StaticPages {
    /// Empty source that falls back to `fallback` for unknown slugs.
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            pages: BTreeMap::new(),
            fallback: fallback.into(),
        }
    }

    /// Source holding the built-in `demo` page, which is also the fallback.
    pub fn builtin() -> Self {
        let mut pages = Self::new("demo");
        pages.insert("demo", demo_page());
        pages
    }

    /// Insert a raw document under `slug`, replacing any earlier one.
    pub fn insert(&mut self, slug: impl Into<String>, doc: Value) {
        self.pages.insert(slug.into(), doc);
    }

    /// Known slugs, sorted.
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.pages.keys().map(String::as_str)
    }
}

impl PageSource for StaticPages {
    fn load(&self, slug: &str) -> PagecraftResult<Option<PageDocument>> {
        let doc = self
            .pages
            .get(slug)
            .or_else(|| self.pages.get(&self.fallback));
        Ok(doc.cloned().map(PageDocument::from_value))
    }
}

/// Outcome of resolving one slug.
#[derive(Debug, Clone)]
pub enum PageOutcome {
    /// The document validated; carries the normalized page.
    Resolved(PageSpec),
    /// The source had no document for the slug.
    NotFound {
        /// The slug that was asked for.
        slug: String,
    },
    /// The document failed validation; carries every issue found.
    Rejected(IssueReport),
}

impl PageOutcome {
    /// HTTP-style status code for this outcome.
    pub fn status(&self) -> u16 {
        match self {
            PageOutcome::Resolved(_) => 200,
            PageOutcome::NotFound { .. } => 404,
            PageOutcome::Rejected(_) => 400,
        }
    }

    /// HTTP-style response body for this outcome.
    ///
    /// Resolved pages serialize to the normalized document; rejections to
    /// `{"error": "Invalid PageSpec", "details": …}` with one details entry
    /// per issue path.
    pub fn body(&self) -> PagecraftResult<Value> {
        match self {
            PageOutcome::Resolved(spec) => spec.to_value(),
            PageOutcome::NotFound { slug } => Ok(json!({
                "error": "Page not found",
                "slug": slug,
            })),
            PageOutcome::Rejected(report) => Ok(json!({
                "error": "Invalid PageSpec",
                "details": report.details(),
            })),
        }
    }

    /// The normalized page, when resolved.
    pub fn page(&self) -> Option<&PageSpec> {
        match self {
            PageOutcome::Resolved(spec) => Some(spec),
            _ => None,
        }
    }
}

/// Ties a [`PageSource`] and a [`PageSpecValidator`] together into the
/// slug-lookup boundary an HTTP handler would call.
pub struct PageResolver {
    source: Box<dyn PageSource>,
    validator: PageSpecValidator,
}

impl PageResolver {
    /// Resolver over a caller-supplied source and validator.
    pub fn new(source: Box<dyn PageSource>, validator: PageSpecValidator) -> Self {
        Self { source, validator }
    }

    /// Resolver over the built-in pages and catalog, validating strictly.
    pub fn builtin() -> Self {
        Self::new(
            Box::new(StaticPages::builtin()),
            PageSpecValidator::new(Arc::new(SchemaCatalog::builtin())),
        )
    }

    #[tracing::instrument(skip(self))]
    /// Resolve `slug`: load the raw document, validate, normalize.
    pub fn resolve(&self, slug: &str) -> PagecraftResult<PageOutcome> {
        let Some(doc) = self.source.load(slug)? else {
            return Ok(PageOutcome::NotFound {
                slug: slug.to_owned(),
            });
        };
        Ok(match self.validator.validate(&doc) {
            Ok(spec) => PageOutcome::Resolved(spec),
            Err(report) => PageOutcome::Rejected(report),
        })
    }
}

fn demo_page() -> Value {
    PageSpecBuilder::new("Demo Page", "acme")
        .description("Rendered from a PageSpec JSON")
        .og_image("/og.jpg")
        .section(
            SectionBuilder::new("hero-with-parallax")
                .prop("eyebrow", "Investigations")
                .prop("headline", "The Cost of Silence")
                .prop(
                    "subhead",
                    "A years-long look at how communities navigate accountability.",
                )
                .prop(
                    "media",
                    "https://images.unsplash.com/photo-1500530855697-b586d89ba3ee?q=80&w=1600&auto=format&fit=crop",
                )
                .prop("align", "left"),
        )
        .section(
            SectionBuilder::new("text-block")
                .prop("eyebrow", "Chapter One")
                .prop("headline", "JSON-driven Motion")
                .prop(
                    "body",
                    "This section is rendered from a PageSpec JSON and animated via motion tokens. Swap themes to see colors and typography adapt automatically.",
                )
                .prop("align", "center"),
        )
        .section(
            SectionBuilder::new("feature-grid")
                .prop("eyebrow", "Why this starter")
                .prop("headline", "Audited Motion Blocks")
                .prop("columns", 3)
                .prop(
                    "features",
                    json!([
                        {"title": "Tokens First", "description": "Motion and theme governed by audited tokens for consistency."},
                        {"title": "LLM Ready", "description": "Schemas + metadata ensure valid generations."},
                        {"title": "A11y Baseline", "description": "Reduced-motion safe with sensible defaults."}
                    ]),
                ),
        )
        .section(
            SectionBuilder::new("cta-section")
                .prop("eyebrow", "Ready to start?")
                .prop("headline", "Compose scrollytelling pages from JSON")
                .prop(
                    "body",
                    "Use tokens and audited blocks to ship consistent, on-brand experiences.",
                )
                .prop("primaryLabel", "View Docs")
                .prop("primaryHref", "#")
                .prop("secondaryLabel", "See Templates")
                .prop("secondaryHref", "#")
                .prop("align", "center"),
        )
        .to_value()
}

#[cfg(test)]
#[path = "../../tests/unit/page/resolve.rs"]
mod tests;
