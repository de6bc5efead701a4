use crate::schema::component::{ComponentSchema, PropSchema};
use crate::schema::field::{FieldSchema, FieldType};
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Registry of prop schemas keyed by component id.
///
/// The catalog is open: callers register their own schemas alongside the
/// built-ins, and re-registering an id replaces the earlier entry. Lookup is
/// exact and case-sensitive; ids absent from the catalog are not an error at
/// this level (the section validator passes such sections through).
pub struct SchemaCatalog {
    entries: BTreeMap<String, Arc<dyn PropSchema>>,
}

impl SchemaCatalog {
    /// Empty catalog.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Catalog with every built-in component schema registered.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.register("text-block", Arc::new(text_block()));
        catalog.register("hero-with-parallax", Arc::new(hero_with_parallax()));
        catalog.register("cta-section", Arc::new(cta_section()));
        catalog.register("feature-grid", Arc::new(feature_grid()));
        catalog.register("testimonial-slider", Arc::new(testimonial_slider()));
        catalog.register(
            "horizontal-scroll-gallery",
            Arc::new(horizontal_scroll_gallery()),
        );
        catalog
    }

    /// Register `schema` under `id`, replacing any earlier entry.
    pub fn register(&mut self, id: impl Into<String>, schema: Arc<dyn PropSchema>) {
        self.entries.insert(id.into(), schema);
    }

    /// Look up the schema registered under `id`, if any.
    pub fn lookup(&self, id: &str) -> Option<&Arc<dyn PropSchema>> {
        self.entries.get(id)
    }

    /// Whether `id` has a registered schema.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Registered component ids, sorted.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of registered schemas.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no schemas.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SchemaCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn align_field(default: &str) -> FieldSchema {
    FieldSchema::defaulted(FieldType::str_enum(&["left", "center"]), json!(default))
}

fn text_block() -> ComponentSchema {
    ComponentSchema::new()
        .field("eyebrow", FieldSchema::optional(FieldType::string()))
        .field("headline", FieldSchema::optional(FieldType::string()))
        .field("body", FieldSchema::required(FieldType::string()))
        .field("align", align_field("left"))
}

fn hero_with_parallax() -> ComponentSchema {
    ComponentSchema::new()
        .field("eyebrow", FieldSchema::optional(FieldType::string()))
        .field("headline", FieldSchema::required(FieldType::string()))
        .field("subhead", FieldSchema::optional(FieldType::string()))
        .field("media", FieldSchema::required(FieldType::Url))
        .field("align", align_field("left"))
}

fn cta_section() -> ComponentSchema {
    ComponentSchema::new()
        .field("eyebrow", FieldSchema::optional(FieldType::string()))
        .field("headline", FieldSchema::required(FieldType::string()))
        .field("body", FieldSchema::optional(FieldType::string()))
        .field(
            "primaryLabel",
            FieldSchema::defaulted(FieldType::string(), json!("Get Started")),
        )
        .field(
            "primaryHref",
            FieldSchema::defaulted(FieldType::string(), json!("#")),
        )
        .field(
            "secondaryLabel",
            FieldSchema::defaulted(FieldType::string(), json!("Learn More")),
        )
        .field(
            "secondaryHref",
            FieldSchema::defaulted(FieldType::string(), json!("#")),
        )
        .field("align", align_field("center"))
}

fn feature_item() -> ComponentSchema {
    ComponentSchema::new()
        .field("title", FieldSchema::required(FieldType::string()))
        .field("description", FieldSchema::required(FieldType::string()))
}

fn feature_grid() -> ComponentSchema {
    ComponentSchema::new()
        .field("eyebrow", FieldSchema::optional(FieldType::string()))
        .field("headline", FieldSchema::required(FieldType::string()))
        .field(
            "features",
            FieldSchema::required(FieldType::List {
                min_items: None,
                item: Some(Box::new(feature_item())),
            }),
        )
        .field(
            "columns",
            FieldSchema::defaulted(FieldType::int_enum(&[2, 3, 4]), json!(3)),
        )
        .field("align", align_field("left"))
}

fn testimonial_item() -> ComponentSchema {
    ComponentSchema::new()
        .field("quote", FieldSchema::required(FieldType::string()))
        .field("author", FieldSchema::required(FieldType::string()))
        .field("title", FieldSchema::optional(FieldType::string()))
        .field("avatar", FieldSchema::optional(FieldType::string()))
}

fn testimonial_slider() -> ComponentSchema {
    ComponentSchema::new()
        .field("eyebrow", FieldSchema::optional(FieldType::string()))
        .field("headline", FieldSchema::required(FieldType::string()))
        .field(
            "testimonials",
            FieldSchema::required(FieldType::List {
                min_items: None,
                item: Some(Box::new(testimonial_item())),
            }),
        )
        .field("align", align_field("left"))
        .field("autoplay", FieldSchema::defaulted(FieldType::Bool, json!(false)))
        .field(
            "interval",
            FieldSchema::defaulted(
                FieldType::Num {
                    min: Some(1000.0),
                    max: Some(30000.0),
                },
                json!(5000),
            ),
        )
}

fn gallery_image() -> ComponentSchema {
    ComponentSchema::new()
        .field("src", FieldSchema::required(FieldType::string()))
        .field("width", FieldSchema::optional(FieldType::string()))
        .field("height", FieldSchema::optional(FieldType::string()))
        .field("offset", FieldSchema::optional(FieldType::string()))
        .field(
            "speed",
            FieldSchema::optional(FieldType::Num {
                min: None,
                max: None,
            }),
        )
}

fn horizontal_scroll_gallery() -> ComponentSchema {
    ComponentSchema::new()
        .field("eyebrow", FieldSchema::optional(FieldType::string()))
        .field("introText", FieldSchema::required(FieldType::string()))
        .field("outroText", FieldSchema::required(FieldType::string()))
        .field(
            "images",
            FieldSchema::required(FieldType::List {
                min_items: Some(3),
                item: Some(Box::new(gallery_image())),
            }),
        )
        .field(
            "scrollDistance",
            FieldSchema::defaulted(
                FieldType::Num {
                    min: Some(1000.0),
                    max: Some(10000.0),
                },
                json!(4000),
            ),
        )
}

#[cfg(test)]
#[path = "../../tests/unit/schema/catalog.rs"]
mod tests;
