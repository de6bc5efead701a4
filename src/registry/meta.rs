use crate::foundation::error::{PagecraftError, PagecraftResult};
use crate::schema::catalog::SchemaCatalog;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::BTreeMap;

/// Author-facing category of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentCategory {
    /// Large page or section openers.
    Hero,
    /// Editorial copy and structured content.
    Content,
    /// Image- and media-led sections.
    Media,
    /// Call-to-action moments.
    Cta,
    /// Pinned or sticky scroll behaviors.
    Sticky,
}

/// What a component is for and when to reach for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Semantics {
    /// One-line purpose statement.
    pub purpose: String,
    /// Situations the component is meant for.
    #[serde(rename = "whenToUse")]
    pub when_to_use: Vec<String>,
}

/// Descriptive documentation for one prop.
///
/// This is documentation, not schema: the validator never reads it. The
/// [`SchemaCatalog`] carries the machine-checked version of the same facts,
/// and [`MetaRegistry::catalog_parity`] keeps the two aligned per component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropDoc {
    /// Human-readable type label, e.g. `"left"|"center"`.
    #[serde(rename = "type")]
    pub type_label: String,
    /// Whether the prop must be provided, when stated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Default filled in by normalization, when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Free-form constraint note, e.g. `Range 1000-30000ms`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<String>,
}

impl PropDoc {
    /// Attach a constraint note.
    pub fn constraints(mut self, note: impl Into<String>) -> Self {
        self.constraints = Some(note.into());
        self
    }
}

/// Accessibility guidance for a component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct A11y {
    /// Considerations an integrator must honor.
    pub considerations: String,
}

/// Motion preset hints for a component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionHints {
    /// Preset applied when the author does not pick one.
    #[serde(rename = "defaultPreset", default, skip_serializing_if = "Option::is_none")]
    pub default_preset: Option<String>,
    /// Presets the component is allowed to use.
    #[serde(rename = "allowedPresets", default, skip_serializing_if = "Option::is_none")]
    pub allowed_presets: Option<Vec<String>>,
}

/// A worked example of valid props.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaExample {
    /// Short label for the example.
    pub title: String,
    /// Example props, in the wire shape.
    pub props: Value,
}

/// Descriptive metadata for one component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentMeta {
    /// Component id, e.g. `text-block`.
    pub id: String,
    /// Display name, e.g. `Text Block`.
    pub name: String,
    /// Author-facing category.
    pub category: ComponentCategory,
    /// Purpose and usage guidance.
    pub semantics: Semantics,
    /// Per-prop documentation, keyed by prop name.
    pub props: BTreeMap<String, PropDoc>,
    /// Accessibility guidance.
    pub a11y: A11y,
    /// Motion preset hints, if the component animates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motion: Option<MotionHints>,
    /// Worked examples, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<MetaExample>>,
}

/// Enumerable registry of component metadata, in authored order.
#[derive(Debug, Clone, Default)]
pub struct MetaRegistry {
    entries: Vec<ComponentMeta>,
}

impl MetaRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry describing every built-in component.
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                text_block(),
                hero_with_parallax(),
                cta_section(),
                feature_grid(),
                testimonial_slider(),
                horizontal_scroll_gallery(),
            ],
        }
    }

    /// Add or replace the entry with `meta`'s id.
    pub fn register(&mut self, meta: ComponentMeta) {
        if let Some(slot) = self.entries.iter_mut().find(|e| e.id == meta.id) {
            *slot = meta;
        } else {
            self.entries.push(meta);
        }
    }

    /// Metadata for `id`, if registered.
    pub fn get(&self, id: &str) -> Option<&ComponentMeta> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// All entries, in authored order.
    pub fn iter(&self) -> impl Iterator<Item = &ComponentMeta> {
        self.entries.iter()
    }

    /// Registered component ids, in authored order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.id.as_str())
    }

    /// Number of registered components.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize the whole registry to its JSON payload shape.
    pub fn to_value(&self) -> PagecraftResult<Value> {
        serde_json::to_value(&self.entries)
            .map_err(|e| PagecraftError::serde(format!("serialize component metadata: {e}")))
    }

    /// Check that this registry and `catalog` name the same component set.
    ///
    /// A component with a schema but no metadata is invisible to authors; a
    /// component with metadata but no schema silently skips validation.
    /// Both are configuration mistakes.
    pub fn catalog_parity(&self, catalog: &SchemaCatalog) -> PagecraftResult<()> {
        let missing_meta: Vec<&str> = catalog.ids().filter(|id| self.get(id).is_none()).collect();
        let missing_schema: Vec<&str> = self
            .ids()
            .filter(|id| !catalog.contains(id))
            .collect();
        if missing_meta.is_empty() && missing_schema.is_empty() {
            return Ok(());
        }

        let mut parts = Vec::new();
        if !missing_meta.is_empty() {
            parts.push(format!("no metadata for: {}", missing_meta.join(", ")));
        }
        if !missing_schema.is_empty() {
            parts.push(format!("no schema for: {}", missing_schema.join(", ")));
        }
        Err(PagecraftError::validation(format!(
            "metadata registry and schema catalog disagree ({})",
            parts.join("; ")
        )))
    }
}

fn props(entries: Vec<(&str, PropDoc)>) -> BTreeMap<String, PropDoc> {
    entries
        .into_iter()
        .map(|(name, doc)| (name.to_string(), doc))
        .collect()
}

fn prop_optional(label: &str) -> PropDoc {
    PropDoc {
        type_label: label.to_string(),
        required: Some(false),
        default: None,
        constraints: None,
    }
}

fn prop_required(label: &str) -> PropDoc {
    PropDoc {
        type_label: label.to_string(),
        required: Some(true),
        default: None,
        constraints: None,
    }
}

fn prop_defaulted(label: &str, default: Value) -> PropDoc {
    PropDoc {
        type_label: label.to_string(),
        required: None,
        default: Some(default),
        constraints: None,
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn text_block() -> ComponentMeta {
    ComponentMeta {
        id: String::from("text-block"),
        name: String::from("Text Block"),
        category: ComponentCategory::Content,
        semantics: Semantics {
            purpose: String::from(
                "Display short-form editorial copy with optional eyebrow and headline",
            ),
            when_to_use: strings(&["Introductions", "Section breaks", "Short narrative copy"]),
        },
        props: props(vec![
            ("eyebrow", prop_optional("string")),
            ("headline", prop_optional("string")),
            ("body", prop_required("string")),
            (
                "align",
                prop_defaulted("\"left\"|\"center\"", json!("left"))
                    .constraints("Center alignment for short copy only"),
            ),
        ]),
        a11y: A11y {
            considerations: String::from(
                "Ensure text contrast meets WCAG AA against theme background",
            ),
        },
        motion: Some(MotionHints {
            default_preset: Some(String::from("fadeUp")),
            allowed_presets: Some(strings(&["fadeUp", "slideIn", "scaleIn"])),
        }),
        examples: Some(vec![MetaExample {
            title: String::from("Centered intro"),
            props: json!({
                "eyebrow": "Chapter One",
                "headline": "The Beginning",
                "body": "In the digital age, storytelling evolves beyond the page.",
                "align": "center",
            }),
        }]),
    }
}

fn hero_with_parallax() -> ComponentMeta {
    ComponentMeta {
        id: String::from("hero-with-parallax"),
        name: String::from("Hero With Parallax"),
        category: ComponentCategory::Hero,
        semantics: Semantics {
            purpose: String::from("Large editorial hero with parallax media and headline"),
            when_to_use: strings(&["Section openers", "Landing page hero"]),
        },
        props: props(vec![
            ("eyebrow", prop_optional("string")),
            ("headline", prop_required("string")),
            ("subhead", prop_optional("string")),
            ("media", prop_required("string")),
            ("align", prop_defaulted("\"left\"|\"center\"", json!("left"))),
        ]),
        a11y: A11y {
            considerations: String::from(
                "Provide descriptive alt text for media when not purely decorative; ensure headings form a logical outline.",
            ),
        },
        motion: Some(MotionHints {
            default_preset: Some(String::from("parallax")),
            allowed_presets: Some(strings(&["parallax", "fadeUp"])),
        }),
        examples: Some(vec![MetaExample {
            title: String::from("Editorial hero"),
            props: json!({
                "eyebrow": "Investigations",
                "headline": "The Cost of Silence",
                "subhead": "A years-long look at how communities navigate accountability.",
                "media": "https://images.unsplash.com/photo-1500530855697-b586d89ba3ee?q=80&w=1200&auto=format&fit=crop",
                "align": "left",
            }),
        }]),
    }
}

fn cta_section() -> ComponentMeta {
    ComponentMeta {
        id: String::from("cta-section"),
        name: String::from("CTA Section"),
        category: ComponentCategory::Cta,
        semantics: Semantics {
            purpose: String::from("Prominent call-to-action with headline and two buttons"),
            when_to_use: strings(&["Conversion moments", "End of section or page"]),
        },
        props: props(vec![
            ("eyebrow", prop_optional("string")),
            ("headline", prop_required("string")),
            ("body", prop_optional("string")),
            ("primaryLabel", prop_defaulted("string", json!("Get Started"))),
            ("primaryHref", prop_defaulted("string", json!("#"))),
            ("secondaryLabel", prop_defaulted("string", json!("Learn More"))),
            ("secondaryHref", prop_defaulted("string", json!("#"))),
            ("align", prop_defaulted("\"left\"|\"center\"", json!("center"))),
        ]),
        a11y: A11y {
            considerations: String::from(
                "Buttons must be reachable via keyboard and have discernible text.",
            ),
        },
        motion: Some(MotionHints {
            default_preset: Some(String::from("fadeUp")),
            allowed_presets: Some(strings(&["fadeUp", "slideIn"])),
        }),
        examples: Some(vec![MetaExample {
            title: String::from("Centered CTA"),
            props: json!({
                "eyebrow": "Ready to start?",
                "headline": "Compose scrollytelling pages from JSON",
                "body": "Use tokens and audited blocks to ship consistent, on-brand experiences.",
                "primaryLabel": "View Docs",
                "primaryHref": "#",
                "secondaryLabel": "See Templates",
                "secondaryHref": "#",
                "align": "center",
            }),
        }]),
    }
}

fn feature_grid() -> ComponentMeta {
    ComponentMeta {
        id: String::from("feature-grid"),
        name: String::from("Feature Grid"),
        category: ComponentCategory::Content,
        semantics: Semantics {
            purpose: String::from("Summarize key features in a responsive grid"),
            when_to_use: strings(&["Benefits overview", "Capabilities summary"]),
        },
        props: props(vec![
            ("eyebrow", prop_optional("string")),
            ("headline", prop_required("string")),
            ("features", prop_required("Array<Feature>")),
            ("columns", prop_defaulted("2|3|4", json!(3))),
            ("align", prop_defaulted("\"left\"|\"center\"", json!("left"))),
        ]),
        a11y: A11y {
            considerations: String::from(
                "Use real text for headings/descriptions; ensure focus order is logical.",
            ),
        },
        motion: Some(MotionHints {
            default_preset: Some(String::from("fadeUp")),
            allowed_presets: Some(strings(&["fadeUp"])),
        }),
        examples: Some(vec![MetaExample {
            title: String::from("Three-column features"),
            props: json!({
                "eyebrow": "Why this starter",
                "headline": "Audited Motion Blocks",
                "columns": 3,
                "features": [
                    {"title": "Tokens First", "description": "Motion and theme governed by tokens."},
                    {"title": "LLM Ready", "description": "Schemas + metadata for valid generations."},
                    {"title": "A11y Baseline", "description": "Reduced-motion safe defaults."}
                ],
            }),
        }]),
    }
}

fn testimonial_slider() -> ComponentMeta {
    ComponentMeta {
        id: String::from("testimonial-slider"),
        name: String::from("Testimonial Slider"),
        category: ComponentCategory::Content,
        semantics: Semantics {
            purpose: String::from(
                "Display rotating customer testimonials with quotes and attribution",
            ),
            when_to_use: strings(&[
                "Social proof sections",
                "Customer success stories",
                "Trust building",
            ]),
        },
        props: props(vec![
            ("eyebrow", prop_optional("string")),
            ("headline", prop_required("string")),
            ("testimonials", prop_required("Array<Testimonial>")),
            ("align", prop_defaulted("\"left\"|\"center\"", json!("left"))),
            ("autoplay", prop_defaulted("boolean", json!(false))),
            (
                "interval",
                prop_defaulted("number", json!(5000)).constraints("Range 1000-30000ms"),
            ),
        ]),
        a11y: A11y {
            considerations: String::from(
                "Ensure quotes have proper attribution; autoplay respects prefers-reduced-motion; provide keyboard navigation for dots/arrows.",
            ),
        },
        motion: Some(MotionHints {
            default_preset: Some(String::from("slideIn")),
            allowed_presets: Some(strings(&["slideIn", "fadeUp"])),
        }),
        examples: Some(vec![MetaExample {
            title: String::from("Customer testimonials with autoplay"),
            props: json!({
                "eyebrow": "What Our Customers Say",
                "headline": "Trusted by Thousands",
                "align": "center",
                "autoplay": true,
                "interval": 5000,
                "testimonials": [
                    {
                        "quote": "This platform transformed how we handle customer onboarding. The results were immediate and impressive.",
                        "author": "Sarah Chen",
                        "title": "Head of Product, TechCorp",
                        "avatar": "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=80&h=80&fit=crop&crop=face",
                    },
                    {
                        "quote": "The best investment we made this year. Customer satisfaction scores increased by 40%.",
                        "author": "Marcus Johnson",
                        "title": "CEO, StartupXYZ",
                        "avatar": "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=80&h=80&fit=crop&crop=face",
                    }
                ],
            }),
        }]),
    }
}

fn horizontal_scroll_gallery() -> ComponentMeta {
    ComponentMeta {
        id: String::from("horizontal-scroll-gallery"),
        name: String::from("Horizontal Scroll Gallery"),
        category: ComponentCategory::Media,
        semantics: Semantics {
            purpose: String::from(
                "Pin viewport and horizontally scroll through image gallery with parallax",
            ),
            when_to_use: strings(&[
                "Photo essays",
                "Portfolio showcases",
                "Visual narratives",
                "NYT-style immersive stories",
            ]),
        },
        props: props(vec![
            ("eyebrow", prop_optional("string")),
            ("introText", prop_required("string")),
            ("outroText", prop_required("string")),
            (
                "images",
                prop_required("Array<GalleryImage>").constraints("Min 3 images"),
            ),
            (
                "scrollDistance",
                prop_defaulted("number", json!(4000)).constraints("Range 1000-10000px"),
            ),
        ]),
        a11y: A11y {
            considerations: String::from(
                "Respects prefers-reduced-motion (disables parallax); provide alt text for all images; ensure text contrast meets WCAG standards.",
            ),
        },
        motion: Some(MotionHints {
            default_preset: Some(String::from("horizontalScroll")),
            allowed_presets: Some(strings(&["horizontalScroll"])),
        }),
        examples: Some(vec![MetaExample {
            title: String::from("Photo essay with varied image sizes"),
            props: json!({
                "eyebrow": "Visual Story",
                "introText": "Exploring the intersection of design and narrative",
                "outroText": "A journey through composition and motion",
                "scrollDistance": 4000,
                "images": [
                    {"src": "https://picsum.photos/600/750?random=1", "width": "w-[600px]", "height": "h-[750px]", "offset": "top-[5%]", "speed": 0.5},
                    {"src": "https://picsum.photos/550/700?random=2", "width": "w-[550px]", "height": "h-[700px]", "offset": "top-[20%]", "speed": 0.8},
                    {"src": "https://picsum.photos/700/550?random=3", "width": "w-[700px]", "height": "h-[550px]", "offset": "top-[10%]", "speed": 0.6}
                ],
            }),
        }]),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/registry/meta.rs"]
mod tests;
