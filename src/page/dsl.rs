use crate::foundation::error::{PagecraftError, PagecraftResult};
use crate::page::model::PageSpec;
use crate::schema::catalog::SchemaCatalog;
use crate::schema::validate::PageSpecValidator;
use crate::schema::version::PAGESPEC_VERSION;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Builder for one section of a page document.
pub struct SectionBuilder {
    component: String,
    props: Map<String, Value>,
}

impl SectionBuilder {
    /// Start a section for `component`.
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            props: Map::new(),
        }
    }

    /// Set one prop. Setting a name again replaces the earlier value.
    pub fn prop(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    fn to_value(&self) -> Value {
        let mut section = Map::new();
        section.insert(
            String::from("component"),
            Value::String(self.component.clone()),
        );
        section.insert(String::from("props"), Value::Object(self.props.clone()));
        Value::Object(section)
    }
}

/// Builder for a whole page document.
///
/// The builder assembles the raw JSON shape; [`PageSpecBuilder::build`] then
/// runs it through the validator, so documents authored in code get the same
/// defaults and the same rejections as documents arriving off the wire.
pub struct PageSpecBuilder {
    title: String,
    description: Option<String>,
    og_image: Option<String>,
    theme: String,
    sections: Vec<SectionBuilder>,
}

impl PageSpecBuilder {
    /// Start a page with its required meta title and theme name.
    pub fn new(title: impl Into<String>, theme: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            og_image: None,
            theme: theme.into(),
            sections: Vec::new(),
        }
    }

    /// Set the meta description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the Open Graph image path.
    pub fn og_image(mut self, og_image: impl Into<String>) -> Self {
        self.og_image = Some(og_image.into());
        self
    }

    /// Append a section. Sections keep their append order.
    pub fn section(mut self, section: SectionBuilder) -> Self {
        self.sections.push(section);
        self
    }

    /// Assemble the raw document without validating it.
    pub fn to_value(&self) -> Value {
        let mut meta = Map::new();
        meta.insert(String::from("title"), Value::String(self.title.clone()));
        if let Some(description) = &self.description {
            meta.insert(
                String::from("description"),
                Value::String(description.clone()),
            );
        }
        if let Some(og_image) = &self.og_image {
            meta.insert(String::from("ogImage"), Value::String(og_image.clone()));
        }

        let sections: Vec<Value> = self.sections.iter().map(SectionBuilder::to_value).collect();

        let mut page = Map::new();
        page.insert(String::from("meta"), Value::Object(meta));
        page.insert(String::from("theme"), Value::String(self.theme.clone()));
        page.insert(String::from("sections"), Value::Array(sections));

        let mut doc = Map::new();
        doc.insert(String::from("version"), Value::from(PAGESPEC_VERSION));
        doc.insert(String::from("page"), Value::Object(page));
        Value::Object(doc)
    }

    /// Validate against the built-in catalog and build the normalized
    /// document.
    pub fn build(self) -> PagecraftResult<PageSpec> {
        self.build_with(&PageSpecValidator::new(Arc::new(SchemaCatalog::builtin())))
    }

    /// Validate with a caller-supplied validator and build the normalized
    /// document.
    pub fn build_with(self, validator: &PageSpecValidator) -> PagecraftResult<PageSpec> {
        let doc = self.to_value();
        validator
            .validate_value(&doc)
            .map_err(|e| PagecraftError::validation(e.to_string()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/dsl.rs"]
mod tests;
