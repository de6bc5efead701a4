use crate::foundation::error::{PagecraftError, PagecraftResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Root of a validated, normalized page document.
///
/// Values of this type only exist on the far side of
/// [`PageSpecValidator`](crate::PageSpecValidator): every declared default
/// has been filled in and every invariant holds. Serializing one yields the
/// wire shape back, so validation is idempotent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSpec {
    /// Document format version; always
    /// [`PAGESPEC_VERSION`](crate::PAGESPEC_VERSION) once validated.
    pub version: u64,
    /// The page itself.
    pub page: PageBody,
}

impl PageSpec {
    /// Serialize back to the JSON wire shape.
    pub fn to_value(&self) -> PagecraftResult<Value> {
        serde_json::to_value(self)
            .map_err(|e| PagecraftError::serde(format!("serialize page spec: {e}")))
    }
}

/// Meta block, theme name and ordered section list of one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageBody {
    /// Head-level metadata.
    pub meta: PageMeta,
    /// Theme name; resolved against a [`ThemeStore`](crate::ThemeStore)
    /// later, never checked for existence during validation.
    pub theme: String,
    /// Sections in authored order. Never empty.
    pub sections: Vec<SectionSpec>,
}

/// Head-level metadata for a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Document title.
    pub title: String,
    /// Optional meta description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional Open Graph image path.
    #[serde(rename = "ogImage", default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
}

/// One component invocation: which component, with which props.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSpec {
    /// Component id, matched against the
    /// [`SchemaCatalog`](crate::SchemaCatalog) during validation.
    pub component: String,
    /// Free-form prop bag. Absent on the wire means empty.
    #[serde(default)]
    pub props: Map<String, Value>,
}

/// Boundary object holding one raw, not-yet-validated page document.
///
/// Documents stay untyped [`Value`]s until validation so that every problem
/// in them can be reported at once; deserializing straight into [`PageSpec`]
/// would stop at the first.
#[derive(Debug, Clone)]
pub struct PageDocument {
    raw: Value,
}

impl PageDocument {
    /// Wrap an already-parsed JSON value.
    pub fn from_value(raw: Value) -> Self {
        Self { raw }
    }

    /// Parse a page document from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> PagecraftResult<Self> {
        let raw: Value = serde_json::from_reader(r)
            .map_err(|e| PagecraftError::serde(format!("parse page document JSON: {e}")))?;
        Ok(Self { raw })
    }

    /// Parse a page document from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> PagecraftResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PagecraftError::source(format!("open page document '{}': {e}", path.display()))
        })?;
        let r = BufReader::new(f);
        Self::from_reader(r)
    }

    /// The raw document.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Unwrap into the raw document.
    pub fn into_value(self) -> Value {
        self.raw
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/model.rs"]
mod tests;
