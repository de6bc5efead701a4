//! Pagecraft validates and normalizes declarative page documents.
//!
//! A `PageSpec` describes a page entirely as data: document metadata, a theme
//! name, and an ordered list of component invocations, each carrying a
//! free-form props bag. The validation rules for a section's props depend on
//! the `component` id inside the same document, so validation is a
//! data-driven dispatch against a schema catalog rather than a check of one
//! static shape.
//!
//! The public API is document-oriented:
//!
//! - Author a document with [`PageSpecBuilder`] or load one as a [`PageDocument`]
//! - Validate and normalize it with a [`PageSpecValidator`] over a [`SchemaCatalog`]
//! - Serve documents by slug through a [`PageResolver`]
//! - Describe components for tooling with the [`MetaRegistry`]
//! - Resolve themes and motion via [`ThemeStore`] and [`MotionContext`]
//!
//! The validation core is pure: no IO, no shared mutable state, and a
//! document is either fully normalized or rejected with every field error
//! collected into one [`IssueReport`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod page;
mod registry;
mod schema;
mod theme;

pub use crate::foundation::error::{PagecraftError, PagecraftResult};
pub use crate::page::dsl::{PageSpecBuilder, SectionBuilder};
pub use crate::page::model::{PageBody, PageDocument, PageMeta, PageSpec, SectionSpec};
pub use crate::page::resolve::{PageOutcome, PageResolver, PageSource, StaticPages};
pub use crate::registry::meta::{
    A11y, ComponentCategory, ComponentMeta, MetaExample, MetaRegistry, MotionHints, PropDoc,
    Semantics,
};
pub use crate::schema::catalog::SchemaCatalog;
pub use crate::schema::component::{ComponentSchema, PropSchema};
pub use crate::schema::field::{FieldSchema, FieldType};
pub use crate::schema::issue::{Issue, IssueReport, PathElem};
pub use crate::schema::validate::{PageSpecValidator, ValidationMode};
pub use crate::schema::version::PAGESPEC_VERSION;
pub use crate::theme::model::{BrandTokens, GridTokens, MotionPreset, MotionTokens, Theme};
pub use crate::theme::motion::{MotionContext, MotionDirective};
pub use crate::theme::store::ThemeStore;
