//! PageSpec boundary validation.
//!
//! The pieces compose leaves-first: field-level checks, per-component
//! field-table schemas behind the `PropSchema` capability, a catalog keyed
//! by component id, and the whole-document validator that dispatches into
//! the catalog by the data it is validating.

pub(crate) mod catalog;
pub(crate) mod component;
pub(crate) mod field;
pub(crate) mod issue;
pub(crate) mod validate;
pub(crate) mod version;
