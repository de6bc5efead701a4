//! Page documents: the typed model, the authoring builder, and slug
//! resolution.

pub(crate) mod dsl;
pub(crate) mod model;
pub(crate) mod resolve;
