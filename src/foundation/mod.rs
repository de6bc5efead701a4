//! Foundation types shared by every layer: the error taxonomy.

pub(crate) mod error;
