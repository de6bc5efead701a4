//! Component metadata: names, categories, usage guidance, prop docs, and
//! accessibility notes for every registered component.

pub(crate) mod meta;
