//! Theme tokens and motion resolution: named themes with color, brand,
//! motion, and grid tokens, plus per-request reduced-motion handling.

pub(crate) mod model;
pub(crate) mod motion;
pub(crate) mod store;
