use crate::foundation::error::{PagecraftError, PagecraftResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A complete theme: design tokens plus brand and motion configuration.
///
/// Themes are data, not behavior. The renderer and motion layer read tokens
/// from here; validation never does (a `PageSpec` may name a theme this
/// process has never heard of).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme identifier, e.g. `acme`.
    pub name: String,
    /// Color tokens keyed by token name, e.g. `base-100`.
    pub colors: BTreeMap<String, String>,
    /// Brand identity tokens.
    pub brand: BrandTokens,
    /// Motion configuration.
    pub motion: MotionTokens,
    /// Layout grid tokens.
    pub grid: GridTokens,
}

impl Theme {
    /// Serialize the theme to its JSON payload shape.
    pub fn to_value(&self) -> PagecraftResult<Value> {
        serde_json::to_value(self)
            .map_err(|e| PagecraftError::serde(format!("serialize theme '{}': {e}", self.name)))
    }
}

/// Brand identity carried by a theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandTokens {
    /// Display name, e.g. `The Chronicle`.
    pub name: String,
    /// Logo asset path.
    pub logo: String,
    /// Alt text for the logo, if it is not decorative.
    #[serde(rename = "logoAlt", default, skip_serializing_if = "Option::is_none")]
    pub logo_alt: Option<String>,
    /// Favicon asset path, if the theme ships one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
}

/// Named easing curves, durations, and animation presets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionTokens {
    /// Easing curves keyed by name, e.g. `smooth`.
    pub easing: BTreeMap<String, String>,
    /// Durations in seconds keyed by name, e.g. `base`.
    pub duration: BTreeMap<String, f64>,
    /// Animation presets keyed by name, e.g. `fadeUp`.
    pub presets: BTreeMap<String, MotionPreset>,
}

/// Timing for one named animation preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionPreset {
    /// Duration in seconds.
    pub duration: f64,
    /// Easing curve expression.
    pub ease: String,
    /// Delay between staggered element starts, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stagger: Option<f64>,
}

/// Layout grid sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridTokens {
    /// Maximum content width, as a CSS length.
    pub container: String,
    /// Gap between grid tracks, as a CSS length.
    pub gap: String,
}

#[cfg(test)]
#[path = "../../tests/unit/theme/model.rs"]
mod tests;
