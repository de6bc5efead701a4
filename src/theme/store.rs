use crate::theme::model::{BrandTokens, GridTokens, MotionPreset, MotionTokens, Theme};
use std::collections::BTreeMap;

/// Theme lookup keyed by name, with a designated fallback.
///
/// Resolution is total: an unknown name yields the fallback theme instead of
/// an error, so a `PageSpec` naming a theme this store has never heard of
/// still renders with sane tokens.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    themes: BTreeMap<String, Theme>,
    fallback: Theme,
}

impl ThemeStore {
    /// Store holding only `fallback`, which is also the default theme.
    pub fn new(fallback: Theme) -> Self {
        let mut themes = BTreeMap::new();
        themes.insert(fallback.name.clone(), fallback.clone());
        Self { themes, fallback }
    }

    /// Store with the built-in themes, defaulting to `acme`.
    pub fn builtin() -> Self {
        let mut store = Self::new(acme());
        store.insert(beta());
        store
    }

    /// Add or replace the theme named by `theme.name`.
    pub fn insert(&mut self, theme: Theme) {
        if theme.name == self.fallback.name {
            self.fallback = theme.clone();
        }
        self.themes.insert(theme.name.clone(), theme);
    }

    /// The theme registered under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// The theme registered under `name`, or the fallback theme.
    pub fn resolve(&self, name: &str) -> &Theme {
        self.themes.get(name).unwrap_or(&self.fallback)
    }

    /// Name of the fallback theme.
    pub fn fallback_name(&self) -> &str {
        &self.fallback.name
    }

    /// Registered theme names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::builtin()
    }
}

fn tokens(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn durations(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
    entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

fn preset(duration: f64, ease: &str) -> MotionPreset {
    MotionPreset {
        duration,
        ease: ease.to_string(),
        stagger: None,
    }
}

fn presets(entries: Vec<(&str, MotionPreset)>) -> BTreeMap<String, MotionPreset> {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

fn acme() -> Theme {
    Theme {
        name: String::from("acme"),
        colors: tokens(&[
            ("color-scheme", "light"),
            ("primary", "#d4af37"),
            ("primary-content", "#ffffff"),
            ("secondary", "#666666"),
            ("secondary-content", "#ffffff"),
            ("accent", "#d4af37"),
            ("accent-content", "#ffffff"),
            ("neutral", "#121212"),
            ("neutral-content", "#ffffff"),
            ("base-100", "#fafafa"),
            ("base-200", "#ffffff"),
            ("base-300", "#e5e5e5"),
            ("base-content", "#121212"),
        ]),
        brand: BrandTokens {
            name: String::from("The Chronicle"),
            logo: String::from("/logos/acme.svg"),
            logo_alt: None,
            favicon: None,
        },
        motion: MotionTokens {
            easing: tokens(&[
                ("smooth", "power3.out"),
                ("snappy", "power2.inOut"),
                ("elastic", "elastic.out(1, 0.5)"),
            ]),
            duration: durations(&[("fast", 0.3), ("base", 0.6), ("slow", 1.2)]),
            presets: presets(vec![
                ("fadeUp", preset(0.8, "power3.out")),
                ("slideIn", preset(1.0, "power2.inOut")),
                ("scaleIn", preset(0.6, "back.out(1.7)")),
            ]),
        },
        grid: GridTokens {
            container: String::from("1200px"),
            gap: String::from("1rem"),
        },
    }
}

fn beta() -> Theme {
    Theme {
        name: String::from("beta"),
        colors: tokens(&[
            ("color-scheme", "light"),
            ("primary", "#4338ca"),
            ("primary-content", "#ffffff"),
            ("secondary", "#64748b"),
            ("secondary-content", "#ffffff"),
            ("accent", "#0ea5e9"),
            ("accent-content", "#ffffff"),
            ("neutral", "#1e293b"),
            ("neutral-content", "#ffffff"),
            ("base-100", "#f8fafc"),
            ("base-200", "#ffffff"),
            ("base-300", "#e2e8f0"),
            ("base-content", "#0f172a"),
        ]),
        brand: BrandTokens {
            name: String::from("Beta Design Co."),
            logo: String::from("/logos/beta.svg"),
            logo_alt: None,
            favicon: None,
        },
        motion: MotionTokens {
            easing: tokens(&[
                ("smooth", "power2.out"),
                ("snappy", "power1.inOut"),
                ("elastic", "elastic.out(1, 0.3)"),
            ]),
            duration: durations(&[("fast", 0.25), ("base", 0.5), ("slow", 1.0)]),
            presets: presets(vec![
                ("fadeUp", preset(0.6, "power2.out")),
                ("slideIn", preset(0.8, "power1.inOut")),
                ("scaleIn", preset(0.5, "back.out(1.5)")),
            ]),
        },
        grid: GridTokens {
            container: String::from("1200px"),
            gap: String::from("1.5rem"),
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/theme/store.rs"]
mod tests;
