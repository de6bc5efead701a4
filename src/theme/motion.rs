use crate::theme::model::{MotionPreset, MotionTokens, Theme};

/// Timing used when a preset or duration key is unknown.
const FALLBACK_DURATION: f64 = 0.6;
/// Easing used when a preset or easing key is unknown.
const FALLBACK_EASE: &str = "power2.out";
/// Near-instant duration substituted under reduced motion.
const REDUCED_DURATION: f64 = 0.01;

/// How a resolved preset should be applied.
#[derive(Debug, Clone, PartialEq)]
pub enum MotionDirective {
    /// Animate with the given timing.
    Animated(MotionPreset),
    /// Jump straight to the final state without animating.
    Immediate,
}

/// Per-request motion resolution: a theme's motion tokens plus the caller's
/// reduced-motion capability flag.
///
/// The flag is resolved once, at construction, by whoever knows the
/// environment; everything downstream reads it from here instead of probing
/// global state. Lookups never fail: unknown names fall back to a neutral
/// `0.6s power2.out` timing.
#[derive(Debug, Clone)]
pub struct MotionContext {
    tokens: MotionTokens,
    reduced_motion: bool,
}

impl MotionContext {
    /// Context over `tokens` with the given reduced-motion flag.
    pub fn new(tokens: MotionTokens, reduced_motion: bool) -> Self {
        Self {
            tokens,
            reduced_motion,
        }
    }

    /// Context over `theme`'s motion tokens.
    pub fn for_theme(theme: &Theme, reduced_motion: bool) -> Self {
        Self::new(theme.motion.clone(), reduced_motion)
    }

    /// Whether the caller asked for reduced motion.
    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// The preset named `name`, or the neutral fallback timing.
    pub fn preset(&self, name: &str) -> MotionPreset {
        self.tokens
            .presets
            .get(name)
            .cloned()
            .unwrap_or_else(fallback_preset)
    }

    /// The named duration in seconds.
    ///
    /// Under reduced motion every duration collapses to a near-instant
    /// constant, so timelines still complete but nothing visibly moves.
    pub fn duration(&self, key: &str) -> f64 {
        if self.reduced_motion {
            return REDUCED_DURATION;
        }
        self.tokens
            .duration
            .get(key)
            .copied()
            .unwrap_or(FALLBACK_DURATION)
    }

    /// The named easing curve expression.
    pub fn easing(&self, key: &str) -> &str {
        self.tokens
            .easing
            .get(key)
            .map(String::as_str)
            .unwrap_or(FALLBACK_EASE)
    }

    /// Resolve the preset named `name` into an application directive.
    ///
    /// Under reduced motion this is always [`MotionDirective::Immediate`]:
    /// the renderer sets the final state directly instead of animating.
    pub fn resolve(&self, name: &str) -> MotionDirective {
        if self.reduced_motion {
            return MotionDirective::Immediate;
        }
        MotionDirective::Animated(self.preset(name))
    }
}

fn fallback_preset() -> MotionPreset {
    MotionPreset {
        duration: FALLBACK_DURATION,
        ease: String::from(FALLBACK_EASE),
        stagger: None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/theme/motion.rs"]
mod tests;
