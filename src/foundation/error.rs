/// Convenience result type used across pagecraft.
pub type PagecraftResult<T> = Result<T, PagecraftError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Validation *issues* found inside a page document are not errors in this
/// sense: they travel as data in an [`IssueReport`](crate::IssueReport) so
/// callers can surface every problem at once. `PagecraftError` covers the
/// infrastructure around that: malformed JSON, IO, misconfigured registries.
#[derive(thiserror::Error, Debug)]
pub enum PagecraftError {
    /// Invalid caller-provided configuration or registry data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors while loading a page document from a source.
    #[error("page source error: {0}")]
    Source(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PagecraftError {
    /// Build a [`PagecraftError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PagecraftError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`PagecraftError::Source`] value.
    pub fn source(msg: impl Into<String>) -> Self {
        Self::Source(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
