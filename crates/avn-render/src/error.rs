//! Error types for rendering.

/// Errors that can occur while building or using a [`crate::Renderer`].
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A template could not be loaded, parsed or rendered.
    #[error("template error: {0}")]
    Template(String),

    /// A configured date format contains an unknown specifier.
    #[error("invalid date format {0:?}")]
    DateFormat(String),
}
