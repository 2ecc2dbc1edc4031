//! Error types for the render crate.

/// Errors that can occur while rendering a report.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The diff could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The serializer produced bytes that are not UTF-8.
    #[error("encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Convenience alias for render results.
pub type RenderResult<T> = Result<T, RenderError>;
