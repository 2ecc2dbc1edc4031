use thiserror::Error;

/// Errors produced while interpreting comparison settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown difference style '{0}' (expected absolute, relative or human-readable)")]
    UnknownStyle(String),

    #[error("unknown output format '{0}' (expected json or markdown)")]
    UnknownFormat(String),

    #[error("invalid relative precision '{0}' (expected an integer or 'none')")]
    InvalidPrecision(String),
}

/// Errors produced while decoding an input report.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The input is not valid JSON.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The input nests mappings deeper than [`crate::MAX_DEPTH`].
    #[error("document nesting exceeds {limit} levels at '{path}'")]
    TooDeep { limit: usize, path: String },
}

/// Convenience alias for document decoding results.
pub type DocumentResult<T> = Result<T, DocumentError>;
