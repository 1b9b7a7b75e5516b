//! Error types for filter operations.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid filter config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown node type: {0}")]
    UnknownKind(String),

    #[error("Invalid regex {pattern:?}: {source}")]
    Regex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("filter parse error: {0}")]
    Syntax(String),

    #[error("No matching nodes")]
    NoMatches,
}

pub type Result<T> = std::result::Result<T, Error>;
