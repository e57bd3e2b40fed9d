use std::io;

/// Errors that can occur while ordering, resolving or rendering tasks
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Lookup error: {0}")]
    Lookup(String),

    #[error("Resolution cancelled")]
    Cancelled,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for taskps operations
pub type Result<T> = std::result::Result<T, Error>;
