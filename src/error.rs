//! Error types for hilite

use thiserror::Error;

/// Result type alias for hilite operations
pub type Result<T> = std::result::Result<T, HiliteError>;

/// Highlighter error types
#[derive(Error, Debug)]
pub enum HiliteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}
