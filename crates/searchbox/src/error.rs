//! Error types for the searchbox front end.

use searchbox_core::ParseError;
use thiserror::Error;

/// Error type for searchbox front-end operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Query did not parse
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Result type alias using the searchbox Error.
pub type Result<T> = std::result::Result<T, Error>;
