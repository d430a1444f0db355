//! Error types for varspace operations.

use thiserror::Error;

/// Errors raised at the typed boundaries of the crate.
///
/// The transforms themselves are best-effort and never fail; errors only
/// occur when converting untyped input into the crate's types or when a
/// theme document fails to parse.
#[derive(Debug, Error)]
pub enum Error {
    /// Input was not of an expected shape (boolean, null, or array where
    /// a string, number, or nested map was required).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A theme document failed to parse.
    #[error("failed to parse theme: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON conversion failure at the dynamic-value boundary.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for varspace operations.
pub type Result<T> = std::result::Result<T, Error>;
