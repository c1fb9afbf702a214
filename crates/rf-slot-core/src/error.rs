//! Error types for rf-slot-core

use thiserror::Error;

/// Errors raised while loading slot configuration.
///
/// Cadence computation and line scanning never fail; only the
/// configuration layer produces these.
#[derive(Error, Debug)]
pub enum SlotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("YAML error: {0}")]
    Yaml(String),

    #[error("Unsupported fixture format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for SlotError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}

impl From<serde_yml::Error> for SlotError {
    fn from(e: serde_yml::Error) -> Self {
        Self::Yaml(e.to_string())
    }
}

/// Result type alias
pub type SlotResult<T> = Result<T, SlotError>;
