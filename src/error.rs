//! Error types for the chord engine
//!
//! Only malformed input is an error. An empty page, a page with no chord
//! lines, or a chord that cannot be transposed are normal outcomes and are
//! reported as values (empty collections, pass-through text).

use thiserror::Error;
use uuid::Uuid;

/// Top-level engine error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Malformed bitmap, fragment coordinates or page geometry
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration text could not be parsed or holds unusable values
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A cropped strip could not be encoded for the recognizer
    #[error("Strip encoding failed: {0}")]
    Encode(String),

    /// No correction with this id exists in the store
    #[error("Correction not found: {0}")]
    CorrectionNotFound(Uuid),
}

pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        EngineError::InvalidInput(msg.into())
    }
}
