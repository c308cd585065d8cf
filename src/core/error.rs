//! Engine error type
//!
//! Spatial input never errors (it is clamped). These variants cover the
//! operations that can legitimately be refused: loading data of the wrong
//! size, bad configuration, and unknown field names coming from JS.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("dimension mismatch for {field}: expected {expected} cells, got {actual}")]
    DimensionMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("invalid solver config: {0}")]
    InvalidConfig(String),

    #[error("unknown field '{0}'")]
    UnknownField(String),
}

impl From<serde_json::Error> for EngineError {
    fn from(e: serde_json::Error) -> Self {
        EngineError::InvalidConfig(e.to_string())
    }
}
