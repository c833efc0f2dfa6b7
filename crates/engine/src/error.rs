//! Error types for the CW Trainer engine

use thiserror::Error;

/// Engine error types
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid decode timeout: {ms} ms")]
    InvalidTimeout { ms: u128 },

    #[error("History capacity must be non-zero")]
    InvalidHistoryCapacity,
}

/// Result type for CW Trainer engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
