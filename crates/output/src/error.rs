//! Error types for CW Trainer Output

use thiserror::Error;

/// Output error types
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Invalid timing parameters: {msg}")]
    InvalidTiming { msg: String },

    #[error("Audio channel unavailable")]
    ChannelUnavailable,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CW Trainer Output operations
pub type Result<T> = std::result::Result<T, OutputError>;
