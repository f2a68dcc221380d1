//! Error types for advisor-core

use thiserror::Error;

/// Result type alias for advisor-core
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for agent operations
#[derive(Error, Debug)]
pub enum Error {
    /// Generic error message
    #[error("{0}")]
    Generic(String),

    /// Agent could not be constructed (bad configuration, missing provider)
    #[error("Agent initialization failed: {0}")]
    InitializationFailed(String),

    /// A run failed after it was started
    #[error("Agent processing failed: {0}")]
    ProcessingFailed(String),

    /// Caller supplied input the agent cannot work with
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
