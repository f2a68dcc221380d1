//! Error types for stock advisor operations

use thiserror::Error;

/// Stock advisor specific errors
#[derive(Debug, Error)]
pub enum StockError {
    /// Network or HTTP error, including non-2xx provider responses
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid stock symbol provided
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Model-provider error (auth, quota, transport on the LLM side)
    #[error("Model provider error: {0}")]
    ModelProviderError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type alias for stock advisor operations
pub type Result<T> = std::result::Result<T, StockError>;

impl From<StockError> for advisor_core::Error {
    fn from(err: StockError) -> Self {
        advisor_core::Error::ProcessingFailed(err.to_string())
    }
}

impl From<advisor_core::Error> for StockError {
    fn from(err: advisor_core::Error) -> Self {
        StockError::Other(err.to_string())
    }
}

impl From<advisor_llm::LLMError> for StockError {
    fn from(err: advisor_llm::LLMError) -> Self {
        StockError::ModelProviderError(err.to_string())
    }
}
