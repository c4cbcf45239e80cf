//! Error types for statement data operations

use thiserror::Error;

/// Statement data specific errors
#[derive(Debug, Error)]
pub enum DataError {
    /// No statements could be fetched for the ticker
    ///
    /// Display text doubles as the user-visible notification; network and
    /// shape failures both converge here.
    #[error(
        "Unable to fetch financial statements for {ticker}. Please ensure the ticker is correct and try again."
    )]
    NoStatements { ticker: String },

    /// Network or HTTP error
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Malformed endpoint URL
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for statement data operations
pub type Result<T> = std::result::Result<T, DataError>;
