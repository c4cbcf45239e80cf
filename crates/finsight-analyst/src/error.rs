//! Error types for analysis operations

use thiserror::Error;

/// Analysis specific errors
#[derive(Debug, Error)]
pub enum AnalystError {
    /// The completion collaborator failed
    ///
    /// Surfaced to the caller as a per-action failure rather than crashing
    /// the session.
    #[error("LLM error: {0}")]
    Llm(#[from] finsight_llm::LlmError),

    /// Prompt template rendering failed
    #[error("Prompt error: {0}")]
    Prompt(#[from] minijinja::Error),
}

/// Result type alias for analysis operations
pub type Result<T> = std::result::Result<T, AnalystError>;
