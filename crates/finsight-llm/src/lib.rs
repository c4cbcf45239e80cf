//! Chat completion layer for finsight
//!
//! This crate provides provider-agnostic abstractions for the single
//! request/response completion exchange the analyst performs. It includes:
//!
//! - Message types for the system/user conversation pair
//! - Completion request/response types
//! - Provider trait for completion backends
//! - Concrete provider implementations (behind feature flags)

pub mod completion;
pub mod error;
pub mod messages;
pub mod provider;

// Re-export main types
pub use completion::{CompletionRequest, CompletionResponse, StopReason, TokenUsage};
pub use error::{LlmError, Result};
pub use messages::{Message, Role};
pub use provider::CompletionProvider;

// Provider implementations (feature-gated)
#[cfg(feature = "openai")]
pub mod providers;
