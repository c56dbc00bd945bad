//! LLM Gateway port
//!
//! Defines the interface for communicating with the hosted model provider.

use async_trait::async_trait;
use study_domain::{ModelId, ResponseMode};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Credential missing or unusable. Never retried.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Provider quota exceeded (HTTP 429 / `RESOURCE_EXHAUSTED`)
    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Provider error ({status}): {message}")]
    Provider { status: u16, message: String },

    /// A successful reply with no usable text (blocked or empty candidate)
    #[error("AI returned no usable output: {0}")]
    InvalidResponse(String),
}

impl GatewayError {
    /// Check if the error is rate-limit shaped and worth a backoff retry
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, GatewayError::RateLimited(_))
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer talks to the model provider.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// List catalog models that support content generation
    async fn list_models(&self) -> Result<Vec<ModelId>, GatewayError>;

    /// Send a single prompt and return the raw response text.
    ///
    /// [`ResponseMode::Structured`] asks the provider for JSON output.
    async fn generate(
        &self,
        model: &ModelId,
        prompt: &str,
        mode: ResponseMode,
    ) -> Result<String, GatewayError>;
}
