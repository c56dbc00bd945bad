//! Raw model output types.
//!
//! An [`InvocationResult`] is produced by the invocation layer and handed to
//! the parsers in [`crate::study::parsing`], after which it is discarded.
//!
//! ```text
//! Structured:  invoke(prompt, Structured) → InvocationResult → parse_*() → typed study aid
//! Plain:       invoke(prompt, Plain)      → InvocationResult → parse_chat_reply() → String
//! ```

use crate::core::model::ModelId;
use serde::{Deserialize, Serialize};

/// Output format requested from the provider.
///
/// Structured mode is a provider capability flag (JSON MIME type), not
/// client-side enforcement; the parser still validates the shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseMode {
    Structured,
    Plain,
}

impl ResponseMode {
    pub fn is_structured(&self) -> bool {
        matches!(self, ResponseMode::Structured)
    }
}

impl std::fmt::Display for ResponseMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResponseMode::Structured => write!(f, "structured"),
            ResponseMode::Plain => write!(f, "plain"),
        }
    }
}

/// Raw text returned by a single successful invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationResult {
    /// Text payload exactly as the provider returned it
    pub text: String,
    /// Response mode the request was made with
    pub mode: ResponseMode,
    /// Model that produced the text
    pub model: ModelId,
    /// Number of provider calls made, including the successful one
    pub attempts: u32,
}

impl InvocationResult {
    pub fn new(text: impl Into<String>, mode: ResponseMode, model: ModelId) -> Self {
        Self {
            text: text.into(),
            mode,
            model,
            attempts: 1,
        }
    }

    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts;
        self
    }

    /// Number of retries that preceded the successful call
    pub fn retries(&self) -> u32 {
        self.attempts.saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retries_counts_extra_attempts() {
        let result = InvocationResult::new("{}", ResponseMode::Structured, ModelId::default());
        assert_eq!(result.retries(), 0);
        assert_eq!(result.with_attempts(3).retries(), 2);
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(ResponseMode::Structured.to_string(), "structured");
        assert_eq!(ResponseMode::Plain.to_string(), "plain");
        assert!(!ResponseMode::Plain.is_structured());
    }
}
