//! Shared plumbing for the study task use cases.
//!
//! Every task runs the same pipeline: build prompt, invoke the model with
//! retry, parse and validate the output. [`TaskRunner`] owns that pipeline so
//! each use case only supplies its prompt and parser.

use crate::invocation::{InvocationClient, InvocationError};
use std::sync::Arc;
use study_domain::util::preview;
use study_domain::{DomainError, ParseError, PromptBuilder, PromptSpec, ResponseMode};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors that can occur while running a study task.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TaskError {
    /// Caller input rejected before any provider call
    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error(transparent)]
    Invocation(#[from] InvocationError),

    /// The provider answered but the payload is unusable
    #[error(transparent)]
    MalformedOutput(#[from] ParseError),
}

impl TaskError {
    pub fn is_validation(&self) -> bool {
        matches!(self, TaskError::Validation(_))
    }
}

/// Runs prompt, invocation and parsing for one task.
#[derive(Clone)]
pub struct TaskRunner {
    invocation: Arc<InvocationClient>,
    prompts: PromptBuilder,
    cancellation_token: Option<CancellationToken>,
}

impl TaskRunner {
    pub fn new(invocation: Arc<InvocationClient>, prompts: PromptBuilder) -> Self {
        Self {
            invocation,
            prompts,
            cancellation_token: None,
        }
    }

    /// Abort in-flight calls and backoff sleeps when `token` fires.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    pub fn prompts(&self) -> &PromptBuilder {
        &self.prompts
    }

    pub(crate) async fn run<T>(
        &self,
        spec: PromptSpec,
        mode: ResponseMode,
        parse: fn(&str) -> Result<T, ParseError>,
    ) -> Result<T, TaskError> {
        let kind = spec.kind();
        let language = spec.language().code().to_string();
        let prompt = spec.render();
        debug!(task = %kind, language = %language, prompt_chars = prompt.len(), "Prompt built");

        let result = match &self.cancellation_token {
            Some(token) => {
                self.invocation
                    .invoke_cancellable(&prompt, mode, token)
                    .await?
            }
            None => self.invocation.invoke(&prompt, mode).await?,
        };

        match parse(&result.text) {
            Ok(value) => {
                info!(
                    task = %kind,
                    model = %result.model,
                    attempts = result.attempts,
                    "Task completed"
                );
                Ok(value)
            }
            Err(e) => {
                warn!(
                    task = %kind,
                    model = %result.model,
                    error = %e,
                    output = %preview(&result.text, 200),
                    "Model output failed validation"
                );
                Err(e.into())
            }
        }
    }
}

/// Reject blank required text.
pub(crate) fn require_text(value: &str, field: &'static str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::EmptyField(field));
    }
    Ok(())
}

/// Check a requested item count lies in `1..=max`.
pub(crate) fn require_count(
    value: usize,
    field: &'static str,
    max: usize,
) -> Result<(), DomainError> {
    if value == 0 || value > max {
        return Err(DomainError::OutOfRange { field, value, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text() {
        assert!(require_text("x", "text").is_ok());
        assert_eq!(
            require_text("  \n", "text"),
            Err(DomainError::EmptyField("text"))
        );
    }

    #[test]
    fn test_require_count() {
        assert!(require_count(1, "num_cards", 50).is_ok());
        assert!(require_count(50, "num_cards", 50).is_ok());
        assert!(require_count(0, "num_cards", 50).is_err());
        assert_eq!(
            require_count(51, "num_cards", 50),
            Err(DomainError::OutOfRange {
                field: "num_cards",
                value: 51,
                max: 50
            })
        );
    }
}
