//! Resilient model invocation.
//!
//! [`InvocationClient`] sends one prompt to the resolved model, retrying with
//! exponential backoff while the provider reports rate limiting. Every other
//! failure is returned on the first attempt.

use crate::config::RetryPolicy;
use crate::model_selector::ModelSelector;
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use std::sync::Arc;
use std::time::Duration;
use study_domain::{InvocationResult, ResponseMode};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvocationError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("Rate limit persisted after {attempts} attempts: {last}")]
    RateLimitExhausted { attempts: u32, last: GatewayError },

    #[error("Invocation cancelled")]
    Cancelled,
}

/// Sends prompts to the provider with backoff on rate limiting.
///
/// Shared between all task use cases; the model is resolved through the
/// injected [`ModelSelector`] before the first attempt.
pub struct InvocationClient {
    gateway: Arc<dyn LlmGateway>,
    selector: Arc<ModelSelector>,
    policy: RetryPolicy,
}

impl InvocationClient {
    pub fn new(
        gateway: Arc<dyn LlmGateway>,
        selector: Arc<ModelSelector>,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            gateway,
            selector,
            policy,
        }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    pub async fn invoke(
        &self,
        prompt: &str,
        mode: ResponseMode,
    ) -> Result<InvocationResult, InvocationError> {
        self.invoke_cancellable(prompt, mode, &CancellationToken::new())
            .await
    }

    /// Invoke, aborting any pending request or backoff sleep once `cancel`
    /// fires.
    pub async fn invoke_cancellable(
        &self,
        prompt: &str,
        mode: ResponseMode,
        cancel: &CancellationToken,
    ) -> Result<InvocationResult, InvocationError> {
        let model = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(InvocationError::Cancelled),
            model = self.selector.resolve() => model?,
        };

        let max_attempts = self.policy.attempts();
        let mut delay = self.policy.initial_delay;
        let mut total_backoff = Duration::ZERO;
        let mut attempt = 0;

        loop {
            attempt += 1;
            debug!(model = %model, attempt, mode = %mode, "Invoking model");

            let outcome = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(InvocationError::Cancelled),
                outcome = self.gateway.generate(&model, prompt, mode) => outcome,
            };

            let error = match outcome {
                Ok(text) => {
                    if attempt > 1 {
                        debug!(model = %model, attempt, "Model call succeeded after retry");
                    }
                    return Ok(InvocationResult::new(text, mode, model).with_attempts(attempt));
                }
                Err(e) if e.is_rate_limited() => e,
                Err(e) => return Err(e.into()),
            };

            if attempt >= max_attempts || total_backoff + delay > self.policy.max_total_backoff {
                warn!(
                    model = %model,
                    attempts = attempt,
                    backoff_ms = total_backoff.as_millis() as u64,
                    "Rate limit persisted, giving up"
                );
                return Err(InvocationError::RateLimitExhausted {
                    attempts: attempt,
                    last: error,
                });
            }

            warn!(
                model = %model,
                attempt,
                delay_ms = delay.as_millis() as u64,
                "Rate limited, backing off"
            );

            tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(InvocationError::Cancelled),
                _ = tokio::time::sleep(delay) => {}
            }

            total_backoff += delay;
            delay = delay.saturating_mul(2);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockGateway, rate_limited};
    use study_domain::ModelPreferences;

    fn client(gateway: Arc<MockGateway>, policy: RetryPolicy) -> InvocationClient {
        let selector = Arc::new(ModelSelector::new(
            gateway.clone(),
            ModelPreferences::default(),
        ));
        InvocationClient::new(gateway, selector, policy)
    }

    fn gateway() -> MockGateway {
        MockGateway::new(&["models/gemini-1.5-flash"])
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_rate_limit_then_success() {
        let gateway = Arc::new(gateway().fail(rate_limited()).respond("{\"ok\":true}"));
        let client = client(gateway.clone(), RetryPolicy::default());

        let started = tokio::time::Instant::now();
        let result = client
            .invoke("prompt", ResponseMode::Structured)
            .await
            .unwrap();

        assert_eq!(result.text, "{\"ok\":true}");
        assert_eq!(result.attempts, 2);
        assert_eq!(result.retries(), 1);
        assert_eq!(result.model.as_str(), "gemini-1.5-flash");
        assert_eq!(gateway.generate_calls(), 2);
        assert!(started.elapsed() >= Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_other_errors_are_not_retried() {
        let gateway = Arc::new(gateway().fail(GatewayError::Provider {
            status: 400,
            message: "bad request".into(),
        }));
        let client = client(gateway.clone(), RetryPolicy::default());

        let err = client
            .invoke("prompt", ResponseMode::Plain)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            InvocationError::Gateway(GatewayError::Provider { status: 400, .. })
        ));
        assert_eq!(gateway.generate_calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_persistent_rate_limit_makes_exactly_max_attempts() {
        let gateway = Arc::new(gateway().always_fail(rate_limited()));
        let client = client(gateway.clone(), RetryPolicy::default());

        let started = tokio::time::Instant::now();
        let err = client
            .invoke("prompt", ResponseMode::Structured)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            InvocationError::RateLimitExhausted {
                attempts: 3,
                last: rate_limited()
            }
        );
        assert_eq!(gateway.generate_calls(), 3);
        // 2s + 4s of backoff
        assert!(started.elapsed() >= Duration::from_secs(6));
    }

    #[tokio::test(start_paused = true)]
    async fn test_backoff_ceiling_stops_early() {
        let gateway = Arc::new(gateway().always_fail(rate_limited()));
        let policy = RetryPolicy::default()
            .with_max_attempts(10)
            .with_max_total_backoff(Duration::from_secs(5));
        let client = client(gateway.clone(), policy);

        let err = client
            .invoke("prompt", ResponseMode::Structured)
            .await
            .unwrap_err();

        // Sleeps 2s, then 2s + 4s would exceed the 5s ceiling
        assert!(matches!(
            err,
            InvocationError::RateLimitExhausted { attempts: 2, .. }
        ));
        assert_eq!(gateway.generate_calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_during_backoff() {
        let gateway = Arc::new(gateway().always_fail(rate_limited()));
        let client = client(gateway.clone(), RetryPolicy::default());

        let token = CancellationToken::new();
        let trigger = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(500)).await;
            trigger.cancel();
        });

        let err = client
            .invoke_cancellable("prompt", ResponseMode::Plain, &token)
            .await
            .unwrap_err();

        assert_eq!(err, InvocationError::Cancelled);
        assert_eq!(gateway.generate_calls(), 1);
    }

    #[tokio::test]
    async fn test_already_cancelled() {
        let gateway = Arc::new(gateway().respond("hello"));
        let client = client(gateway.clone(), RetryPolicy::default());

        let token = CancellationToken::new();
        token.cancel();

        let err = client
            .invoke_cancellable("prompt", ResponseMode::Plain, &token)
            .await
            .unwrap_err();
        assert_eq!(err, InvocationError::Cancelled);
        assert_eq!(gateway.generate_calls(), 0);
    }

    #[tokio::test]
    async fn test_mode_is_forwarded() {
        let gateway = Arc::new(gateway().respond("plain answer"));
        let client = client(gateway.clone(), RetryPolicy::default());

        let result = client.invoke("hi", ResponseMode::Plain).await.unwrap();
        assert_eq!(result.mode, ResponseMode::Plain);
        assert_eq!(result.attempts, 1);
        assert_eq!(gateway.sent()[0].mode, ResponseMode::Plain);
        assert_eq!(gateway.sent()[0].prompt, "hi");
    }
}
