//! Invocation parameters: retry policy and content window.
//!
//! These are application-layer knobs loaded from the `[invocation]` config
//! section. They are not domain policy.

use std::time::Duration;
use study_domain::PromptBuilder;

/// Backoff-on-rate-limit retry policy.
///
/// Only rate-limit errors are retried. The delay doubles after every
/// rate-limited attempt, and retrying stops early once the next sleep would
/// push the total backoff past `max_total_backoff`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    pub max_attempts: u32,
    /// Sleep before the first retry.
    pub initial_delay: Duration,
    /// Ceiling on the sum of all backoff sleeps of one invocation.
    pub max_total_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_secs(2),
            max_total_backoff: Duration::from_secs(60),
        }
    }
}

impl RetryPolicy {
    pub fn with_max_attempts(mut self, max: u32) -> Self {
        self.max_attempts = max;
        self
    }

    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    pub fn with_max_total_backoff(mut self, ceiling: Duration) -> Self {
        self.max_total_backoff = ceiling;
        self
    }

    /// Attempts actually made; a zero setting still makes one call.
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }
}

/// Parameters for prompt building and model invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvocationParams {
    pub retry: RetryPolicy,
    /// Hard character cap on source content embedded in prompts.
    pub content_window: usize,
}

impl Default for InvocationParams {
    fn default() -> Self {
        Self {
            retry: RetryPolicy::default(),
            content_window: PromptBuilder::DEFAULT_CONTENT_WINDOW,
        }
    }
}

impl InvocationParams {
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_content_window(mut self, chars: usize) -> Self {
        self.content_window = chars;
        self
    }

    pub fn prompt_builder(&self) -> PromptBuilder {
        PromptBuilder::new(self.content_window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = InvocationParams::default();
        assert_eq!(params.retry.max_attempts, 3);
        assert_eq!(params.retry.initial_delay, Duration::from_secs(2));
        assert_eq!(params.retry.max_total_backoff, Duration::from_secs(60));
        assert_eq!(params.content_window, 30_000);
    }

    #[test]
    fn test_builder() {
        let params = InvocationParams::default()
            .with_retry(RetryPolicy::default().with_max_attempts(5))
            .with_content_window(1_000);

        assert_eq!(params.retry.max_attempts, 5);
        assert_eq!(params.prompt_builder().content_window(), 1_000);
    }

    #[test]
    fn test_zero_attempts_still_calls_once() {
        assert_eq!(RetryPolicy::default().with_max_attempts(0).attempts(), 1);
    }
}
