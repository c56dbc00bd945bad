//! Invocation configuration from TOML (`[invocation]` section)

use crate::config::validation::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use study_application::{InvocationParams, RetryPolicy};

/// # Example
///
/// ```toml
/// [invocation]
/// max_attempts = 3
/// initial_delay_ms = 2000
/// max_total_backoff_ms = 60000
/// content_window_chars = 30000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileInvocationConfig {
    pub max_attempts: u32,
    pub initial_delay_ms: u64,
    pub max_total_backoff_ms: u64,
    pub content_window_chars: usize,
}

impl Default for FileInvocationConfig {
    fn default() -> Self {
        let params = InvocationParams::default();
        Self {
            max_attempts: params.retry.max_attempts,
            initial_delay_ms: params.retry.initial_delay.as_millis() as u64,
            max_total_backoff_ms: params.retry.max_total_backoff.as_millis() as u64,
            content_window_chars: params.content_window,
        }
    }
}

impl FileInvocationConfig {
    pub fn to_params(&self) -> InvocationParams {
        InvocationParams::default()
            .with_retry(
                RetryPolicy::default()
                    .with_max_attempts(self.max_attempts)
                    .with_initial_delay(Duration::from_millis(self.initial_delay_ms))
                    .with_max_total_backoff(Duration::from_millis(self.max_total_backoff_ms)),
            )
            .with_content_window(self.content_window_chars)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.max_attempts == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ZeroAttempts,
                "invocation.max_attempts is 0, a single attempt will be made",
            ));
        }

        if self.content_window_chars == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroContentWindow,
                "invocation.content_window_chars must be greater than 0",
            ));
        }

        if self.max_attempts > 1 && self.max_total_backoff_ms < self.initial_delay_ms {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::BackoffBelowInitialDelay,
                format!(
                    "invocation.max_total_backoff_ms ({}) is below initial_delay_ms ({}), rate limits will not be retried",
                    self.max_total_backoff_ms, self.initial_delay_ms
                ),
            ));
        }

        issues
    }
}
