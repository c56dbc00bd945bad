//! Gemini provider configuration from TOML (`[provider]` section)

use crate::gemini::GeminiConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// # Example
///
/// ```toml
/// [provider]
/// api_key_env = "GEMINI_API_KEY"
/// base_url = "https://generativelanguage.googleapis.com"
/// request_timeout_secs = 120
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Environment variable name for the API key (default: "GEMINI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    /// Base URL of the Gemini REST API.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            request_timeout_secs: 120,
        }
    }
}

impl FileProviderConfig {
    /// The environment variable wins over a key written in the config file.
    pub fn resolve_api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| self.api_key.clone().filter(|k| !k.trim().is_empty()))
    }

    pub fn to_gemini_config(&self) -> GeminiConfig {
        GeminiConfig {
            api_key: self.resolve_api_key(),
            api_key_env: self.api_key_env.clone(),
            base_url: self.base_url.clone(),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_key_used_when_env_missing() {
        let config = FileProviderConfig {
            api_key_env: "STUDY_AID_TEST_UNSET_KEY_VAR".to_string(),
            api_key: Some("from-file".to_string()),
            ..FileProviderConfig::default()
        };
        assert_eq!(config.resolve_api_key().as_deref(), Some("from-file"));

        let gemini = config.to_gemini_config();
        assert_eq!(gemini.api_key.as_deref(), Some("from-file"));
        assert_eq!(gemini.request_timeout, Duration::from_secs(120));
    }

    #[test]
    fn test_blank_key_is_none() {
        let config = FileProviderConfig {
            api_key_env: "STUDY_AID_TEST_UNSET_KEY_VAR".to_string(),
            api_key: Some("   ".to_string()),
            ..FileProviderConfig::default()
        };
        assert!(config.resolve_api_key().is_none());
    }
}
