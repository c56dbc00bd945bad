//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types on use.

mod invocation;
mod logging;
mod models;
mod provider;
mod server;

pub use invocation::FileInvocationConfig;
pub use logging::FileLoggingConfig;
pub use models::FileModelsConfig;
pub use provider::FileProviderConfig;
pub use server::FileServerConfig;

use super::validation::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Placeholder shown instead of a configured secret
const REDACTED: &str = "***";

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP listener and CORS
    pub server: FileServerConfig,
    /// Gemini API access
    pub provider: FileProviderConfig,
    /// Model selection preferences
    pub models: FileModelsConfig,
    /// Retry policy and content window
    pub invocation: FileInvocationConfig,
    /// Log output
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if let Err(e) = self.server.socket_addr() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidBindAddress {
                    value: self.server.bind.clone(),
                },
                format!("server.bind: '{}' is not a socket address ({})", self.server.bind, e),
            ));
        }

        if self.server.cors_origins.iter().any(|o| o.trim().is_empty()) {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::EmptyCorsOrigin,
                "server.cors_origins: empty origins are ignored",
            ));
        }

        issues.extend(self.models.to_preferences().1);
        issues.extend(self.invocation.validate());

        issues
    }

    /// Copy with the inline API key masked
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if config.provider.api_key.is_some() {
            config.provider.api_key = Some(REDACTED.to_string());
        }
        config
    }

    /// Render as TOML (for `--show-config`). Secrets are masked.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&self.redacted())
    }
}
