//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// # Example
///
/// ```toml
/// [logging]
/// directory = "/var/log/study-aid"   # also write daily rolling files here
/// json = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    pub directory: Option<PathBuf>,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}
