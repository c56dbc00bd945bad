//! Configuration file loading for study-aid
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables `STUDY_AID_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./study-aid.toml`
//! 4. Global: `~/.config/study-aid/config.toml`
//! 5. Default values

mod file_config;
mod loader;
mod validation;

pub use file_config::{
    FileConfig, FileInvocationConfig, FileLoggingConfig, FileModelsConfig, FileProviderConfig,
    FileServerConfig,
};
pub use loader::{ConfigError, ConfigLoader};
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
