//! Infrastructure layer for study-aid
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;
pub mod pdf;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigIssue, ConfigLoader, FileConfig, FileInvocationConfig, FileLoggingConfig,
    FileModelsConfig, FileProviderConfig, FileServerConfig, Severity,
};
pub use gemini::{CatalogModel, GeminiConfig, GeminiError, GeminiGateway};
pub use pdf::PdfTextExtractor;
