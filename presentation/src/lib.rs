//! Presentation layer for study-aid
//!
//! This crate contains the CLI definition and the HTTP API: routes,
//! request/response bodies and the mapping of errors to status codes.

pub mod cli;
pub mod http;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use http::{ApiError, AppState, router, serve};
