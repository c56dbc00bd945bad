//! Google Gemini provider adapter
//!
//! - [`gateway`]: `LlmGateway` implementation over the REST API
//! - [`types`]: request/response wire types
//! - [`error`]: adapter errors and their mapping onto `GatewayError`

pub mod error;
pub mod gateway;
pub mod types;

pub use error::GeminiError;
pub use gateway::{GeminiConfig, GeminiGateway};
pub use types::CatalogModel;
