//! Document text extraction port
//!
//! Turns the bytes of an uploaded document into plain text. The extraction
//! library is a black box behind this trait.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("Could not extract text from document: {0}")]
    Unreadable(String),

    #[error("Extraction task failed: {0}")]
    TaskFailed(String),
}

/// Extracts plain text from document bytes
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract_text(&self, bytes: Vec<u8>) -> Result<String, ExtractionError>;
}
