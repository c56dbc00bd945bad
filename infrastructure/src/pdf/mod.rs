//! PDF text extraction adapter
//!
//! Implements the `TextExtractor` port with `pdf-extract`. Parsing is CPU
//! bound and synchronous, so it runs on the blocking thread pool.

use async_trait::async_trait;
use study_application::ports::text_extractor::{ExtractionError, TextExtractor};
use tracing::debug;

/// Extracts the text layer of PDF documents
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }

    fn extract_blocking(bytes: &[u8]) -> Result<String, ExtractionError> {
        let text = pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ExtractionError::Unreadable(e.to_string()))?;
        Ok(normalize_page_breaks(&text))
    }
}

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract_text(&self, bytes: Vec<u8>) -> Result<String, ExtractionError> {
        let size = bytes.len();
        let text = tokio::task::spawn_blocking(move || Self::extract_blocking(&bytes))
            .await
            // A panic inside the PDF parser surfaces here
            .map_err(|e| ExtractionError::TaskFailed(e.to_string()))??;

        debug!(bytes = size, chars = text.len(), "Extracted PDF text");
        Ok(text)
    }
}

/// Turn form feeds between pages into newlines and end with one newline.
fn normalize_page_breaks(text: &str) -> String {
    let mut out: String = text.replace('\u{c}', "\n");
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    out
}
