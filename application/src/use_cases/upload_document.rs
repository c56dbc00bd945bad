//! Upload Document use case.
//!
//! Accepts a PDF upload and returns its plain text. Only the file extension
//! is checked; the content type the client sends is ignored.

use crate::ports::text_extractor::{ExtractionError, TextExtractor};
use std::sync::Arc;
use study_domain::DomainError;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum UploadDocumentError {
    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

/// Text extracted from an uploaded document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDocument {
    pub filename: String,
    pub extracted_text: String,
}

impl ExtractedDocument {
    /// Length of the extracted text in characters
    pub fn content_length(&self) -> usize {
        self.extracted_text.chars().count()
    }
}

#[derive(Clone)]
pub struct UploadDocumentUseCase {
    extractor: Arc<dyn TextExtractor>,
}

impl UploadDocumentUseCase {
    pub fn new(extractor: Arc<dyn TextExtractor>) -> Self {
        Self { extractor }
    }

    pub async fn execute(
        &self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<ExtractedDocument, UploadDocumentError> {
        if !filename.to_lowercase().ends_with(".pdf") {
            return Err(DomainError::UnsupportedFileType(filename.to_string()).into());
        }

        let size = bytes.len();
        let extracted_text = self.extractor.extract_text(bytes).await?;
        let document = ExtractedDocument {
            filename: filename.to_string(),
            extracted_text,
        };

        info!(
            filename = %document.filename,
            bytes = size,
            chars = document.content_length(),
            "Document text extracted"
        );
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockExtractor {
        result: Result<String, ExtractionError>,
        calls: Mutex<usize>,
    }

    impl MockExtractor {
        fn new(result: Result<String, ExtractionError>) -> Self {
            Self {
                result,
                calls: Mutex::new(0),
            }
        }
    }

    #[async_trait]
    impl TextExtractor for MockExtractor {
        async fn extract_text(&self, _bytes: Vec<u8>) -> Result<String, ExtractionError> {
            *self.calls.lock().unwrap() += 1;
            self.result.clone()
        }
    }

    #[tokio::test]
    async fn test_extracts_pdf_text() {
        let extractor = Arc::new(MockExtractor::new(Ok("Page one\nPage deux\n".to_string())));
        let use_case = UploadDocumentUseCase::new(extractor);

        let doc = use_case
            .execute("Cours.PDF", b"%PDF-1.4".to_vec())
            .await
            .unwrap();

        assert_eq!(doc.filename, "Cours.PDF");
        assert_eq!(doc.content_length(), 19);
    }

    #[tokio::test]
    async fn test_rejects_non_pdf_without_extracting() {
        let extractor = Arc::new(MockExtractor::new(Ok(String::new())));
        let use_case = UploadDocumentUseCase::new(extractor.clone());

        let err = use_case
            .execute("notes.docx", vec![1, 2, 3])
            .await
            .unwrap_err();

        assert_eq!(
            err,
            UploadDocumentError::Validation(DomainError::UnsupportedFileType(
                "notes.docx".to_string()
            ))
        );
        assert_eq!(*extractor.calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_extraction_failure() {
        let extractor = Arc::new(MockExtractor::new(Err(ExtractionError::Unreadable(
            "not a PDF".to_string(),
        ))));
        let use_case = UploadDocumentUseCase::new(extractor);

        let err = use_case
            .execute("broken.pdf", vec![0])
            .await
            .unwrap_err();
        assert!(matches!(err, UploadDocumentError::Extraction(_)));
    }
}
