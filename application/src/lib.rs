//! Application layer for study-aid
//!
//! This crate contains use cases, port definitions, model selection and the
//! retrying invocation client. It depends only on the domain layer.

pub mod config;
pub mod invocation;
pub mod model_selector;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use config::{InvocationParams, RetryPolicy};
pub use invocation::{InvocationClient, InvocationError};
pub use model_selector::ModelSelector;
pub use ports::{
    llm_gateway::{GatewayError, LlmGateway},
    text_extractor::{ExtractionError, TextExtractor},
};
pub use use_cases::analyze_content::{AnalyzeContentInput, AnalyzeContentUseCase};
pub use use_cases::chat_with_document::{ChatWithDocumentInput, ChatWithDocumentUseCase};
pub use use_cases::generate_flashcards::{GenerateFlashcardsInput, GenerateFlashcardsUseCase};
pub use use_cases::generate_quiz::{GenerateQuizInput, GenerateQuizUseCase};
pub use use_cases::plan_study::{PlanStudyInput, PlanStudyUseCase};
pub use use_cases::shared::{TaskError, TaskRunner};
pub use use_cases::upload_document::{
    ExtractedDocument, UploadDocumentError, UploadDocumentUseCase,
};
