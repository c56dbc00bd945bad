//! Use cases (application services)
//!
//! One module per study task. The five generation tasks share a
//! [`shared::TaskRunner`]; document upload only needs a text extractor.

pub mod analyze_content;
pub mod chat_with_document;
pub mod generate_flashcards;
pub mod generate_quiz;
pub mod plan_study;
pub mod shared;
pub mod upload_document;
