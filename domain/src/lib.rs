//! Domain layer for study-aid
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Prompts
//!
//! Every task prompt combines a teaching persona, an explicit output-language
//! directive, task instructions and source content cut to a content window.
//!
//! ## Study aids
//!
//! - **Summary**: analysis of course content (concepts, difficulty, study time)
//! - **Quiz**: multiple-choice and true/false questions with explanations
//! - **Study plan**: dated sessions covering every topic before an exam
//! - **Flashcards**: front/back cards for active recall
//!
//! Raw model output is validated by the [`study::parsing`] functions before
//! any of these values leave the domain.

pub mod core;
pub mod prompt;
pub mod session;
pub mod study;
pub mod util;

// Re-export commonly used types
pub use core::{
    error::DomainError,
    language::{Language, Persona},
    model::{ModelChoice, ModelId, ModelPreferences},
};
pub use prompt::{PromptBuilder, PromptSpec, PromptTemplate, TaskKind, TaskParams};
pub use session::response::{InvocationResult, ResponseMode};
pub use study::{
    entities::{
        ChatRole, ChatTurn, Difficulty, Flashcard, QuestionKind, QuizQuestion, StudySession,
        Summary,
    },
    parsing::{
        ParseError, parse_chat_reply, parse_flashcards, parse_quiz, parse_study_plan,
        parse_summary,
    },
};
