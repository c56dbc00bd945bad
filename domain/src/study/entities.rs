//! Study aid value objects returned to callers

use serde::{Deserialize, Serialize};

/// Estimated difficulty of the analyzed material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// Content analysis: summary, key concepts, difficulty and study time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub summary: String,
    pub key_concepts: Vec<String>,
    pub difficulty: Difficulty,
    pub estimated_study_time: String,
}

/// Kind of quiz question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    MultipleChoice,
    TrueFalse,
}

impl QuestionKind {
    /// Number of options a question of this kind must carry, if fixed
    pub fn required_options(&self) -> Option<usize> {
        match self {
            QuestionKind::MultipleChoice => None,
            QuestionKind::TrueFalse => Some(2),
        }
    }
}

/// A single quiz question
///
/// `correct_answer` is always one of `options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
}

/// Speaker of a chat turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn label(&self) -> &'static str {
        match self {
            ChatRole::User => "User",
            ChatRole::Assistant => "Assistant",
        }
    }
}

/// One prior message of a document chat, supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// One planned study session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySession {
    pub date: String,
    pub topic: String,
    pub activity: String,
    pub duration: String,
    pub description: String,
}

/// A question/answer flashcard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
}
