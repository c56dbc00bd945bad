//! Prompt specification: everything needed to render one task prompt

use super::persona::language_directive;
use super::template::PromptTemplate;
use crate::core::language::Language;
use crate::study::entities::ChatTurn;
use chrono::NaiveDate;

/// Kind of study task a prompt is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Analyze,
    Quiz,
    Chat,
    StudyPlan,
    Flashcards,
}

impl TaskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Analyze => "analyze",
            TaskKind::Quiz => "quiz",
            TaskKind::Chat => "chat",
            TaskKind::StudyPlan => "study_plan",
            TaskKind::Flashcards => "flashcards",
        }
    }
}

impl std::fmt::Display for TaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Task-specific prompt parameters
#[derive(Debug, Clone, PartialEq)]
pub enum TaskParams {
    Analyze,
    Quiz {
        num_questions: usize,
    },
    Chat {
        history: Vec<ChatTurn>,
        message: String,
    },
    StudyPlan {
        topics: Vec<String>,
        exam_date: NaiveDate,
        hours_per_day: f64,
        today: NaiveDate,
    },
    Flashcards {
        num_cards: usize,
    },
}

impl TaskParams {
    pub fn kind(&self) -> TaskKind {
        match self {
            TaskParams::Analyze => TaskKind::Analyze,
            TaskParams::Quiz { .. } => TaskKind::Quiz,
            TaskParams::Chat { .. } => TaskKind::Chat,
            TaskParams::StudyPlan { .. } => TaskKind::StudyPlan,
            TaskParams::Flashcards { .. } => TaskKind::Flashcards,
        }
    }
}

/// A fully specified prompt (Value Object)
///
/// Built by [`PromptBuilder`](super::PromptBuilder) with the content already
/// cut to the content window. Rendering consumes it.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptSpec {
    persona: &'static str,
    language: Language,
    content: String,
    params: TaskParams,
}

impl PromptSpec {
    pub(crate) fn new(
        persona: &'static str,
        language: Language,
        content: String,
        params: TaskParams,
    ) -> Self {
        Self {
            persona,
            language,
            content,
            params,
        }
    }

    pub fn kind(&self) -> TaskKind {
        self.params.kind()
    }

    pub fn persona(&self) -> &str {
        self.persona
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    /// Source content after content-window truncation
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn params(&self) -> &TaskParams {
        &self.params
    }

    /// Render the final prompt string.
    ///
    /// Layout: persona clause, language directive, task instructions, payload.
    pub fn render(self) -> String {
        let mut prompt = String::with_capacity(self.content.len() + 2048);
        prompt.push_str(self.persona);
        prompt.push_str("\n\n");
        prompt.push_str(&language_directive(&self.language));
        prompt.push_str("\n\n");

        match &self.params {
            TaskParams::Analyze => {
                prompt.push_str(PromptTemplate::analyze_instructions());
                prompt.push_str("\n\nText to analyze:\n");
                prompt.push_str(&self.content);
            }
            TaskParams::Quiz { num_questions } => {
                prompt.push_str(&PromptTemplate::quiz_instructions(*num_questions));
                prompt.push_str("\n\nText:\n");
                prompt.push_str(&self.content);
            }
            TaskParams::Flashcards { num_cards } => {
                prompt.push_str(&PromptTemplate::flashcard_instructions(*num_cards));
                prompt.push_str("\n\nText:\n");
                prompt.push_str(&self.content);
            }
            TaskParams::Chat { history, message } => {
                prompt.push_str(PromptTemplate::chat_instructions());
                prompt.push_str(&PromptTemplate::chat_payload(&self.content, history, message));
            }
            TaskParams::StudyPlan {
                topics,
                exam_date,
                hours_per_day,
                today,
            } => {
                prompt.push_str(&PromptTemplate::study_plan_instructions(
                    topics,
                    *exam_date,
                    *hours_per_day,
                    *today,
                ));
            }
        }

        prompt
    }
}
