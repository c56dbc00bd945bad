//! Prompt domain
//!
//! Builds the prompt text for each study task. Every prompt is made of a
//! persona clause, an explicit language directive, task instructions and the
//! source content cut to the content window.
//!
//! Building is pure: no I/O, no clock. Callers pass "today" for study plans.

mod persona;
mod spec;
mod template;

pub use persona::{language_directive, persona_clause};
pub use spec::{PromptSpec, TaskKind, TaskParams};
pub use template::PromptTemplate;

use crate::core::language::Language;
use crate::study::entities::ChatTurn;
use crate::util::truncate_chars;
use chrono::NaiveDate;

/// Builds [`PromptSpec`]s for every study task
///
/// Source content longer than `content_window` characters is cut hard at
/// that length before it is embedded.
///
/// # Example
///
/// ```
/// use study_domain::core::language::Language;
/// use study_domain::prompt::PromptBuilder;
///
/// let prompt = PromptBuilder::default()
///     .flashcards("Mitochondria produce ATP.", 5, &Language::new("en"))
///     .render();
/// assert!(prompt.contains("flashcards"));
/// assert!(prompt.contains("Mitochondria produce ATP."));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptBuilder {
    content_window: usize,
}

impl PromptBuilder {
    /// Default content window in characters
    pub const DEFAULT_CONTENT_WINDOW: usize = 30_000;

    pub fn new(content_window: usize) -> Self {
        Self { content_window }
    }

    pub fn content_window(&self) -> usize {
        self.content_window
    }

    pub fn analyze(&self, text: &str, language: &Language) -> PromptSpec {
        self.spec(text, language, TaskParams::Analyze)
    }

    pub fn quiz(&self, text: &str, num_questions: usize, language: &Language) -> PromptSpec {
        self.spec(text, language, TaskParams::Quiz { num_questions })
    }

    /// Chat prompt; only `context` is subject to the content window.
    pub fn chat(
        &self,
        context: &str,
        history: &[ChatTurn],
        message: &str,
        language: &Language,
    ) -> PromptSpec {
        self.spec(
            context,
            language,
            TaskParams::Chat {
                history: history.to_vec(),
                message: message.to_string(),
            },
        )
    }

    pub fn study_plan(
        &self,
        topics: &[String],
        exam_date: NaiveDate,
        hours_per_day: f64,
        today: NaiveDate,
        language: &Language,
    ) -> PromptSpec {
        self.spec(
            "",
            language,
            TaskParams::StudyPlan {
                topics: topics.to_vec(),
                exam_date,
                hours_per_day,
                today,
            },
        )
    }

    pub fn flashcards(&self, text: &str, num_cards: usize, language: &Language) -> PromptSpec {
        self.spec(text, language, TaskParams::Flashcards { num_cards })
    }

    fn spec(&self, content: &str, language: &Language, params: TaskParams) -> PromptSpec {
        PromptSpec::new(
            persona_clause(language),
            language.clone(),
            truncate_chars(content, self.content_window).to_string(),
            params,
        )
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CONTENT_WINDOW)
    }
}
