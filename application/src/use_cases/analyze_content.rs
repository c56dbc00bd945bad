//! Analyze Content use case.
//!
//! Summarizes course content and rates its difficulty.

use super::shared::{TaskError, TaskRunner, require_text};
use study_domain::{Language, ResponseMode, Summary, parse_summary};

/// Input for the [`AnalyzeContentUseCase`].
#[derive(Debug, Clone)]
pub struct AnalyzeContentInput {
    pub text: String,
    pub language: Language,
}

impl AnalyzeContentInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: Language::default(),
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}

/// Use case for analyzing course content.
#[derive(Clone)]
pub struct AnalyzeContentUseCase {
    runner: TaskRunner,
}

impl AnalyzeContentUseCase {
    pub fn new(runner: TaskRunner) -> Self {
        Self { runner }
    }

    pub async fn execute(&self, input: AnalyzeContentInput) -> Result<Summary, TaskError> {
        require_text(&input.text, "text")?;

        let spec = self.runner.prompts().analyze(&input.text, &input.language);
        self.runner
            .run(spec, ResponseMode::Structured, parse_summary)
            .await
    }
}
