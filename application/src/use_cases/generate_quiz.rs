//! Generate Quiz use case.

use super::shared::{TaskError, TaskRunner, require_count, require_text};
use study_domain::{Language, QuizQuestion, ResponseMode, parse_quiz};

/// Input for the [`GenerateQuizUseCase`].
#[derive(Debug, Clone)]
pub struct GenerateQuizInput {
    pub text: String,
    pub num_questions: usize,
    pub language: Language,
}

impl GenerateQuizInput {
    pub const DEFAULT_QUESTIONS: usize = 5;
    pub const MAX_QUESTIONS: usize = 20;

    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            num_questions: Self::DEFAULT_QUESTIONS,
            language: Language::default(),
        }
    }

    pub fn with_num_questions(mut self, n: usize) -> Self {
        self.num_questions = n;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}

/// Use case for generating a quiz from course content.
///
/// Every returned question has unique `id` and a `correct_answer` taken from
/// its `options`.
#[derive(Clone)]
pub struct GenerateQuizUseCase {
    runner: TaskRunner,
}

impl GenerateQuizUseCase {
    pub fn new(runner: TaskRunner) -> Self {
        Self { runner }
    }

    pub async fn execute(&self, input: GenerateQuizInput) -> Result<Vec<QuizQuestion>, TaskError> {
        require_text(&input.text, "text")?;
        require_count(
            input.num_questions,
            "num_questions",
            GenerateQuizInput::MAX_QUESTIONS,
        )?;

        let spec = self
            .runner
            .prompts()
            .quiz(&input.text, input.num_questions, &input.language);
        self.runner
            .run(spec, ResponseMode::Structured, parse_quiz)
            .await
    }
}
