//! Generate Flashcards use case.

use super::shared::{TaskError, TaskRunner, require_count, require_text};
use study_domain::{Flashcard, Language, ResponseMode, parse_flashcards};

/// Input for the [`GenerateFlashcardsUseCase`].
#[derive(Debug, Clone)]
pub struct GenerateFlashcardsInput {
    pub text: String,
    pub num_cards: usize,
    pub language: Language,
}

impl GenerateFlashcardsInput {
    pub const DEFAULT_CARDS: usize = 10;
    pub const MAX_CARDS: usize = 50;

    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            num_cards: Self::DEFAULT_CARDS,
            language: Language::default(),
        }
    }

    pub fn with_num_cards(mut self, n: usize) -> Self {
        self.num_cards = n;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}

#[derive(Clone)]
pub struct GenerateFlashcardsUseCase {
    runner: TaskRunner,
}

impl GenerateFlashcardsUseCase {
    pub fn new(runner: TaskRunner) -> Self {
        Self { runner }
    }

    pub async fn execute(
        &self,
        input: GenerateFlashcardsInput,
    ) -> Result<Vec<Flashcard>, TaskError> {
        require_text(&input.text, "text")?;
        require_count(
            input.num_cards,
            "num_cards",
            GenerateFlashcardsInput::MAX_CARDS,
        )?;

        let spec = self
            .runner
            .prompts()
            .flashcards(&input.text, input.num_cards, &input.language);
        self.runner
            .run(spec, ResponseMode::Structured, parse_flashcards)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockGateway, runner};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_generate_flashcards() {
        let json = r#"```json
[{"front": "ATP", "back": "Adenosine triphosphate"},
 {"front": "Organelle making ATP", "back": "Mitochondrion"}]
```"#;
        let gateway = Arc::new(MockGateway::new(&["models/gemini-1.5-flash"]).respond(json));
        let use_case = GenerateFlashcardsUseCase::new(runner(gateway.clone()));

        let cards = use_case
            .execute(GenerateFlashcardsInput::new("Cell biology").with_num_cards(2))
            .await
            .unwrap();

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].front, "ATP");
        let prompt = &gateway.sent()[0].prompt;
        assert!(prompt.to_lowercase().contains("flashcards"));
        assert!(prompt.contains("Cell biology"));
    }

    #[tokio::test]
    async fn test_default_count_in_prompt() {
        let gateway = Arc::new(
            MockGateway::new(&["models/gemini-1.5-flash"])
                .respond(r#"{"flashcards": [{"front": "a", "back": "b"}]}"#),
        );
        let use_case = GenerateFlashcardsUseCase::new(runner(gateway.clone()));

        use_case
            .execute(GenerateFlashcardsInput::new("text"))
            .await
            .unwrap();
        assert!(gateway.sent()[0].prompt.contains("exactly 10 flashcards"));
    }
}
