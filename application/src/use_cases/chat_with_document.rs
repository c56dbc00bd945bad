//! Chat With Document use case.
//!
//! Answers a student's message about a document. The conversation is not
//! stored: callers send the full history with every turn.

use super::shared::{TaskError, TaskRunner, require_text};
use study_domain::{ChatTurn, Language, ResponseMode, parse_chat_reply};

/// Input for the [`ChatWithDocumentUseCase`].
#[derive(Debug, Clone)]
pub struct ChatWithDocumentInput {
    /// Document text the answer should be grounded in
    pub context: String,
    pub message: String,
    /// Prior turns, oldest first
    pub history: Vec<ChatTurn>,
    pub language: Language,
}

impl ChatWithDocumentInput {
    pub fn new(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            message: message.into(),
            history: Vec::new(),
            language: Language::default(),
        }
    }

    pub fn with_history(mut self, history: Vec<ChatTurn>) -> Self {
        self.history = history;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}

#[derive(Clone)]
pub struct ChatWithDocumentUseCase {
    runner: TaskRunner,
}

impl ChatWithDocumentUseCase {
    pub fn new(runner: TaskRunner) -> Self {
        Self { runner }
    }

    /// Returns the assistant reply as plain text.
    pub async fn execute(&self, input: ChatWithDocumentInput) -> Result<String, TaskError> {
        require_text(&input.message, "message")?;

        let spec = self.runner.prompts().chat(
            &input.context,
            &input.history,
            &input.message,
            &input.language,
        );
        self.runner
            .run(spec, ResponseMode::Plain, parse_chat_reply)
            .await
    }
}
