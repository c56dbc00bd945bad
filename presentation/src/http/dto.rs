//! Request and response bodies of the HTTP API

use serde::{Deserialize, Serialize};
use study_application::{
    AnalyzeContentInput, ChatWithDocumentInput, ExtractedDocument, GenerateFlashcardsInput,
    GenerateQuizInput, PlanStudyInput,
};
use study_domain::{ChatTurn, Flashcard, Language, QuizQuestion, StudySession};

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
    #[serde(default)]
    pub language: Option<Language>,
}

impl From<AnalyzeRequest> for AnalyzeContentInput {
    fn from(req: AnalyzeRequest) -> Self {
        AnalyzeContentInput::new(req.text).with_language(req.language.unwrap_or_default())
    }
}

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub text: String,
    pub num_questions: Option<usize>,
    #[serde(default)]
    pub language: Option<Language>,
}

impl From<QuizRequest> for GenerateQuizInput {
    fn from(req: QuizRequest) -> Self {
        GenerateQuizInput::new(req.text)
            .with_num_questions(
                req.num_questions
                    .unwrap_or(GenerateQuizInput::DEFAULT_QUESTIONS),
            )
            .with_language(req.language.unwrap_or_default())
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub context: String,
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
    #[serde(default)]
    pub language: Option<Language>,
}

impl From<ChatRequest> for ChatWithDocumentInput {
    fn from(req: ChatRequest) -> Self {
        ChatWithDocumentInput::new(req.context, req.message)
            .with_history(req.history)
            .with_language(req.language.unwrap_or_default())
    }
}

#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    pub topics: Vec<String>,
    pub exam_date: String,
    pub hours_per_day: f64,
    #[serde(default)]
    pub language: Option<Language>,
}

impl From<PlanRequest> for PlanStudyInput {
    fn from(req: PlanRequest) -> Self {
        PlanStudyInput::new(req.topics, req.exam_date, req.hours_per_day)
            .with_language(req.language.unwrap_or_default())
    }
}

#[derive(Debug, Deserialize)]
pub struct FlashcardsRequest {
    pub text: String,
    pub num_cards: Option<usize>,
    #[serde(default)]
    pub language: Option<Language>,
}

impl From<FlashcardsRequest> for GenerateFlashcardsInput {
    fn from(req: FlashcardsRequest) -> Self {
        GenerateFlashcardsInput::new(req.text)
            .with_num_cards(req.num_cards.unwrap_or(GenerateFlashcardsInput::DEFAULT_CARDS))
            .with_language(req.language.unwrap_or_default())
    }
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub plan: Vec<StudySession>,
}

#[derive(Debug, Serialize)]
pub struct FlashcardsResponse {
    pub flashcards: Vec<Flashcard>,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub filename: String,
    pub content_length: usize,
    pub extracted_text: String,
    pub message: &'static str,
}

impl From<ExtractedDocument> for UploadResponse {
    fn from(document: ExtractedDocument) -> Self {
        Self {
            content_length: document.content_length(),
            filename: document.filename,
            extracted_text: document.extracted_text,
            message: "Document uploaded and processed successfully",
        }
    }
}
