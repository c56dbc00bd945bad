//! Axum handlers.
//!
//! Each handler receives [`AppState`] via [`axum::extract::State`], converts
//! the request body into a use case input and maps failures to [`ApiError`].

use super::AppState;
use super::dto::{
    AnalyzeRequest, ChatRequest, ChatResponse, FlashcardsRequest, FlashcardsResponse,
    PlanRequest, PlanResponse, QuizRequest, QuizResponse, UploadResponse,
};
use super::error::ApiError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, State};
use serde_json::{Value, json};
use study_domain::Summary;
use tracing::debug;

/// Multipart field carrying the uploaded document
const UPLOAD_FIELD: &str = "file";

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        })
}

/// GET /
pub(super) async fn root() -> Json<Value> {
    Json(json!({ "message": "Welcome to the study-aid API" }))
}

/// GET /health
pub(super) async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// POST /documents/upload
pub(super) async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let rejected = |e: axum::extract::multipart::MultipartError| ApiError::Rejected {
        status: e.status(),
        message: e.body_text(),
    };

    while let Some(field) = multipart.next_field().await.map_err(rejected)? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await.map_err(rejected)?;
        debug!(filename = %filename, bytes = bytes.len(), "Upload received");

        let document = state.upload.execute(&filename, bytes.to_vec()).await?;
        return Ok(Json(document.into()));
    }

    Err(ApiError::bad_request("No file provided"))
}

/// POST /ai/analyze
pub(super) async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<Summary>, ApiError> {
    let summary = state.analyze.execute(body(payload)?.into()).await?;
    Ok(Json(summary))
}

/// POST /ai/quiz
pub(super) async fn quiz(
    State(state): State<AppState>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, ApiError> {
    let questions = state.quiz.execute(body(payload)?.into()).await?;
    Ok(Json(QuizResponse { questions }))
}

/// POST /ai/chat
pub(super) async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let response = state.chat.execute(body(payload)?.into()).await?;
    Ok(Json(ChatResponse { response }))
}

/// POST /ai/plan
pub(super) async fn plan(
    State(state): State<AppState>,
    payload: Result<Json<PlanRequest>, JsonRejection>,
) -> Result<Json<PlanResponse>, ApiError> {
    let plan = state.plan.execute(body(payload)?.into()).await?;
    Ok(Json(PlanResponse { plan }))
}

/// POST /ai/flashcards
pub(super) async fn flashcards(
    State(state): State<AppState>,
    payload: Result<Json<FlashcardsRequest>, JsonRejection>,
) -> Result<Json<FlashcardsResponse>, ApiError> {
    let flashcards = state.flashcards.execute(body(payload)?.into()).await?;
    Ok(Json(FlashcardsResponse { flashcards }))
}
