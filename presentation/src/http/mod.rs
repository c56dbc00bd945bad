//! HTTP API served with axum.
//!
//! ## URL layout
//!
//! ```text
//! GET  /                   welcome message
//! GET  /health
//! POST /documents/upload   multipart field `file`, PDF only
//! POST /ai/analyze
//! POST /ai/quiz
//! POST /ai/chat
//! POST /ai/plan
//! POST /ai/flashcards
//! ```
//!
//! [`serve`] wires a [`CancellationToken`] to axum's graceful shutdown.

pub mod dto;
pub mod error;
mod handlers;

pub use error::ApiError;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::http::request::Parts;
use axum::routing::{get, post};
use std::sync::Arc;
use study_application::{
    AnalyzeContentUseCase, ChatWithDocumentUseCase, GenerateFlashcardsUseCase,
    GenerateQuizUseCase, PlanStudyUseCase, TaskRunner, TextExtractor, UploadDocumentUseCase,
};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Upper bound for an uploaded document
pub const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Axum router state injected into every handler.
///
/// Cheap to clone: every use case only holds reference-counted parts.
#[derive(Clone)]
pub struct AppState {
    pub analyze: AnalyzeContentUseCase,
    pub quiz: GenerateQuizUseCase,
    pub chat: ChatWithDocumentUseCase,
    pub plan: PlanStudyUseCase,
    pub flashcards: GenerateFlashcardsUseCase,
    pub upload: UploadDocumentUseCase,
}

impl AppState {
    pub fn new(runner: TaskRunner, extractor: Arc<dyn TextExtractor>) -> Self {
        Self {
            analyze: AnalyzeContentUseCase::new(runner.clone()),
            quiz: GenerateQuizUseCase::new(runner.clone()),
            chat: ChatWithDocumentUseCase::new(runner.clone()),
            plan: PlanStudyUseCase::new(runner.clone()),
            flashcards: GenerateFlashcardsUseCase::new(runner),
            upload: UploadDocumentUseCase::new(extractor),
        }
    }
}

pub fn router(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route(
            "/documents/upload",
            post(handlers::upload).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/ai/analyze", post(handlers::analyze))
        .route("/ai/quiz", post(handlers::quiz))
        .route("/ai/chat", post(handlers::chat))
        .route("/ai/plan", post(handlers::plan))
        .route("/ai/flashcards", post(handlers::flashcards))
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Configured origins plus any `http://localhost:<port>`.
///
/// Credentials are allowed, so methods and headers are mirrored from the
/// preflight request instead of using a wildcard.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<String> = origins
        .iter()
        .map(|o| o.trim_end_matches('/').to_string())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _: &Parts| {
                origin.to_str().is_ok_and(|origin| {
                    is_local_origin(origin) || origins.iter().any(|o| o == origin)
                })
            },
        ))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

fn is_local_origin(origin: &str) -> bool {
    origin
        .strip_prefix("http://localhost:")
        .is_some_and(|port| port.parse::<u16>().is_ok())
}

/// Run the API until `shutdown` fires.
pub async fn serve(
    listener: TcpListener,
    router: Router,
    shutdown: CancellationToken,
) -> std::io::Result<()> {
    let addr = listener.local_addr()?;
    info!(%addr, "study-aid API listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    info!(%addr, "study-aid API shut down");
    Ok(())
}
