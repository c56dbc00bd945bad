//! API error type and its HTTP mapping.
//!
//! Every failure leaves the server as `{"detail": "<message>"}` with a status
//! chosen from the error class.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use study_application::{
    GatewayError, InvocationError, TaskError, UploadDocumentError,
};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Task(#[from] TaskError),

    #[error(transparent)]
    Upload(#[from] UploadDocumentError),

    /// Request rejected before reaching a use case (bad JSON, bad multipart)
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::Rejected {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Task(TaskError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Task(TaskError::MalformedOutput(_)) => StatusCode::BAD_GATEWAY,
            ApiError::Task(TaskError::Invocation(e)) => invocation_status(e),
            ApiError::Upload(UploadDocumentError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Upload(UploadDocumentError::Extraction(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Rejected { status, .. } => *status,
        }
    }
}

fn invocation_status(error: &InvocationError) -> StatusCode {
    match error {
        InvocationError::Gateway(GatewayError::Configuration(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        InvocationError::Gateway(_) => StatusCode::BAD_GATEWAY,
        InvocationError::RateLimitExhausted { .. } | InvocationError::Cancelled => {
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.to_string();

        if status.is_server_error() {
            warn!(status = status.as_u16(), detail = %detail, "Request failed");
        } else {
            debug!(status = status.as_u16(), detail = %detail, "Request rejected");
        }

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
