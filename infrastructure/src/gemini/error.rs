//! Error types for the Gemini adapter

use super::types::ErrorEnvelope;
use study_application::ports::llm_gateway::GatewayError;
use thiserror::Error;

/// Provider status string for quota exhaustion
const RESOURCE_EXHAUSTED: &str = "RESOURCE_EXHAUSTED";

/// Errors that can occur when talking to the Gemini API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("Gemini API key not configured (set {0} or provider.api_key)")]
    MissingApiKey(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Gemini API error (HTTP {status}): {message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("Response blocked by provider: {0}")]
    Blocked(String),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl GeminiError {
    /// Build an API error from a non-2xx status and its raw body.
    pub fn from_status(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => GeminiError::Api {
                status: envelope.error.code.unwrap_or(status),
                code: envelope.error.status,
                message: envelope.error.message,
            },
            Err(_) => GeminiError::Api {
                status,
                code: None,
                message: body.trim().to_string(),
            },
        }
    }

    /// HTTP 429 or a `RESOURCE_EXHAUSTED` status
    pub fn is_rate_limited(&self) -> bool {
        match self {
            GeminiError::Api { status, code, .. } => {
                *status == 429 || code.as_deref() == Some(RESOURCE_EXHAUSTED)
            }
            _ => false,
        }
    }
}

impl From<GeminiError> for GatewayError {
    fn from(e: GeminiError) -> Self {
        if e.is_rate_limited() {
            return GatewayError::RateLimited(e.to_string());
        }
        match e {
            GeminiError::MissingApiKey(_) | GeminiError::Client(_) => {
                GatewayError::Configuration(e.to_string())
            }
            GeminiError::Api { status, .. } => GatewayError::Provider {
                status,
                message: e.to_string(),
            },
            GeminiError::Request(_) => GatewayError::Transport(e.to_string()),
            GeminiError::Blocked(_) | GeminiError::UnexpectedResponse(_) => {
                GatewayError::InvalidResponse(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_exhausted_is_rate_limited() {
        let err = GeminiError::from_status(
            429,
            r#"{"error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}}"#,
        );
        assert!(err.is_rate_limited());
        assert!(GatewayError::from(err).is_rate_limited());
    }

    #[test]
    fn test_status_without_envelope() {
        let err = GeminiError::from_status(429, "Too Many Requests");
        assert!(err.is_rate_limited());

        let err = GeminiError::from_status(503, "  upstream down \n");
        assert!(!err.is_rate_limited());
        assert_eq!(
            GatewayError::from(err),
            GatewayError::Provider {
                status: 503,
                message: "Gemini API error (HTTP 503): upstream down".to_string()
            }
        );
    }

    #[test]
    fn test_rejected_key_is_a_provider_error() {
        let err = GeminiError::from_status(
            403,
            r#"{"error": {"code": 403, "message": "API key invalid", "status": "PERMISSION_DENIED"}}"#,
        );
        assert_eq!(
            GatewayError::from(err),
            GatewayError::Provider {
                status: 403,
                message: "Gemini API error (HTTP 403): API key invalid".to_string()
            }
        );
    }

    #[test]
    fn test_missing_key_is_a_configuration_error() {
        assert!(matches!(
            GatewayError::from(GeminiError::MissingApiKey("GEMINI_API_KEY".into())),
            GatewayError::Configuration(msg) if msg.contains("GEMINI_API_KEY")
        ));
    }

    #[test]
    fn test_unusable_candidates_are_invalid_responses() {
        let blocked = GatewayError::from(GeminiError::Blocked("SAFETY".into()));
        assert_eq!(
            blocked,
            GatewayError::InvalidResponse("Response blocked by provider: SAFETY".into())
        );
        assert!(!blocked.to_string().contains("Provider error"));

        let empty = GatewayError::from(GeminiError::UnexpectedResponse("no candidates".into()));
        assert!(matches!(empty, GatewayError::InvalidResponse(msg) if msg.contains("no candidates")));
    }

    #[test]
    fn test_envelope_code_overrides_status() {
        let err = GeminiError::from_status(
            500,
            r#"{"error": {"code": 400, "message": "bad", "status": "INVALID_ARGUMENT"}}"#,
        );
        assert!(matches!(
            &err,
            GeminiError::Api { status: 400, code: Some(code), .. } if code == "INVALID_ARGUMENT"
        ));
        assert_eq!(err.to_string(), "Gemini API error (HTTP 400): bad");
    }
}
