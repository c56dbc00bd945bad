//! Wire types for the Gemini `generativelanguage` REST API
//!
//! Only the fields this adapter reads or writes are modelled; everything
//! else in the provider's JSON is ignored.

use super::error::GeminiError;
use serde::{Deserialize, Serialize};
use study_domain::{ModelId, ResponseMode};

/// Generation method a catalog model must support to be usable
pub const GENERATE_CONTENT: &str = "generateContent";

const JSON_MIME_TYPE: &str = "application/json";

// ─── Requests ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
}

impl GenerateContentRequest {
    /// Single-turn request; structured mode asks for a JSON MIME type.
    pub fn new(prompt: &str, mode: ResponseMode) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
                role: Some("user".to_string()),
            }],
            generation_config: mode.is_structured().then(|| GenerationConfig {
                response_mime_type: JSON_MIME_TYPE.to_string(),
            }),
        }
    }
}

// ─── Responses ───────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    pub fn into_text(self) -> Result<String, GeminiError> {
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(GeminiError::Blocked(reason));
        }

        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| GeminiError::UnexpectedResponse("no candidates".to_string()))?;

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.is_empty() {
            let reason = candidate
                .finish_reason
                .unwrap_or_else(|| "unknown".to_string());
            return Err(GeminiError::UnexpectedResponse(format!(
                "candidate has no text (finish reason: {})",
                reason
            )));
        }

        Ok(text)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListModelsResponse {
    #[serde(default)]
    pub models: Vec<CatalogModel>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// One entry of the provider's model catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogModel {
    /// Catalog name, e.g. `models/gemini-1.5-flash`
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub supported_generation_methods: Vec<String>,
}

impl CatalogModel {
    pub fn supports_generation(&self) -> bool {
        self.supported_generation_methods
            .iter()
            .any(|m| m == GENERATE_CONTENT)
    }

    pub fn id(&self) -> ModelId {
        ModelId::new(&self.name)
    }
}

/// Error envelope returned with non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}
