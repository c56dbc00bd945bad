//! Gemini REST gateway
//!
//! Implements the `LlmGateway` port over the `generativelanguage` v1beta API
//! with one shared `reqwest::Client`.

use super::error::GeminiError;
use super::types::{
    CatalogModel, GenerateContentRequest, GenerateContentResponse, ListModelsResponse,
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use study_application::ports::llm_gateway::{GatewayError, LlmGateway};
use study_domain::{ModelId, ResponseMode};
use tracing::debug;

/// Header carrying the API key
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Upper bound on catalog pages fetched in one listing
const MAX_CATALOG_PAGES: usize = 10;

/// Connection settings for [`GeminiGateway`]
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Resolved API key, if any
    pub api_key: Option<String>,
    /// Environment variable the key is read from, for error messages
    pub api_key_env: String,
    pub base_url: String,
    pub request_timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: "GEMINI_API_KEY".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            request_timeout: Duration::from_secs(120),
        }
    }
}

pub struct GeminiGateway {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiGateway {
    pub fn new(config: GeminiConfig) -> Result<Self, GeminiError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("study-aid/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GeminiError::Client(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key().is_ok()
    }

    /// Full model catalog, across all pages.
    pub async fn catalog(&self) -> Result<Vec<CatalogModel>, GeminiError> {
        let key = self.api_key()?;
        let mut models = Vec::new();
        let mut page_token: Option<String> = None;

        for _ in 0..MAX_CATALOG_PAGES {
            let mut request = self
                .client
                .get(self.url("models"))
                .header(API_KEY_HEADER, key)
                .query(&[("pageSize", "1000")]);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token.as_str())]);
            }

            let page: ListModelsResponse = self.send(request).await?;
            models.extend(page.models);

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        debug!(count = models.len(), "Fetched model catalog");
        Ok(models)
    }

    pub async fn generate_content(
        &self,
        model: &ModelId,
        prompt: &str,
        mode: ResponseMode,
    ) -> Result<String, GeminiError> {
        let key = self.api_key()?;
        let request = self
            .client
            .post(self.url(&format!("models/{}:generateContent", model.as_str())))
            .header(API_KEY_HEADER, key)
            .json(&GenerateContentRequest::new(prompt, mode));

        let response: GenerateContentResponse = self.send(request).await?;
        response.into_text()
    }

    fn api_key(&self) -> Result<&str, GeminiError> {
        self.config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| GeminiError::MissingApiKey(self.config.api_key_env.clone()))
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/v1beta/{}",
            self.config.base_url.trim_end_matches('/'),
            path
        )
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, GeminiError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::from_status(status.as_u16(), &body));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| GeminiError::UnexpectedResponse(e.to_string()))
    }
}

#[async_trait]
impl LlmGateway for GeminiGateway {
    async fn list_models(&self) -> Result<Vec<ModelId>, GatewayError> {
        let models = self.catalog().await?;
        Ok(models
            .iter()
            .filter(|m| m.supports_generation())
            .map(CatalogModel::id)
            .collect())
    }

    async fn generate(
        &self,
        model: &ModelId,
        prompt: &str,
        mode: ResponseMode,
    ) -> Result<String, GatewayError> {
        Ok(self.generate_content(model, prompt, mode).await?)
    }
}
