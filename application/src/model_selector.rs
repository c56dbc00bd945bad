//! Model selection against the provider's live catalog.
//!
//! [`ModelSelector`] resolves a usable [`ModelId`] once and memoizes it for
//! the life of the process. The cache is a [`OnceLock`]: readers never block,
//! no lock is held across the catalog request, and concurrent first
//! resolutions simply race to set the same value.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use std::sync::{Arc, OnceLock};
use study_domain::{ModelChoice, ModelId, ModelPreferences};
use tracing::{info, warn};

pub struct ModelSelector {
    gateway: Arc<dyn LlmGateway>,
    preferences: ModelPreferences,
    resolved: OnceLock<ModelId>,
}

impl ModelSelector {
    pub fn new(gateway: Arc<dyn LlmGateway>, preferences: ModelPreferences) -> Self {
        Self {
            gateway,
            preferences,
            resolved: OnceLock::new(),
        }
    }

    pub fn preferences(&self) -> &ModelPreferences {
        &self.preferences
    }

    /// The memoized model, if one has been resolved
    pub fn cached(&self) -> Option<&ModelId> {
        self.resolved.get()
    }

    /// Resolve the model to use for generation.
    ///
    /// Catalog failures fall back to the configured default and are not
    /// memoized, so a later call retries the lookup. Only a missing
    /// credential is an error.
    pub async fn resolve(&self) -> Result<ModelId, GatewayError> {
        if let Some(model) = self.resolved.get() {
            return Ok(model.clone());
        }

        let catalog = match self.gateway.list_models().await {
            Ok(catalog) => catalog,
            // A rejected key still falls back; only an absent one is fatal
            Err(GatewayError::Configuration(msg)) => {
                return Err(GatewayError::Configuration(msg));
            }
            Err(e) => {
                warn!(
                    error = %e,
                    fallback = %self.preferences.fallback,
                    "Model catalog lookup failed, using fallback model"
                );
                return Ok(self.preferences.fallback.clone());
            }
        };

        let model = match self.preferences.choose(&catalog) {
            ModelChoice::Preferred(model) => {
                info!(model = %model, "Selected preferred model");
                model
            }
            ModelChoice::FamilyMatch(model) => {
                info!(
                    model = %model,
                    family = %self.preferences.family,
                    "No preferred model in catalog, selected first family match"
                );
                model
            }
            ModelChoice::NoMatch => {
                warn!(
                    catalog_size = catalog.len(),
                    fallback = %self.preferences.fallback,
                    "No usable model in catalog, using fallback model"
                );
                self.preferences.fallback.clone()
            }
        };

        Ok(self.resolved.get_or_init(|| model).clone())
    }
}
