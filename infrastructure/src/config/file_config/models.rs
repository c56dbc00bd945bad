//! Model selection configuration from TOML (`[models]` section)

use crate::config::validation::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use study_domain::{ModelId, ModelPreferences};

/// Ordered model preferences matched against the live catalog
///
/// # Example
///
/// ```toml
/// [models]
/// preferred = ["gemini-2.5-flash", "gemini-2.0-flash"]  # first available wins
/// family = "gemini"                                     # then first catalog match
/// fallback = "gemini-2.0-flash"                         # when nothing matches
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    pub preferred: Vec<String>,
    pub family: String,
    pub fallback: String,
}

impl Default for FileModelsConfig {
    fn default() -> Self {
        let prefs = ModelPreferences::default();
        Self {
            preferred: prefs
                .preferred
                .iter()
                .map(|m| m.as_str().to_string())
                .collect(),
            family: prefs.family,
            fallback: prefs.fallback.as_str().to_string(),
        }
    }
}

impl FileModelsConfig {
    /// Convert to domain preferences, skipping empty names.
    pub fn to_preferences(&self) -> (ModelPreferences, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        let mut preferred = Vec::new();
        for (i, name) in self.preferred.iter().enumerate() {
            if name.trim().is_empty() {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::EmptyModelName {
                        field: format!("preferred[{}]", i),
                    },
                    format!("models.preferred[{}]: model name cannot be empty, skipped", i),
                ));
            } else {
                preferred.push(ModelId::new(name));
            }
        }

        let mut prefs = ModelPreferences::new(preferred).with_family(self.family.trim());

        if self.fallback.trim().is_empty() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::EmptyModelName {
                    field: "fallback".to_string(),
                },
                format!(
                    "models.fallback: model name cannot be empty, using '{}'",
                    ModelPreferences::DEFAULT_FALLBACK
                ),
            ));
        } else {
            prefs = prefs.with_fallback(ModelId::new(&self.fallback));
        }

        (prefs, issues)
    }
}
