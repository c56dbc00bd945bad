//! Model identifier value object and catalog selection rules

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Prefix the provider puts in front of catalog model names.
const CATALOG_PREFIX: &str = "models/";

/// Identifier of a provider model (Value Object)
///
/// Opaque to the rest of the system. Catalog names such as
/// `models/gemini-1.5-flash` are stored without the `models/` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelId(String);

impl ModelId {
    pub fn new(name: impl AsRef<str>) -> Self {
        let name = name.as_ref().trim();
        let name = name.strip_prefix(CATALOG_PREFIX).unwrap_or(name);
        Self(name.to_string())
    }

    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the identifier contains a family substring (e.g. `"gemini"`)
    pub fn is_family(&self, family: &str) -> bool {
        !family.is_empty() && self.0.to_lowercase().contains(&family.to_lowercase())
    }
}

impl Default for ModelId {
    /// Returns the hardcoded fallback model
    fn default() -> Self {
        ModelId::new(ModelPreferences::DEFAULT_FALLBACK)
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ModelId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ModelId::new(s))
    }
}

impl Serialize for ModelId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ModelId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(ModelId::new(s))
    }
}

/// Outcome of matching the catalog against [`ModelPreferences`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelChoice {
    /// An entry of the preference list is in the catalog
    Preferred(ModelId),
    /// No preferred entry; first catalog model of the recognized family
    FamilyMatch(ModelId),
    /// Nothing usable in the catalog
    NoMatch,
}

/// Ordered model preferences used to pick a model from the live catalog
///
/// `preferred` runs fastest/cheapest first, most capable last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelPreferences {
    pub preferred: Vec<ModelId>,
    pub family: String,
    pub fallback: ModelId,
}

impl ModelPreferences {
    pub const DEFAULT_FALLBACK: &'static str = "gemini-2.0-flash";
    pub const DEFAULT_FAMILY: &'static str = "gemini";

    pub fn new(preferred: Vec<ModelId>) -> Self {
        Self {
            preferred,
            ..Self::default()
        }
    }

    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = family.into();
        self
    }

    pub fn with_fallback(mut self, fallback: ModelId) -> Self {
        self.fallback = fallback;
        self
    }

    /// Pick a model from the catalog.
    ///
    /// Preference list order wins over catalog order.
    pub fn choose(&self, catalog: &[ModelId]) -> ModelChoice {
        if let Some(model) = self
            .preferred
            .iter()
            .find(|wanted| catalog.contains(wanted))
        {
            return ModelChoice::Preferred(model.clone());
        }

        catalog
            .iter()
            .find(|m| m.is_family(&self.family))
            .map(|m| ModelChoice::FamilyMatch(m.clone()))
            .unwrap_or(ModelChoice::NoMatch)
    }
}

impl Default for ModelPreferences {
    fn default() -> Self {
        Self {
            preferred: [
                "gemini-1.5-flash",
                "gemini-1.5-flash-latest",
                "gemini-2.0-flash",
                "gemini-2.5-flash",
                "gemini-1.5-pro",
                "gemini-2.5-pro",
            ]
            .into_iter()
            .map(ModelId::new)
            .collect(),
            family: Self::DEFAULT_FAMILY.to_string(),
            fallback: ModelId::new(Self::DEFAULT_FALLBACK),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<ModelId> {
        names.iter().map(ModelId::new).collect()
    }

    #[test]
    fn test_strips_catalog_prefix() {
        let model = ModelId::new("models/gemini-1.5-flash");
        assert_eq!(model.as_str(), "gemini-1.5-flash");
        assert_eq!(model, "gemini-1.5-flash".parse().unwrap());
    }

    #[test]
    fn test_preference_order_beats_catalog_order() {
        let prefs = ModelPreferences::new(ids(&["gemini-1.5-flash", "gemini-2.0-flash"]));
        let catalog = ids(&["gemini-2.0-flash", "gemini-1.5-flash"]);
        assert_eq!(
            prefs.choose(&catalog),
            ModelChoice::Preferred(ModelId::new("gemini-1.5-flash"))
        );
    }

    #[test]
    fn test_family_match_when_no_preferred_model() {
        let prefs = ModelPreferences::new(ids(&["gemini-1.5-flash"]));
        let catalog = ids(&["text-bison-001", "gemini-exp-1206", "gemini-3.0-ultra"]);
        assert_eq!(
            prefs.choose(&catalog),
            ModelChoice::FamilyMatch(ModelId::new("gemini-exp-1206"))
        );
    }

    #[test]
    fn test_no_match() {
        let prefs = ModelPreferences::default();
        assert_eq!(prefs.choose(&ids(&["text-bison-001"])), ModelChoice::NoMatch);
        assert_eq!(prefs.choose(&[]), ModelChoice::NoMatch);
    }

    #[test]
    fn test_family_detection_is_case_insensitive() {
        assert!(ModelId::new("Gemini-Pro").is_family("gemini"));
        assert!(!ModelId::new("gemini-pro").is_family(""));
    }

    #[test]
    fn test_default_fallback() {
        assert_eq!(ModelId::default().as_str(), "gemini-2.0-flash");
    }
}
