//! Language value object for study aid output

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Language codes with a known common name, used in the language directive.
const KNOWN_LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("fr", "French"),
    ("es", "Spanish"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("nl", "Dutch"),
    ("pl", "Polish"),
    ("ru", "Russian"),
    ("tr", "Turkish"),
    ("ar", "Arabic"),
    ("hi", "Hindi"),
    ("zh", "Chinese"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
];

/// Persona variants that have hand-written wording.
///
/// Any language without its own variant uses [`Persona::English`]; the
/// output language is still enforced separately by the language directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persona {
    English,
    French,
}

/// Target language of a generated study aid (Value Object)
///
/// Holds a normalized, lowercase language code. An empty code falls back
/// to English.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Language {
    code: String,
}

impl Language {
    /// Create a language from a code such as `"fr"` or `"FR-ca"`
    pub fn new(code: impl AsRef<str>) -> Self {
        let code = code.as_ref().trim().to_lowercase();
        if code.is_empty() {
            Self::default()
        } else {
            Self { code }
        }
    }

    /// English, the default output language
    pub fn english() -> Self {
        Self::default()
    }

    /// Get the language code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Primary subtag of the code (`"fr"` for `"fr-ca"`)
    pub fn primary(&self) -> &str {
        self.code
            .split(['-', '_'])
            .next()
            .unwrap_or(self.code.as_str())
    }

    /// Human readable name, if the language is known
    pub fn common_name(&self) -> Option<&'static str> {
        let primary = self.primary();
        KNOWN_LANGUAGES
            .iter()
            .find(|(code, _)| *code == primary)
            .map(|(_, name)| *name)
    }

    /// Persona variant used for this language
    pub fn persona(&self) -> Persona {
        match self.primary() {
            "fr" => Persona::French,
            _ => Persona::English,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Self {
            code: "en".to_string(),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

impl From<&str> for Language {
    fn from(s: &str) -> Self {
        Language::new(s)
    }
}

impl Serialize for Language {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.code)
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Language::new(s))
    }
}
