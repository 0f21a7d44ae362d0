//! Configuration for the hosted completion endpoint

use serde::Serialize;

/// Credential value shipped in sample configuration; treated as "no credential"
pub const PLACEHOLDER_CREDENTIAL: &str = "YOUR_API_KEY";

const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Fixed sampling parameters sent with every request
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParams {
    pub temperature: f64,
    pub top_k: u32,
    pub top_p: f64,
    pub max_output_tokens: u32,
}

impl GenerationParams {
    pub const TUTOR: Self = Self {
        temperature: 0.7,
        top_k: 40,
        top_p: 0.95,
        max_output_tokens: 1024,
    };
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self::TUTOR
    }
}

/// Settings for the Gemini provider
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    /// API root, e.g. `https://generativelanguage.googleapis.com/v1beta`
    pub base_url: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl GeminiConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: std::env::var("GEMINI_API_KEY").ok(),
            model: std::env::var("GEMINI_MODEL").unwrap_or(defaults.model),
            base_url: std::env::var("GEMINI_BASE_URL").unwrap_or(defaults.base_url),
        }
    }

    /// Config pointing at `base_url` with the given key, other fields default
    pub fn with_endpoint(base_url: impl Into<String>, api_key: Option<&str>) -> Self {
        Self {
            api_key: api_key.map(String::from),
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// The credential to use for outbound calls, if any.
    pub fn credential(&self) -> Option<&str> {
        usable_credential(self.api_key.as_deref())
    }

    /// Full `generateContent` URL, without the key parameter
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

/// Filters out missing, blank and placeholder credentials.
pub fn usable_credential(credential: Option<&str>) -> Option<&str> {
    credential.filter(|key| {
        let key = key.trim();
        !key.is_empty() && key != PLACEHOLDER_CREDENTIAL
    })
}
