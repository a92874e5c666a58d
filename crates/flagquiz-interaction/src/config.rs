//! Oracle endpoint configuration.
//!
//! The key and model come from the environment (`GEMINI_API_KEY`,
//! `GEMINI_MODEL`). A missing, empty, or still-placeholder key means the
//! oracle is unconfigured and every call must go straight to fallback
//! without touching the network.

/// Sentinel left in place by the sample configuration.
pub const PLACEHOLDER_API_KEY: &str = "your-actual-gemini-api-key-here";

/// Model used when `GEMINI_MODEL` is not set.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Credentials and model selection for the Gemini client.
#[derive(Debug, Clone)]
pub struct OracleConfig {
    /// API key, if one was provided.
    pub api_key: Option<String>,
    /// Model identifier appended to the endpoint URL.
    pub model: String,
}

impl OracleConfig {
    /// Builds a config with an explicit key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            model: model.into(),
        }
    }

    /// Builds a config with no key; every oracle call will fall back.
    pub fn unconfigured() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
        }
    }

    /// Loads the config from `GEMINI_API_KEY` and `GEMINI_MODEL`.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("GEMINI_API_KEY").ok(),
            model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
        }
    }

    /// Whether a usable API key is present.
    pub fn is_configured(&self) -> bool {
        match self.api_key.as_deref().map(str::trim) {
            Some("") | None => false,
            Some(key) => key != PLACEHOLDER_API_KEY,
        }
    }
}
