use std::env;

pub const DEFAULT_MODEL_ID: &str = "gemini-1.5-flash";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

const MISSING_KEY_WARNING: &str =
    "Missing GEMINI_API_KEY in environment (.env). Chatbot will be disabled.";

/// Process-wide settings, read once at startup and carried in the app state.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    /// Credential for the Gemini API. Optional: the server still starts
    /// without it, but /chat refuses requests until it is set.
    pub gemini_api_key: Option<String>,
    pub gemini_model_id: String,
}

impl AppConfig {
    /// Read configuration from the environment.
    ///
    /// - `BIND_ADDR`: listen address (default `0.0.0.0:3000`)
    /// - `GEMINI_API_KEY`: Gemini credential; an empty value counts as unset
    /// - `GEMINI_MODEL_ID`: model override (default `gemini-1.5-flash`)
    pub fn from_env() -> Self {
        let gemini_api_key = env::var("GEMINI_API_KEY").ok().filter(|key| !key.is_empty());
        let gemini_model_id = env::var("GEMINI_MODEL_ID")
            .ok()
            .filter(|model| !model.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL_ID.to_string());
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        Self {
            bind_addr,
            gemini_api_key,
            gemini_model_id,
        }
    }

    /// Banner text for the landing page while the key is unconfigured.
    pub fn missing_key_warning(&self) -> Option<&'static str> {
        if self.gemini_api_key.is_some() {
            None
        } else {
            Some(MISSING_KEY_WARNING)
        }
    }
}
