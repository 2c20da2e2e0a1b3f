// src/state.rs
use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::gemini::{GeminiClient, GenerateText};

pub type SharedState = Arc<AppState>;

/// Immutable per-process state; requests share it read-only.
pub struct AppState {
    pub config: AppConfig,
    /// `None` while no API key is configured; /chat refuses requests then.
    pub tutor: Option<Arc<dyn GenerateText>>,
}

impl AppState {
    /// Wire the Gemini client when a key is configured.
    pub fn new(config: AppConfig) -> Self {
        let tutor = config.gemini_api_key.as_ref().map(|key| {
            tracing::info!(model = %config.gemini_model_id, "Gemini tutor enabled");
            Arc::new(GeminiClient::new(key.clone(), config.gemini_model_id.clone()))
                as Arc<dyn GenerateText>
        });
        if tutor.is_none() {
            tracing::warn!("GEMINI_API_KEY not set, chat endpoint disabled");
        }

        Self { config, tutor }
    }

    /// Build state around an explicit generator; tests substitute stubs here.
    pub fn with_tutor(config: AppConfig, tutor: Arc<dyn GenerateText>) -> Self {
        Self {
            config,
            tutor: Some(tutor),
        }
    }
}
