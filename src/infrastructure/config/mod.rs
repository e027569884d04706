// ============================================================
// SETTINGS
// ============================================================
// Provider credentials and overrides, layered from an optional
// caseforge.toml file and CASEFORGE_-prefixed environment variables

use crate::domain::error::{AppError, Result};
use crate::domain::llm_config::{LLMConfig, LLMProvider};
use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const GEMINI_MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderSettings {
    pub openrouter_api_key: Option<String>,
    pub openrouter_model: Option<String>,
    pub openrouter_base_url: Option<String>,
    pub gemini_api_key: Option<String>,
    pub gemini_model: Option<String>,
    pub gemini_base_url: Option<String>,
}

impl ProviderSettings {
    /// Load settings: `.env` first so the environment pass sees its values,
    /// then `caseforge.toml` (optional), then `CASEFORGE_*` variables on top
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Figment::new()
            .merge(Toml::file("caseforge.toml"))
            .merge(Env::prefixed("CASEFORGE_"))
            .extract()
            .map_err(|e| AppError::ConfigError(format!("Failed to load settings: {}", e)))
    }

    pub fn openrouter_config(&self) -> LLMConfig {
        let defaults = LLMConfig::default();
        LLMConfig {
            provider: LLMProvider::OpenRouter,
            base_url: self
                .openrouter_base_url
                .clone()
                .unwrap_or(defaults.base_url),
            model: self.openrouter_model.clone().unwrap_or(defaults.model),
            api_key: self.openrouter_api_key.clone(),
            ..defaults
        }
    }

    pub fn gemini_config(&self) -> LLMConfig {
        LLMConfig {
            provider: LLMProvider::Gemini,
            base_url: self
                .gemini_base_url
                .clone()
                .unwrap_or_else(|| GEMINI_BASE_URL.to_string()),
            model: self
                .gemini_model
                .clone()
                .unwrap_or_else(|| GEMINI_MODEL.to_string()),
            api_key: self.gemini_api_key.clone(),
            ..LLMConfig::default()
        }
    }
}
