// ============================================================
// LLM CLIENTS
// ============================================================
// Thin HTTP adapters over the chat completion APIs used by the
// remote generation providers

pub mod gemini;
pub mod openrouter;

use crate::domain::error::Result;
use crate::domain::llm_config::{LLMConfig, LLMProvider};
use async_trait::async_trait;
use gemini::GeminiClient;
use openrouter::OpenRouterClient;

#[async_trait]
pub trait LLMClient {
    /// Run one system+user completion and return the raw text output
    async fn generate(&self, config: &LLMConfig, system: &str, user: &str) -> Result<String>;
}

/// Dispatches to the concrete client named by the config
pub struct RouterClient {
    openrouter: OpenRouterClient,
    gemini: GeminiClient,
}

impl RouterClient {
    pub fn new() -> Self {
        Self {
            openrouter: OpenRouterClient::new(),
            gemini: GeminiClient::new(),
        }
    }
}

impl Default for RouterClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LLMClient for RouterClient {
    async fn generate(&self, config: &LLMConfig, system: &str, user: &str) -> Result<String> {
        match config.provider {
            LLMProvider::Gemini => self.gemini.generate(config, system, user).await,
            _ => self.openrouter.generate(config, system, user).await,
        }
    }
}
