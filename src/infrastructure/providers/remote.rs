// ============================================================
// REMOTE PROVIDER
// ============================================================
// Generation backed by an LLM chat endpoint

use super::TestCaseProvider;
use crate::application::use_cases::prompt_builder::PromptBuilder;
use crate::domain::error::Result;
use crate::domain::generation::{
    GenerationContext, GenerationMetadata, GenerationResult, TestArtifact,
};
use crate::domain::llm_config::LLMConfig;
use crate::infrastructure::llm_clients::LLMClient;
use crate::infrastructure::response::{clean_llm_response, extract_json_payload};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

const SYSTEM_PROMPT: &str =
    "You are an expert QA engineer producing structured test cases as JSON.";

pub struct RemoteProvider {
    name: String,
    config: LLMConfig,
    client: Arc<dyn LLMClient + Send + Sync>,
}

impl RemoteProvider {
    pub fn new(
        name: impl Into<String>,
        config: LLMConfig,
        client: Arc<dyn LLMClient + Send + Sync>,
    ) -> Self {
        Self {
            name: name.into(),
            config,
            client,
        }
    }

    async fn run_generation(&self, context: &GenerationContext) -> Result<Vec<TestArtifact>> {
        let prompt = PromptBuilder::build(context);
        debug!(provider = %self.name, prompt_len = prompt.len(), "Sending generation prompt");

        let raw = self
            .client
            .generate(&self.config, SYSTEM_PROMPT, &prompt)
            .await?;
        let cleaned = clean_llm_response(&raw);
        let payload = extract_json_payload(&cleaned)?;
        PromptBuilder::parse_artifacts(payload, context)
    }

    fn metadata(&self, context: &GenerationContext) -> GenerationMetadata {
        GenerationMetadata::new(self.name.clone(), self.config.model.clone(), context)
    }
}

#[async_trait]
impl TestCaseProvider for RemoteProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn validate_configuration(&self) -> bool {
        let has_key = self
            .config
            .api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty());
        has_key && !self.config.base_url.trim().is_empty()
    }

    async fn generate_test_cases(&self, context: &GenerationContext) -> GenerationResult {
        let started = Instant::now();
        match self.run_generation(context).await {
            Ok(artifacts) => GenerationResult::completed(
                artifacts,
                started.elapsed().as_millis() as u64,
                self.metadata(context),
            ),
            Err(err) => {
                warn!(provider = %self.name, %err, "Generation failed");
                GenerationResult::failed(
                    format!("Generation failed: {}", err),
                    started.elapsed().as_millis() as u64,
                    self.metadata(context),
                )
            }
        }
    }
}
