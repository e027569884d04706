// ============================================================
// GENERATION PROVIDERS
// ============================================================
// Capability interface over test case generation backends plus the
// registry that routes requests to them

mod offline;
mod remote;

pub use offline::OfflineProvider;
pub use remote::RemoteProvider;

use crate::domain::error::{AppError, Result};
use crate::domain::generation::{GenerationContext, GenerationResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

/// A test case generation backend. Generation itself never errors; a
/// backend that fails reports it inside the result. Errors are reserved
/// for caller mistakes (unknown or misconfigured provider).
#[async_trait]
pub trait TestCaseProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Whether the provider is usable right now (credentials present,
    /// endpoint configured). Must not perform generation work.
    async fn validate_configuration(&self) -> bool;

    async fn generate_test_cases(&self, context: &GenerationContext) -> GenerationResult;
}

/// Routes generation requests by provider name. Built once at startup and
/// passed to callers; registration order decides the default provider.
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn TestCaseProvider>>,
    order: Vec<String>,
    default_provider: String,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
            order: Vec::new(),
            default_provider: String::new(),
        }
    }

    /// Register a provider under its own name. A later registration with
    /// the same name replaces the earlier one without changing the order.
    pub fn register(&mut self, provider: Arc<dyn TestCaseProvider>) {
        let name = provider.name().to_string();
        if self.providers.insert(name.clone(), provider).is_none() {
            self.order.push(name);
        }
    }

    /// Probe every registered provider and pick the default: the first
    /// registered provider whose configuration validates, else "offline".
    pub async fn initialize(&mut self) {
        for name in &self.order {
            let Some(provider) = self.providers.get(name) else {
                continue;
            };
            if provider.validate_configuration().await {
                info!(provider = %name, "Selected default provider");
                self.default_provider = name.clone();
                return;
            }
            warn!(provider = %name, "Provider not configured, skipping");
        }
        self.default_provider = "offline".to_string();
    }

    pub fn default_provider(&self) -> &str {
        &self.default_provider
    }

    /// Provider names in registration order
    pub fn provider_names(&self) -> &[String] {
        &self.order
    }

    /// Generate through the named provider. Unknown names and providers
    /// whose configuration does not validate are caller errors; everything
    /// else is reported inside the returned result.
    pub async fn generate(
        &self,
        provider_name: &str,
        context: &GenerationContext,
    ) -> Result<GenerationResult> {
        let provider = self.providers.get(provider_name).ok_or_else(|| {
            AppError::NotFound(format!("Unknown provider '{}'", provider_name))
        })?;

        if !provider.validate_configuration().await {
            return Err(AppError::ConfigError(format!(
                "Provider '{}' is not configured",
                provider_name
            )));
        }

        info!(provider = %provider_name, stories = context.records.len(), "Generating test cases");
        Ok(provider.generate_test_cases(context).await)
    }

    /// Generate through the default provider chosen at initialization
    pub async fn generate_with_default(
        &self,
        context: &GenerationContext,
    ) -> Result<GenerationResult> {
        self.generate(&self.default_provider, context).await
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::generation::{GenerationMetadata, TestingScope};

    struct StubProvider {
        name: &'static str,
        configured: bool,
    }

    #[async_trait]
    impl TestCaseProvider for StubProvider {
        fn name(&self) -> &str {
            self.name
        }

        async fn validate_configuration(&self) -> bool {
            self.configured
        }

        async fn generate_test_cases(&self, context: &GenerationContext) -> GenerationResult {
            GenerationResult::completed(
                Vec::new(),
                0,
                GenerationMetadata::new(self.name, "stub", context),
            )
        }
    }

    fn context() -> GenerationContext {
        GenerationContext {
            records: Vec::new(),
            modules: vec!["authentication".to_string()],
            user_type: "registered".to_string(),
            scope: TestingScope::Regression,
            include_negative_tests: false,
            include_performance_tests: false,
            include_security_tests: false,
        }
    }

    #[tokio::test]
    async fn test_unknown_provider_is_not_found() {
        let registry = ProviderRegistry::new();
        let result = registry.generate("nope", &context()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_unconfigured_provider_is_config_error() {
        let mut registry = ProviderRegistry::new();
        registry.register(Arc::new(StubProvider {
            name: "remote",
            configured: false,
        }));
        let result = registry.generate("remote", &context()).await;
        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }

    #[tokio::test]
    async fn test_default_is_first_configured_provider() {
        let mut registry = ProviderRegistry::new();
        registry.register(Arc::new(StubProvider {
            name: "first",
            configured: false,
        }));
        registry.register(Arc::new(StubProvider {
            name: "second",
            configured: true,
        }));
        registry.initialize().await;
        assert_eq!(registry.default_provider(), "second");
    }

    #[tokio::test]
    async fn test_default_falls_back_to_offline() {
        let mut registry = ProviderRegistry::new();
        registry.register(Arc::new(StubProvider {
            name: "remote",
            configured: false,
        }));
        registry.initialize().await;
        assert_eq!(registry.default_provider(), "offline");
    }

    #[tokio::test]
    async fn test_generate_delegates_to_named_provider() {
        let mut registry = ProviderRegistry::new();
        registry.register(Arc::new(StubProvider {
            name: "stub",
            configured: true,
        }));
        let result = registry.generate("stub", &context()).await.unwrap();
        assert!(result.success);
        assert_eq!(result.metadata.provider, "stub");
    }
}
