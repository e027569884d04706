// ============================================================
// BOOTSTRAP
// ============================================================
// Wire settings, clients and providers into a ready registry

use crate::infrastructure::config::ProviderSettings;
use crate::infrastructure::llm_clients::{LLMClient, RouterClient};
use crate::infrastructure::providers::{OfflineProvider, ProviderRegistry, RemoteProvider};
use std::sync::Arc;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();
}

/// Build the provider registry from settings. Remote providers are always
/// registered so callers get a configuration error, not an unknown-provider
/// error, when credentials are missing; offline is registered last as the
/// guaranteed fallback.
pub async fn build_registry(settings: &ProviderSettings) -> ProviderRegistry {
    let client: Arc<dyn LLMClient + Send + Sync> = Arc::new(RouterClient::new());

    let mut registry = ProviderRegistry::new();
    registry.register(Arc::new(RemoteProvider::new(
        "openrouter",
        settings.openrouter_config(),
        client.clone(),
    )));
    registry.register(Arc::new(RemoteProvider::new(
        "gemini",
        settings.gemini_config(),
        client,
    )));
    registry.register(Arc::new(OfflineProvider::new()));

    registry.initialize().await;
    registry
}
