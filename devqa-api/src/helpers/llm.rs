use crate::config::ApiConfig;
use devqa_llm_sdk::gemini::GeminiClient;
use devqa_llm_sdk::LlmClient;
use std::sync::Arc;
use tracing::warn;

/// Key sent when none is configured; every model call then fails and
/// questions take the system-error fallback.
pub const PLACEHOLDER_API_KEY: &str = "your-gemini-api-key";

pub fn create_llm_client(config: &ApiConfig) -> anyhow::Result<Arc<dyn LlmClient>> {
    let api_key = match config.gemini.api_key.as_deref() {
        Some(key) if !key.trim().is_empty() => key.to_string(),
        _ => {
            warn!("GEMINI_API_KEY is not set; model calls will fail and answers will be escalated");
            PLACEHOLDER_API_KEY.to_string()
        }
    };

    let mut client = GeminiClient::new(api_key)?.with_model(config.gemini.model.clone());
    if let Some(base_url) = &config.gemini.base_url {
        client = client.with_base_url(base_url.clone());
    }

    Ok(Arc::new(client))
}
