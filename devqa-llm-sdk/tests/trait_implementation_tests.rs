use devqa_llm_sdk::client::LlmClient;
use devqa_llm_sdk::gemini::GeminiClient;
use std::sync::Arc;

#[test]
fn test_gemini_client_implements_trait() {
    fn assert_implements_trait<T: LlmClient>() {}

    assert_implements_trait::<GeminiClient>();
}

#[test]
fn test_trait_object_usage() {
    let _client: Arc<dyn LlmClient> = Arc::new(GeminiClient::new("test-key").unwrap());
}

#[test]
fn test_provider_and_model_names() {
    let client = GeminiClient::new("test-key").unwrap();
    assert_eq!(client.provider_name(), "google");
    assert_eq!(client.model_name(), "gemini-2.0-flash");

    let client = client.with_model("gemini-1.5-pro");
    assert_eq!(client.model_name(), "gemini-1.5-pro");
}

#[test]
fn test_empty_api_key_rejected() {
    assert!(GeminiClient::new("").is_err());
}
