use super::types::*;
use crate::error::LlmError;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use tracing::debug;

/// Google Gemini API client
pub struct GeminiClient {
    api_key: String,
    base_url: String,
    default_model: String,
    http_client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, LlmError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(LlmError::authentication("API key cannot be empty"));
        }

        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(300))
            .build()
            .map_err(|e| LlmError::Network { source: e })?;

        Ok(Self {
            api_key,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            default_model: crate::models::gemini::GEMINI_2_0_FLASH_ID.to_string(),
            http_client,
        })
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Model reported by `model_name` and used when a request leaves it empty
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    pub async fn generate_content(
        &self,
        model: impl Into<String>,
        request: GeminiGenerateContentRequest,
    ) -> Result<GeminiGenerateContentResponse, LlmError> {
        let model = model.into();
        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, model);
        debug!(model = %model, "Sending generateContent request");

        let mut headers = HeaderMap::new();
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(&self.api_key)
                .map_err(|e| LlmError::authentication(format!("Invalid API key format: {}", e)))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let response = self
            .http_client
            .post(&url)
            .headers(headers)
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::Network { source: e })?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());

            if let Ok(error_response) = serde_json::from_str::<GeminiErrorResponse>(&error_body) {
                return Err(Self::map_error(
                    error_response.error.code,
                    error_response.error.message,
                ));
            }

            return Err(LlmError::api_error(status.as_u16(), error_body));
        }

        let generate_response = response
            .json::<GeminiGenerateContentResponse>()
            .await
            .map_err(|e| LlmError::internal(format!("Failed to parse response: {}", e)))?;

        Ok(generate_response)
    }

    fn map_error(status: u16, message: String) -> LlmError {
        match status {
            400 => LlmError::invalid_request(message),
            401 | 403 => LlmError::Authentication { message },
            429 => LlmError::rate_limit(message, None),
            _ => LlmError::api_error(status, message),
        }
    }

    pub fn message_builder(&self) -> super::builder::MessageBuilder<'_> {
        super::builder::MessageBuilder::new(self)
    }
}

#[async_trait]
impl crate::client::LlmClient for GeminiClient {
    async fn complete(
        &self,
        request: crate::types::CompletionRequest,
    ) -> Result<crate::types::CompletionResponse, LlmError> {
        let contents = request
            .messages
            .into_iter()
            .map(|msg| {
                let role = match msg.role {
                    crate::types::Role::User => GeminiRole::User,
                    crate::types::Role::Assistant => GeminiRole::Model,
                    crate::types::Role::System => {
                        return Err(LlmError::invalid_request(
                            "System messages should be provided via the system parameter",
                        ));
                    }
                };

                let parts = msg
                    .content
                    .into_iter()
                    .map(|block| match block {
                        crate::types::ContentBlock::Text { text } => GeminiPart::text(text),
                    })
                    .collect();

                Ok(GeminiContent { role, parts })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let gemini_request = GeminiGenerateContentRequest {
            contents,
            system_instruction: request.system.map(|text| GeminiContent {
                role: GeminiRole::User,
                parts: vec![GeminiPart::text(text)],
            }),
            generation_config: Some(GenerationConfig {
                temperature: request.temperature,
                top_p: request.top_p,
                top_k: request.top_k,
                max_output_tokens: Some(request.max_tokens),
                stop_sequences: request.stop_sequences,
                response_mime_type: None,
            }),
        };

        let model = if request.model.is_empty() {
            self.default_model.clone()
        } else {
            request.model
        };

        let gemini_response = self.generate_content(model, gemini_request).await?;

        let candidate = gemini_response
            .candidates
            .first()
            .ok_or_else(|| LlmError::internal("Gemini returned no candidates"))?;
        let stop_reason = candidate.finish_reason.clone();

        let usage = gemini_response
            .usage_metadata
            .as_ref()
            .map(|usage| crate::types::Usage {
                input_tokens: usage.prompt_token_count,
                output_tokens: usage.candidates_token_count,
            })
            .unwrap_or_default();

        Ok(crate::types::CompletionResponse {
            content: vec![crate::types::ContentBlock::Text {
                text: gemini_response.text(),
            }],
            role: crate::types::Role::Assistant,
            usage,
            stop_reason,
        })
    }

    fn provider_name(&self) -> &str {
        crate::providers::GOOGLE
    }

    fn model_name(&self) -> &str {
        &self.default_model
    }
}
