use super::reply;
use crate::helpers::text::preview;
use devqa_llm_sdk::{CompletionRequest, LlmClient, LlmError};
use shared_types::ModelAnswer;
use std::sync::Arc;
use tracing::{error, info};

pub const TEMPERATURE: f32 = 0.7;
pub const TOP_P: f32 = 0.9;
pub const TOP_K: u32 = 40;
pub const MAX_OUTPUT_TOKENS: u32 = 1024;

pub const SYSTEM_ERROR_TAGS: [&str; 2] = ["system-error", "needs-attention"];

const SYSTEM_ERROR_MESSAGE: &str = "I'm currently having trouble processing this question. It might be a technical issue or a complex question that would benefit from human expertise.";

const FORMAT_INSTRUCTIONS: &str = r#"
Output ONLY a valid JSON object with the following structure, nothing else before or after:
{
  "confidence": 0.0-1.0,
  "answer": "Your answer here",
  "escalate_to_human": true/false,
  "tags": ["tag1", "tag2", "tag3"]
}

Guidelines:
- "confidence" should be a number between 0.0 and 1.0
- "answer" should be your detailed response to the question
- "escalate_to_human" should be true if the question is complex or requires human expertise
- "tags" should be relevant technology keywords for categorizing the question (2-5 tags)

Confidence scale:
- 0.8-1.0: Very confident, comprehensive answer
- 0.5-0.8: Moderately confident, good answer but may have limitations
- <0.5: Low confidence, question likely needs human expertise
"#;

/// Asks the model one question and shapes its reply into a [`ModelAnswer`].
pub struct AnswerService {
    llm: Arc<dyn LlmClient>,
    model: String,
}

impl AnswerService {
    pub fn new(llm: Arc<dyn LlmClient>, model: impl Into<String>) -> Self {
        Self {
            llm,
            model: model.into(),
        }
    }

    /// Reply-format problems are absorbed into a degraded answer; only a failed
    /// model call is returned as an error.
    pub async fn answer(&self, question: &str) -> Result<ModelAnswer, LlmError> {
        info!(question = %preview(question, 50), "Processing question");

        let request = self.build_request(question);

        info!(provider = self.llm.provider_name(), model = %self.model, "Sending request to model API");
        let response = self.llm.complete(request).await.map_err(|e| {
            error!(error = %e, "Error calling model API");
            e
        })?;
        info!("Received response from model API");

        Ok(reply::normalize(&response.text()))
    }

    fn build_request(&self, question: &str) -> CompletionRequest {
        let mut request =
            CompletionRequest::single_turn(self.model.clone(), build_prompt(question), MAX_OUTPUT_TOKENS);
        request.temperature = Some(TEMPERATURE);
        request.top_p = Some(TOP_P);
        request.top_k = Some(TOP_K);
        request
    }
}

pub fn build_prompt(question: &str) -> String {
    format!(
        "You're an AI assistant for a technical Q&A platform. Answer the following question as an expert.

If the question is clear and you can provide a confident answer, do so thoroughly.
If the question is ambiguous or requires specialized human expertise, provide a basic answer but indicate it should be escalated.

TECHNICAL QUESTION: {question}

{FORMAT_INSTRUCTIONS}

Remember, output ONLY the JSON object with no additional text."
    )
}

/// Answer substituted when the model could not be reached at all
pub fn system_error_answer() -> ModelAnswer {
    ModelAnswer {
        confidence: reply::DEGRADED_CONFIDENCE,
        answer: SYSTEM_ERROR_MESSAGE.to_string(),
        escalate_to_human: true,
        tags: SYSTEM_ERROR_TAGS.iter().map(|t| t.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use devqa_llm_sdk::{CompletionResponse, ContentBlock, Role, Usage};
    use std::sync::Mutex;

    struct CannedClient {
        reply: Result<String, u16>,
        requests: Mutex<Vec<CompletionRequest>>,
    }

    impl CannedClient {
        fn replying(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(text.to_string()),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn failing(status: u16) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(status),
                requests: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl LlmClient for CannedClient {
        async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
            self.requests.lock().unwrap().push(request);
            match &self.reply {
                Ok(text) => Ok(CompletionResponse {
                    content: vec![ContentBlock::Text { text: text.clone() }],
                    role: Role::Assistant,
                    usage: Usage::default(),
                    stop_reason: Some("STOP".to_string()),
                }),
                Err(status) => Err(LlmError::api_error(*status, "unavailable".to_string())),
            }
        }

        fn provider_name(&self) -> &str {
            "canned"
        }

        fn model_name(&self) -> &str {
            "canned-model"
        }
    }

    #[test]
    fn test_prompt_embeds_question_and_format() {
        let prompt = build_prompt("What is a closure in JavaScript?");
        assert!(prompt.contains("TECHNICAL QUESTION: What is a closure in JavaScript?"));
        assert!(prompt.contains("\"escalate_to_human\": true/false"));
        assert!(prompt.contains("0.8-1.0: Very confident"));
        assert!(prompt.contains("(2-5 tags)"));
        assert!(prompt.ends_with("output ONLY the JSON object with no additional text."));
    }

    #[tokio::test]
    async fn test_request_uses_fixed_sampling() {
        let client = CannedClient::replying(r#"{"confidence":0.9,"answer":"ok","tags":[]}"#);
        let service = AnswerService::new(client.clone(), "gemini-2.0-flash");

        service.answer("Why Rust?").await.unwrap();

        let requests = client.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.model, "gemini-2.0-flash");
        assert_eq!(request.temperature, Some(0.7));
        assert_eq!(request.top_p, Some(0.9));
        assert_eq!(request.top_k, Some(40));
        assert_eq!(request.max_tokens, 1024);
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, Role::User);
    }

    #[tokio::test]
    async fn test_malformed_reply_is_not_an_error() {
        let client = CannedClient::replying("Sure! {confidence: 0.9 answer: ...");
        let service = AnswerService::new(client, "gemini-2.0-flash");

        let answer = service.answer("What is a closure?").await.unwrap();
        assert_eq!(answer.tags, vec!["parsing-error"]);
        assert!(answer.escalate_to_human);
    }

    #[tokio::test]
    async fn test_call_failure_propagates() {
        let service = AnswerService::new(CannedClient::failing(503), "gemini-2.0-flash");
        let result = service.answer("What is a closure?").await;
        assert!(matches!(result, Err(LlmError::Api { status: 503, .. })));
    }

    #[test]
    fn test_system_error_answer() {
        let answer = system_error_answer();
        assert_eq!(answer.confidence, 0.3);
        assert!(answer.escalate_to_human);
        assert_eq!(answer.tags, vec!["system-error", "needs-attention"]);
    }
}
