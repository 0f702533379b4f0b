#![allow(dead_code)]

use actix_web::{test, web, App};
use devqa_api::routes::configure_routes;
use devqa_api::{AnswerService, QuestionStore};
use devqa_llm_sdk::{
    CompletionRequest, CompletionResponse, ContentBlock, LlmClient, LlmError, Role, Usage,
};
use std::sync::{Arc, Mutex};

pub const CLOSURE_QUESTION: &str = "What is a closure in JavaScript?";
pub const CLEAN_REPLY: &str = r#"{"confidence":0.9,"answer":"A closure is...","escalate_to_human":false,"tags":["javascript"]}"#;

pub enum MockReply {
    Text(String),
    Failure { status: u16, message: String },
}

pub struct MockLlmClient {
    pub replies: Mutex<Vec<MockReply>>,
    pub requests: Mutex<Vec<CompletionRequest>>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        MockLlmClient {
            replies: Mutex::new(Vec::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn push_text(&self, text: &str) {
        self.replies
            .lock()
            .unwrap()
            .push(MockReply::Text(text.to_string()));
    }

    pub fn push_failure(&self, status: u16, message: &str) {
        self.replies.lock().unwrap().push(MockReply::Failure {
            status,
            message: message.to_string(),
        });
    }

    pub fn get_call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.requests.lock().unwrap().push(request);

        let reply = {
            let mut replies = self.replies.lock().unwrap();
            if replies.is_empty() {
                MockReply::Text(CLEAN_REPLY.to_string())
            } else {
                replies.remove(0)
            }
        };

        match reply {
            MockReply::Text(text) => Ok(CompletionResponse {
                content: vec![ContentBlock::Text { text }],
                role: Role::Assistant,
                usage: Usage {
                    input_tokens: 10,
                    output_tokens: 20,
                },
                stop_reason: Some("STOP".to_string()),
            }),
            MockReply::Failure { status, message } => Err(LlmError::api_error(status, message)),
        }
    }

    fn provider_name(&self) -> &str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

pub struct TestApp<S> {
    pub store: web::Data<QuestionStore>,
    pub mock_llm_client: Arc<MockLlmClient>,
    pub app: S,
}

pub async fn setup_test_app() -> TestApp<
    impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
> {
    let mock_llm_client = Arc::new(MockLlmClient::new());
    let llm_client = mock_llm_client.clone() as Arc<dyn LlmClient>;
    let answers = web::Data::new(AnswerService::new(llm_client, "mock-model"));
    let store = web::Data::new(QuestionStore::new());

    let app = test::init_service(
        App::new()
            .app_data(answers)
            .app_data(store.clone())
            .configure(configure_routes),
    )
    .await;

    TestApp {
        store,
        mock_llm_client,
        app,
    }
}
