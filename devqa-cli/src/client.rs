use crate::error::CliError;
use crate::fallback::FallbackAnswers;
use crate::mock_data;
use shared_types::{ModelAnswer, QuestionRecord, QuestionRequest, User};
use std::sync::Mutex;
use tracing::{debug, error, info, warn};

pub const API_URL_ENV: &str = "DEVQA_API_URL";
/// Differs from the server's default port 5000; set `DEVQA_API_URL` or `--api-url` to match.
pub const DEFAULT_API_URL: &str = "http://localhost:5001/api";

pub struct ApiClient {
    base_url: String,
    http_client: reqwest::Client,
    fallback: Mutex<FallbackAnswers>,
}

impl ApiClient {
    pub fn new(base_url: Option<String>, fallback: FallbackAnswers) -> Self {
        let base_url = base_url
            .or_else(|| std::env::var(API_URL_ENV).ok())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client: reqwest::Client::new(),
            fallback: Mutex::new(fallback),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ask the backend; any failure yields a demo answer instead of an error
    pub async fn ask_question(&self, question: &str) -> ModelAnswer {
        match self.post_question(question).await {
            Ok(answer) => answer,
            Err(e) => {
                error!("Error asking question: {}", e);
                warn!("Using mock data as fallback");
                let mut fallback = self
                    .fallback
                    .lock()
                    .unwrap_or_else(std::sync::PoisonError::into_inner);
                fallback.answer_for(question)
            }
        }
    }

    async fn post_question(&self, question: &str) -> Result<ModelAnswer, CliError> {
        let url = format!("{}/questions", self.base_url);
        debug!("POST {}", url);

        let response = self
            .http_client
            .post(&url)
            .json(&QuestionRequest::new(question))
            .send()
            .await
            .map_err(|e| CliError::Communication(format!("HTTP request failed: {}", e)))?;

        let response = check_status(response).await?;
        let answer: ModelAnswer = response
            .json()
            .await
            .map_err(|e| CliError::Communication(format!("Failed to parse response: {}", e)))?;

        info!(
            "Received answer with confidence {:.2}{}",
            answer.confidence,
            if answer.escalate_to_human { " (escalated)" } else { "" }
        );
        Ok(answer)
    }

    /// Question history; an unreachable backend reads as no questions
    pub async fn list_questions(&self) -> Vec<QuestionRecord> {
        match self.fetch_questions().await {
            Ok(questions) => questions,
            Err(e) => {
                error!("Error fetching questions: {}", e);
                Vec::new()
            }
        }
    }

    async fn fetch_questions(&self) -> Result<Vec<QuestionRecord>, CliError> {
        let url = format!("{}/questions", self.base_url);
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| CliError::Communication(format!("HTTP request failed: {}", e)))?;

        let questions: Vec<QuestionRecord> = check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| CliError::Communication(format!("Failed to parse response: {}", e)))?;

        info!("Fetched {} questions", questions.len());
        Ok(questions)
    }

    pub async fn get_question(&self, id: &str) -> Result<QuestionRecord, CliError> {
        let url = format!("{}/questions/{}", self.base_url, id);
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| CliError::Communication(format!("HTTP request failed: {}", e)))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(CliError::NotFound(format!("question {}", id)));
        }

        check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| CliError::Communication(format!("Failed to parse response: {}", e)))
    }

    /// Users only exist as demo data
    pub fn get_user(&self, id: &str) -> Option<User> {
        mock_data::find_user(id)
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, CliError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(CliError::Communication(format!(
        "HTTP {} error: {}",
        status, error_text
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // Nothing listens on the discard port
    const UNREACHABLE: &str = "http://127.0.0.1:9/api";

    fn client(base_url: &str) -> ApiClient {
        ApiClient::new(Some(base_url.to_string()), FallbackAnswers::seeded(3))
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        assert_eq!(client("http://host/api/").base_url(), "http://host/api");
    }

    #[tokio::test]
    async fn test_ask_question_returns_backend_answer() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/questions")
            .match_body(mockito::Matcher::Json(json!({ "question": "What is a closure?" })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "confidence": 0.9,
                    "answer": "A closure is...",
                    "escalate_to_human": false,
                    "tags": ["javascript"]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = client(&format!("{}/api", server.url()));
        let answer = client.ask_question("What is a closure?").await;

        mock.assert_async().await;
        assert_eq!(answer.answer, "A closure is...");
        assert_eq!(answer.confidence, 0.9);
    }

    #[tokio::test]
    async fn test_ask_question_falls_back_on_error_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/questions")
            .with_status(400)
            .with_body(r#"{"error":"Question is required"}"#)
            .create_async()
            .await;

        let client = client(&format!("{}/api", server.url()));
        let answer = client.ask_question("q").await;

        let expected = FallbackAnswers::seeded(3).answer_for("q");
        assert_eq!(answer, expected);
    }

    #[tokio::test]
    async fn test_ask_question_falls_back_when_unreachable() {
        let client = client(UNREACHABLE);
        let answer = client.ask_question("How do I center a div?").await;
        assert!(answer.answer.contains("\"How do I center a div?\""));
        assert!(!answer.tags.is_empty());
    }

    #[tokio::test]
    async fn test_list_questions() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/questions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!([{
                    "id": "0b6c",
                    "question": "What is a closure?",
                    "timestamp": "2026-01-02T03:04:05Z",
                    "status": "answered",
                    "response": {
                        "confidence": 0.9,
                        "answer": "A closure is...",
                        "escalate_to_human": false,
                        "tags": ["javascript"]
                    }
                }])
                .to_string(),
            )
            .create_async()
            .await;

        let client = client(&format!("{}/api", server.url()));
        let questions = client.list_questions().await;
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].id, "0b6c");
    }

    #[tokio::test]
    async fn test_list_questions_empty_when_unreachable() {
        assert!(client(UNREACHABLE).list_questions().await.is_empty());
    }

    #[tokio::test]
    async fn test_get_question_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/questions/nope")
            .with_status(404)
            .with_body(r#"{"error":"Question not found"}"#)
            .create_async()
            .await;

        let client = client(&format!("{}/api", server.url()));
        let err = client.get_question("nope").await.unwrap_err();
        assert!(matches!(err, CliError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_get_question_propagates_transport_error() {
        let err = client(UNREACHABLE).get_question("q1").await.unwrap_err();
        assert!(matches!(err, CliError::Communication(_)));
    }

    #[test]
    fn test_get_user_from_mock_table() {
        let client = client(UNREACHABLE);
        assert_eq!(client.get_user("user1").unwrap().username, "TechGuru");
        assert!(client.get_user("ghost").is_none());
    }
}
