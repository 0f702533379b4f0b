use crate::error::ApiError;
use crate::helpers::text::preview;
use crate::services::answer::{system_error_answer, AnswerService};
use crate::store::QuestionStore;
use actix_web::{error::JsonPayloadError, web, HttpRequest, HttpResponse};
use shared_types::{QuestionRecord, QuestionRequest};
use tracing::{error, info, warn};

/// Ask the model a question. Always answers 200 once the question itself is
/// valid; model failures become an escalated fallback answer.
pub async fn ask_question(
    req: web::Json<QuestionRequest>,
    answers: web::Data<AnswerService>,
    store: web::Data<QuestionStore>,
) -> Result<HttpResponse, ApiError> {
    let question = match req.into_inner().question {
        Some(question) if !question.trim().is_empty() => question,
        _ => {
            warn!("Rejected question with empty text");
            return Err(ApiError::InvalidRequest("Question is required".to_string()));
        }
    };

    info!(question = %preview(&question, 50), "Received question");

    let (answer, record) = match answers.answer(&question).await {
        Ok(answer) => (answer.clone(), QuestionRecord::answered(question, answer)),
        Err(e) => {
            error!(error = %e, "Error with AI processing, returning fallback answer");
            let fallback = system_error_answer();
            (fallback.clone(), QuestionRecord::escalated(question, fallback))
        }
    };

    info!(
        question_id = %record.id,
        status = %record.status,
        confidence = answer.confidence,
        "Stored question"
    );
    store.insert(record);

    Ok(HttpResponse::Ok().json(answer))
}

pub async fn list_questions(store: web::Data<QuestionStore>) -> HttpResponse {
    HttpResponse::Ok().json(store.list())
}

pub async fn get_question(
    id: web::Path<String>,
    store: web::Data<QuestionStore>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    match store.get(&id) {
        Some(record) => Ok(HttpResponse::Ok().json(record)),
        None => {
            warn!(question_id = %id, "Question not found");
            Err(ApiError::NotFound("Question not found".to_string()))
        }
    }
}

/// Bodies that cannot be decoded are an internal failure, not a validation error
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    error!(error = %err, "Error processing question");
    ApiError::Internal("Failed to process question".to_string()).into()
}
