use actix_web::{HttpResponse, Responder};
use shared_types::HealthResponse;

pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        message: "Server is running".to_string(),
    })
}
