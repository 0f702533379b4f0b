//! Route table shared by the server binary and the HTTP tests.

use crate::handlers::{health, questions};
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api/questions")
                .app_data(web::JsonConfig::default().error_handler(questions::json_error_handler))
                .route("", web::get().to(questions::list_questions))
                .route("", web::post().to(questions::ask_question))
                .route("/", web::get().to(questions::list_questions))
                .route("/", web::post().to(questions::ask_question))
                .route("/{id}", web::get().to(questions::get_question)),
        );
}
