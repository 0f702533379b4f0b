pub mod config;
pub mod error;
pub mod handlers;
pub mod helpers;
pub mod routes;
pub mod services;
pub mod store;

pub use error::ApiError;
pub use services::answer::AnswerService;
pub use store::QuestionStore;
