//! Wire types shared between the DevQA backend and its clients

pub mod community;
pub mod question;
pub mod typescript_gen;

pub use community::{CommunityAnswer, User};
pub use question::{
    ConfidenceBand, ErrorResponse, HealthResponse, ModelAnswer, QuestionRecord, QuestionRequest,
    QuestionStatus,
};
pub use typescript_gen::{generate_typescript_definitions, EXPORTED_TYPES};
