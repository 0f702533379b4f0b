//! Google Gemini API client and types

pub mod builder;
pub mod client;
pub mod types;

pub use builder::MessageBuilder;
pub use client::GeminiClient;
pub use types::*;

pub use crate::models::gemini::*;
