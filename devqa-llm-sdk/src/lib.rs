//! # DevQA LLM SDK
//!
//! Provider-neutral completion trait plus a Google Gemini client.
//!
//! ## Example
//!
//! ```rust,no_run
//! use devqa_llm_sdk::gemini::GeminiClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GeminiClient::new("your-gemini-api-key")?;
//!     let response = client
//!         .message_builder()
//!         .model("gemini-2.0-flash")
//!         .temperature(0.7)
//!         .max_output_tokens(1024)
//!         .user_message("What is a closure in JavaScript?")
//!         .send()
//!         .await?;
//!
//!     println!("Response: {}", response.text());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod gemini;
pub mod models;
pub mod providers;
pub mod types;

pub use client::LlmClient;
pub use error::LlmError;
pub use types::{CompletionRequest, CompletionResponse, ContentBlock, Message, Role, Usage};
