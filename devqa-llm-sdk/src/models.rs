//! Model constants for supported LLM providers
//!
//! Model IDs are sourced from official provider documentation.

/// Google Gemini model constants
pub mod gemini {
    /// Gemini 2.0 Flash - Fast general-purpose model, the default for Q&A answers
    pub const GEMINI_2_0_FLASH_ID: &str = "gemini-2.0-flash";
}

pub use gemini::*;
