pub mod llm;
pub mod text;
