//! Ask Gemini one question in the Q&A answer format
//!
//! Run with: GEMINI_API_KEY="..." cargo run --example gemini_simple

use devqa_llm_sdk::gemini::GeminiClient;
use devqa_llm_sdk::models::gemini::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("GEMINI_API_KEY")?;
    let client = GeminiClient::new(api_key)?;

    println!("=== Gemini 2.0 Flash ===\n");

    let response = client
        .message_builder()
        .model(GEMINI_2_0_FLASH_ID)
        .user_message(
            "Answer as JSON with fields confidence, answer, escalate_to_human, tags: \
             What is a closure in JavaScript?",
        )
        .temperature(0.7)
        .top_p(0.9)
        .top_k(40)
        .max_output_tokens(1024)
        .json_response()
        .send()
        .await?;

    if let Some(model) = &response.model_version {
        println!("Model: {}", model);
    }
    println!("\nResponse:\n{}", response.text());

    if let Some(usage) = response.usage_metadata {
        println!("\n=== Token Usage ===");
        println!("Prompt: {}", usage.prompt_token_count);
        println!("Response: {}", usage.candidates_token_count);
        println!("Total: {}", usage.total_token_count);
    }

    Ok(())
}
