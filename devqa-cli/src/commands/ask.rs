use crate::browse::SortMode;
use crate::client::ApiClient;
use crate::commands::list::list_questions;
use crate::error::CliError;
use crate::render::render_markdown;
use shared_types::ModelAnswer;
use tracing::info;

/// Ask a question and print the answer; `escalate` continues to the escalated list
pub async fn ask_question(client: &ApiClient, question: &str, escalate: bool) -> Result<(), CliError> {
    if question.trim().is_empty() {
        return Err(CliError::Command("Question is required".to_string()));
    }

    info!("Asking question via {}", client.base_url());
    let answer = client.ask_question(question).await;
    println!("{}", format_answer(&answer));

    if escalate {
        println!();
        println!("Routing to community experts...");
        println!();
        list_questions(client, None, SortMode::Escalated).await?;
    } else {
        println!();
        println!("{}", escalation_hint(&answer));
    }

    Ok(())
}

pub fn format_answer(answer: &ModelAnswer) -> String {
    let mut out = format!(
        "Confidence: {}% ({})",
        (answer.confidence * 100.0).round(),
        answer.confidence_band().label()
    );
    if !answer.tags.is_empty() {
        out.push_str(&format!("\nTags: {}", answer.tags.join(", ")));
    }
    out.push_str("\n\n");
    out.push_str(&render_markdown(&answer.answer));
    out
}

pub fn escalation_hint(answer: &ModelAnswer) -> &'static str {
    if answer.escalate_to_human {
        "Escalated to human experts. Browse the queue with: devqa list --sort escalated"
    } else {
        "Not satisfied? Ask the community with: devqa list --sort escalated"
    }
}
