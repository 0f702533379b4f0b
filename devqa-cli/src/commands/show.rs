use crate::client::ApiClient;
use crate::community::CommunityThread;
use crate::error::CliError;
use crate::mock_data;
use crate::render::render_markdown;
use chrono::Utc;
use shared_types::{CommunityAnswer, QuestionRecord};
use tracing::warn;

/// Answering user for this session; there is no login
pub const SESSION_USER: &str = "user1";

/// Thread edits requested on the command line, applied in this order
#[derive(Debug, Default)]
pub struct ThreadActions {
    pub answer: Option<String>,
    pub upvote: Vec<String>,
    pub downvote: Vec<String>,
    pub accept: Option<String>,
}

pub async fn show_question(
    client: &ApiClient,
    id: &str,
    actions: &ThreadActions,
) -> Result<(), CliError> {
    let record = load_question(client, id).await?;

    let mut thread = CommunityThread::new(&record.id);
    apply_actions(&mut thread, actions);

    println!("{}", format_question(client, &record));
    println!();
    println!("{}", format_thread(client, &thread));
    Ok(())
}

async fn load_question(client: &ApiClient, id: &str) -> Result<QuestionRecord, CliError> {
    match client.get_question(id).await {
        Ok(record) => Ok(record),
        Err(e) => match mock_data::questions(Utc::now()).into_iter().find(|q| q.id == id) {
            Some(record) => {
                warn!("Showing demo question {}: {}", id, e);
                Ok(record)
            }
            None => Err(e),
        },
    }
}

pub fn apply_actions(thread: &mut CommunityThread, actions: &ThreadActions) {
    if let Some(text) = &actions.answer {
        if thread.post_answer(SESSION_USER, text).is_none() {
            warn!("Ignoring empty answer");
        }
    }
    for answer_id in &actions.upvote {
        if !thread.vote(answer_id, true) {
            warn!("No answer {} to upvote", answer_id);
        }
    }
    for answer_id in &actions.downvote {
        if !thread.vote(answer_id, false) {
            warn!("No answer {} to downvote", answer_id);
        }
    }
    if let Some(answer_id) = &actions.accept {
        thread.accept(answer_id);
    }
}

fn username(client: &ApiClient, user_id: &str) -> String {
    client
        .get_user(user_id)
        .map(|u| u.username)
        .unwrap_or_else(|| user_id.to_string())
}

pub fn format_question(client: &ApiClient, record: &QuestionRecord) -> String {
    let mut out = format!(
        "{}\nAsked by {} on {}  [{}]",
        record.question,
        username(client, SESSION_USER),
        record.timestamp.format("%Y-%m-%d %H:%M"),
        record.status
    );

    if let Some(response) = &record.response {
        out.push_str(&format!(
            "\n\nAI answer ({}% confidence, {})",
            (response.confidence * 100.0).round(),
            response.confidence_band().label()
        ));
        if !response.tags.is_empty() {
            out.push_str(&format!("\nTags: {}", response.tags.join(", ")));
        }
        out.push_str("\n\n");
        out.push_str(&render_markdown(&response.answer));
    }
    out
}

fn format_answer(client: &ApiClient, answer: &CommunityAnswer) -> String {
    let accepted = if answer.is_accepted { "  accepted" } else { "" };
    format!(
        "[{}] {}  votes: {}{}\n{}",
        answer.id,
        username(client, &answer.user_id),
        answer.votes,
        accepted,
        render_markdown(&answer.answer)
    )
}

pub fn format_thread(client: &ApiClient, thread: &CommunityThread) -> String {
    let mut out = format!("{} community answers", thread.answers().len());
    for answer in thread.answers() {
        out.push_str("\n\n");
        out.push_str(&format_answer(client, answer));
    }
    out
}
