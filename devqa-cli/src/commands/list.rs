use crate::browse::{self, SortMode};
use crate::client::ApiClient;
use crate::error::CliError;
use shared_types::{QuestionRecord, QuestionStatus};

pub async fn list_questions(
    client: &ApiClient,
    search: Option<&str>,
    sort: SortMode,
) -> Result<(), CliError> {
    let fetched = client.list_questions().await;
    let shown = browse::browse(fetched, search, sort);

    println!("Escalated: {}", browse::escalated_badge());
    if shown.is_empty() {
        println!("No questions match your search.");
        return Ok(());
    }
    for record in &shown {
        println!();
        println!("{}", format_summary(record));
    }
    Ok(())
}

pub fn format_summary(record: &QuestionRecord) -> String {
    let marker = match record.status {
        QuestionStatus::Escalated => "[escalated]",
        QuestionStatus::Answered => "[answered]",
        QuestionStatus::Pending => "[pending]",
    };
    let mut out = format!("{} {} {}", record.id, marker, record.question);

    let details = match &record.response {
        Some(response) => format!(
            "{}% confidence  {}",
            (response.confidence * 100.0).round(),
            response.tags.join(", ")
        ),
        None => "awaiting answer".to_string(),
    };
    out.push_str(&format!(
        "\n    {}  {}",
        record.timestamp.format("%Y-%m-%d %H:%M"),
        details.trim_end()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use shared_types::ModelAnswer;

    #[test]
    fn test_format_summary() {
        let response = ModelAnswer {
            confidence: 0.45,
            answer: "Check memory limits.".to_string(),
            escalate_to_human: true,
            tags: vec!["docker".to_string(), "devops".to_string()],
        };
        let record = QuestionRecord {
            id: "q3".to_string(),
            question: "Why OOMKilled?".to_string(),
            timestamp: Utc.with_ymd_and_hms(2026, 3, 4, 5, 6, 7).unwrap(),
            status: response.status(),
            response: Some(response),
        };

        assert_eq!(
            format_summary(&record),
            "q3 [escalated] Why OOMKilled?\n    2026-03-04 05:06  45% confidence  docker, devops"
        );
    }

    #[test]
    fn test_format_summary_without_response() {
        let record = QuestionRecord {
            id: "p".to_string(),
            question: "Later?".to_string(),
            timestamp: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
            status: QuestionStatus::Pending,
            response: None,
        };
        assert!(format_summary(&record).ends_with("awaiting answer"));
    }
}
