//! Filtering and ordering for the question list.

use crate::mock_data;
use chrono::Utc;
use shared_types::{QuestionRecord, QuestionStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortMode {
    /// Stand-in trending order: by question id
    #[default]
    Trending,
    /// Most recent first
    Newest,
    /// Escalated questions first
    Escalated,
}

/// Questions to show: the backend's list, or the demo catalog when it is empty
pub fn display_set(fetched: Vec<QuestionRecord>) -> Vec<QuestionRecord> {
    if fetched.is_empty() {
        mock_data::questions(Utc::now())
    } else {
        fetched
    }
}

/// Case-insensitive match on the question text or any tag
pub fn matches(record: &QuestionRecord, query: &str) -> bool {
    let query = query.to_lowercase();
    record.question.to_lowercase().contains(&query)
        || record
            .tags()
            .iter()
            .any(|tag| tag.to_lowercase().contains(&query))
}

pub fn filter(records: Vec<QuestionRecord>, query: &str) -> Vec<QuestionRecord> {
    records.into_iter().filter(|r| matches(r, query)).collect()
}

pub fn sort(records: &mut [QuestionRecord], mode: SortMode) {
    match mode {
        SortMode::Trending => records.sort_by(|a, b| a.id.cmp(&b.id)),
        SortMode::Newest => records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp)),
        SortMode::Escalated => records.sort_by_key(|r| r.status != QuestionStatus::Escalated),
    }
}

pub fn escalated_count(records: &[QuestionRecord]) -> usize {
    records
        .iter()
        .filter(|r| r.status == QuestionStatus::Escalated)
        .count()
}

/// Escalated tab badge; always counted over the demo catalog, whatever is shown
pub fn escalated_badge() -> usize {
    escalated_count(&mock_data::questions(Utc::now()))
}

/// Display set, filtered by `query` and ordered by `mode`
pub fn browse(fetched: Vec<QuestionRecord>, query: Option<&str>, mode: SortMode) -> Vec<QuestionRecord> {
    let shown = display_set(fetched);
    let mut shown = match query {
        Some(query) => filter(shown, query),
        None => shown,
    };
    sort(&mut shown, mode);
    shown
}
