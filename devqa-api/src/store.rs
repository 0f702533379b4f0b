use shared_types::QuestionRecord;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Process-local, append-only list of answered questions.
///
/// Constructed once at startup and handed to the HTTP layer as app data.
/// Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct QuestionStore {
    records: Mutex<Vec<QuestionRecord>>,
}

impl QuestionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn records(&self) -> MutexGuard<'_, Vec<QuestionRecord>> {
        // Records are only ever pushed whole, so a poisoned lock still guards a valid list
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn insert(&self, record: QuestionRecord) {
        self.records().push(record);
    }

    /// All records in insertion order
    pub fn list(&self) -> Vec<QuestionRecord> {
        self.records().clone()
    }

    pub fn get(&self, id: &str) -> Option<QuestionRecord> {
        self.records().iter().find(|r| r.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}
