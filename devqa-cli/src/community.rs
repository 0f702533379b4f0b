//! Session-local community thread under a question.

use chrono::Utc;
use shared_types::CommunityAnswer;
use tracing::debug;

use crate::mock_data;

pub struct CommunityThread {
    question_id: String,
    answers: Vec<CommunityAnswer>,
}

impl CommunityThread {
    /// Thread seeded with the demo answers
    pub fn new(question_id: impl Into<String>) -> Self {
        let question_id = question_id.into();
        let answers = mock_data::community_answers(&question_id, Utc::now());
        Self {
            question_id,
            answers,
        }
    }

    pub fn question_id(&self) -> &str {
        &self.question_id
    }

    pub fn answers(&self) -> &[CommunityAnswer] {
        &self.answers
    }

    /// Appends an answer; blank text is ignored
    pub fn post_answer(&mut self, user_id: &str, text: &str) -> Option<&CommunityAnswer> {
        if text.trim().is_empty() {
            return None;
        }

        let answer = CommunityAnswer {
            id: format!("a{}", self.answers.len() + 1),
            question_id: self.question_id.clone(),
            user_id: user_id.to_string(),
            answer: text.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            votes: 0,
            is_accepted: false,
        };
        debug!(answer_id = %answer.id, "Posted community answer");
        self.answers.push(answer);
        self.answers.last()
    }

    /// Returns false for an unknown answer id
    pub fn vote(&mut self, answer_id: &str, up: bool) -> bool {
        match self.answers.iter_mut().find(|a| a.id == answer_id) {
            Some(answer) => {
                answer.votes += if up { 1 } else { -1 };
                true
            }
            None => false,
        }
    }

    /// Exactly `answer_id` ends up accepted
    pub fn accept(&mut self, answer_id: &str) {
        for answer in &mut self.answers {
            answer.is_accepted = answer.id == answer_id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_thread() {
        let thread = CommunityThread::new("q1");
        assert_eq!(thread.question_id(), "q1");
        let votes: Vec<i64> = thread.answers().iter().map(|a| a.votes).collect();
        assert_eq!(votes, vec![7, 3]);
        assert!(thread.answers()[0].is_accepted);
    }

    #[test]
    fn test_post_answer() {
        let mut thread = CommunityThread::new("q1");
        let posted = thread.post_answer("user1", "Use a ref instead.").unwrap();
        assert_eq!(posted.id, "a3");
        assert_eq!(posted.votes, 0);
        assert!(!posted.is_accepted);
        assert_eq!(posted.user_id, "user1");
        assert_eq!(posted.question_id, "q1");
        assert_eq!(thread.answers().len(), 3);
    }

    #[test]
    fn test_blank_answer_ignored() {
        let mut thread = CommunityThread::new("q2");
        assert!(thread.post_answer("user1", "  \n ").is_none());
        assert!(thread.post_answer("user1", "").is_none());
        assert_eq!(thread.answers().len(), 2);
    }

    #[test]
    fn test_votes() {
        let mut thread = CommunityThread::new("q1");
        assert!(thread.vote("a2", true));
        assert!(thread.vote("a2", true));
        assert!(thread.vote("a1", false));
        assert!(!thread.vote("a9", true));

        let votes: Vec<i64> = thread.answers().iter().map(|a| a.votes).collect();
        assert_eq!(votes, vec![6, 5]);
    }

    #[test]
    fn test_accept_is_exclusive() {
        let mut thread = CommunityThread::new("q1");
        thread.post_answer("user1", "third");
        thread.accept("a3");

        let accepted: Vec<&str> = thread
            .answers()
            .iter()
            .filter(|a| a.is_accepted)
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(accepted, vec!["a3"]);

        thread.accept("missing");
        assert!(thread.answers().iter().all(|a| !a.is_accepted));
    }
}
