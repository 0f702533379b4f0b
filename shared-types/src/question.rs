use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Lifecycle state of a submitted question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum QuestionStatus {
    Answered,
    Pending,
    Escalated,
}

impl std::fmt::Display for QuestionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuestionStatus::Answered => write!(f, "answered"),
            QuestionStatus::Pending => write!(f, "pending"),
            QuestionStatus::Escalated => write!(f, "escalated"),
        }
    }
}

/// How much an answer can be trusted, derived from its confidence score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceBand {
    /// 0.8 and above
    High,
    /// 0.5 up to 0.8
    Moderate,
    /// Below 0.5, likely needs a human
    Low,
}

impl ConfidenceBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            ConfidenceBand::High
        } else if score >= 0.5 {
            ConfidenceBand::Moderate
        } else {
            ConfidenceBand::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceBand::High => "high",
            ConfidenceBand::Moderate => "moderate",
            ConfidenceBand::Low => "low",
        }
    }
}

/// Normalized result of one model invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ModelAnswer {
    /// Reliability score in [0, 1]
    pub confidence: f64,
    /// Markdown answer text
    pub answer: String,
    pub escalate_to_human: bool,
    pub tags: Vec<String>,
}

impl ModelAnswer {
    /// Status a question takes on when stored with this answer
    pub fn status(&self) -> QuestionStatus {
        if self.escalate_to_human {
            QuestionStatus::Escalated
        } else {
            QuestionStatus::Answered
        }
    }

    pub fn confidence_band(&self) -> ConfidenceBand {
        ConfidenceBand::from_score(self.confidence)
    }
}

/// A question together with the answer it received
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionRecord {
    pub id: String,
    pub question: String,
    #[ts(type = "string")]
    pub timestamp: DateTime<Utc>,
    pub status: QuestionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub response: Option<ModelAnswer>,
}

impl QuestionRecord {
    /// Record a freshly answered question; status follows the escalation flag
    pub fn answered(question: impl Into<String>, response: ModelAnswer) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            question: question.into(),
            timestamp: Utc::now(),
            status: response.status(),
            response: Some(response),
        }
    }

    /// Record whose answer came from a failed model call; always escalated
    pub fn escalated(question: impl Into<String>, response: ModelAnswer) -> Self {
        Self {
            status: QuestionStatus::Escalated,
            ..Self::answered(question, response)
        }
    }

    pub fn tags(&self) -> &[String] {
        self.response
            .as_ref()
            .map(|r| r.tags.as_slice())
            .unwrap_or(&[])
    }
}

/// Body of `POST /api/questions`
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionRequest {
    #[serde(default)]
    #[ts(optional)]
    pub question: Option<String>,
}

impl QuestionRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: Some(question.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}
