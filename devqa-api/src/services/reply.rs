//! Turning raw model text into a [`ModelAnswer`].
//!
//! Models are asked for a bare JSON object but often wrap it in prose or
//! code fences, and sometimes return something that is not JSON at all.
//! Anything that cannot be validated becomes a degraded, escalated answer.

use serde_json::{Map, Value};
use shared_types::ModelAnswer;
use thiserror::Error;
use tracing::{debug, warn};

pub const PARSING_ERROR_TAG: &str = "parsing-error";
pub const DEGRADED_CONFIDENCE: f64 = 0.3;

/// Replies this short carry nothing worth showing the user
const MIN_USABLE_REPLY_CHARS: usize = 20;
const MAX_DEGRADED_ANSWER_CHARS: usize = 500;

const FORMATTING_ISSUE_MESSAGE: &str = "I processed your question but encountered an issue with my response formatting. Your question might need expert attention.";

#[derive(Error, Debug)]
pub enum ReplyError {
    #[error("reply is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("reply JSON is not an object")]
    NotAnObject,

    #[error("reply is missing required field '{0}'")]
    MissingField(&'static str),

    #[error("confidence is not a finite number")]
    InvalidConfidence,

    #[error("answer is not a string")]
    InvalidAnswer,
}

/// Slice from the first `{` to the last `}`, or the whole text when there is no such pair
pub fn extract_json(raw: &str) -> &str {
    match (raw.find('{'), raw.rfind('}')) {
        (Some(start), Some(end)) if end > start => {
            let slice = &raw[start..=end];
            if slice.len() != raw.len() {
                debug!("Extracted JSON from response");
            }
            slice
        }
        _ => raw,
    }
}

/// Validate a model reply, falling back to [`degraded_answer`] on any failure
pub fn normalize(raw: &str) -> ModelAnswer {
    match parse_reply(raw) {
        Ok(answer) => {
            debug!(
                confidence = answer.confidence,
                escalate = answer.escalate_to_human,
                tags = %answer.tags.join(", "),
                "Response generated"
            );
            answer
        }
        Err(e) => {
            warn!(error = %e, raw_response = %raw, "Failed to parse model response");
            degraded_answer(raw)
        }
    }
}

pub fn parse_reply(raw: &str) -> Result<ModelAnswer, ReplyError> {
    let value: Value = serde_json::from_str(extract_json(raw))?;
    let object = value.as_object().ok_or(ReplyError::NotAnObject)?;

    let confidence = required(object, "confidence")?;
    let answer = required(object, "answer")?;

    let confidence = coerce_number(confidence)
        .filter(|c| c.is_finite())
        .ok_or(ReplyError::InvalidConfidence)?
        .clamp(0.0, 1.0);

    let answer = answer.as_str().ok_or(ReplyError::InvalidAnswer)?.to_string();

    let escalate_to_human = object.get("escalate_to_human").is_some_and(is_truthy);

    let tags = match object.get("tags") {
        Some(Value::Array(items)) => items.iter().filter_map(tag_text).collect(),
        _ => {
            warn!("Tags is not an array, setting to empty array");
            Vec::new()
        }
    };

    Ok(ModelAnswer {
        confidence,
        answer,
        escalate_to_human,
        tags,
    })
}

/// Answer used when the reply could not be validated
pub fn degraded_answer(raw: &str) -> ModelAnswer {
    let char_count = raw.chars().count();
    let answer = if char_count > MIN_USABLE_REPLY_CHARS {
        let mut text: String = raw.chars().take(MAX_DEGRADED_ANSWER_CHARS).collect();
        if char_count > MAX_DEGRADED_ANSWER_CHARS {
            text.push_str("...");
        }
        text
    } else {
        FORMATTING_ISSUE_MESSAGE.to_string()
    };

    ModelAnswer {
        confidence: DEGRADED_CONFIDENCE,
        answer,
        escalate_to_human: true,
        tags: vec![PARSING_ERROR_TAG.to_string()],
    }
}

fn required<'a>(object: &'a Map<String, Value>, field: &'static str) -> Result<&'a Value, ReplyError> {
    object
        .get(field)
        .filter(|v| is_truthy(v))
        .ok_or(ReplyError::MissingField(field))
}

/// Loose truthiness: null, false, 0, NaN and "" count as absent
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                trimmed.parse().ok()
            }
        }
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

fn tag_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
