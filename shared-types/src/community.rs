use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A community member; only mock users exist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub avatar: Option<String>,
}

/// Answer posted by a community member under a question.
///
/// Lives only in the client session; votes and acceptance never reach the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CommunityAnswer {
    pub id: String,
    pub question_id: String,
    pub user_id: String,
    pub answer: String,
    pub timestamp: String,
    pub votes: i64,
    pub is_accepted: bool,
}
