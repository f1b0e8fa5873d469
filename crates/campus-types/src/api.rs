//! Request and response bodies exchanged with the backend.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::conversation::ConversationId;
use crate::message::Sender;
use crate::DashboardError;

/// `GET /conversations`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationList {
    pub conversation_ids: Vec<ConversationId>,
}

/// `GET /conversations/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationHistory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<ConversationId>,
    pub messages: Vec<HistoryEntry>,
}

/// One stored message as the backend reports it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub role: String,
    pub content: String,
    pub created_at: String,
}

impl HistoryEntry {
    pub fn sender(&self) -> Sender {
        Sender::from_role(&self.role)
    }

    pub fn timestamp(&self) -> crate::Result<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }
}

/// `POST /chat` body. `conversation_id` is sent as `null` for a new session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub conversation_id: Option<ConversationId>,
}

/// `POST /chat` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
    pub conversation_id: ConversationId,
}

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parse a backend timestamp. Accepts RFC 3339 and the naive
/// `YYYY-MM-DD HH:MM:SS[.ffffff]` form, which is taken as UTC.
pub fn parse_timestamp(raw: &str) -> crate::Result<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| DashboardError::Serialization(format!("invalid timestamp: {raw:?}")))
}
