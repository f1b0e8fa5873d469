use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque conversation identifier.
///
/// Either issued by the backend or minted locally as a provisional id
/// before the first message of a new conversation is sent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationId(String);

impl ConversationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Mint a fresh random v4 UUID (122 bits of entropy).
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ConversationId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ConversationId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Where a directory entry's identifier came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Returned by the backend; history can be fetched.
    Acknowledged,
    /// Generated on the client; the backend has not seen it yet.
    Provisional,
}

/// An entry in the conversation directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    pub id: ConversationId,
    pub provenance: Provenance,
}

impl Conversation {
    pub fn acknowledged(id: ConversationId) -> Self {
        Self {
            id,
            provenance: Provenance::Acknowledged,
        }
    }

    pub fn provisional(id: ConversationId) -> Self {
        Self {
            id,
            provenance: Provenance::Provisional,
        }
    }

    pub fn is_provisional(&self) -> bool {
        self.provenance == Provenance::Provisional
    }
}
