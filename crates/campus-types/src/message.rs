use chrono::{DateTime, Utc};

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Agent,
}

impl Sender {
    /// Map a backend role string. Anything other than `"user"` is the agent.
    pub fn from_role(role: &str) -> Self {
        if role == "user" {
            Sender::User
        } else {
            Sender::Agent
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Sender::User => "You",
            Sender::Agent => "Agent",
        }
    }
}

/// Identifier unique within one conversation's log. Only used for keying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(pub u64);

/// A single message in the message log
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: MessageId,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(
        id: MessageId,
        content: impl Into<String>,
        sender: Sender,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            content: content.into(),
            sender,
            timestamp,
        }
    }

    pub fn user(id: MessageId, content: impl Into<String>) -> Self {
        Self::new(id, content, Sender::User, Utc::now())
    }

    pub fn agent(id: MessageId, content: impl Into<String>) -> Self {
        Self::new(id, content, Sender::Agent, Utc::now())
    }
}
