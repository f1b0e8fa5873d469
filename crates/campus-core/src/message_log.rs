//! Message log: the ordered, append-only messages of the selected conversation.

use campus_types::{
    Result,
    api::ConversationHistory,
    conversation::ConversationId,
    message::{ChatMessage, MessageId, Sender},
};
use chrono::Utc;

use crate::directory::ConversationDirectory;
use crate::ports::ChatBackendPort;

/// Shown in place of the agent's reply when a send fails. Never sent to the
/// backend and never retried.
pub const FAILED_REPLY_TEXT: &str = "Failed to get response from AI.";

#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the history of `conversation_id`.
    ///
    /// Provisional ids have nothing on the backend yet, so the log is just
    /// cleared without a request. On a failed fetch the log is left empty.
    pub async fn load_for(
        &mut self,
        conversation_id: &ConversationId,
        directory: &ConversationDirectory,
        backend: &dyn ChatBackendPort,
    ) -> Result<()> {
        self.clear();
        if !directory.is_acknowledged(conversation_id) {
            return Ok(());
        }
        let history = backend.fetch_conversation(conversation_id).await?;
        self.merge_history(history);
        Ok(())
    }

    /// Put backend history, in backend creation order, ahead of whatever was
    /// appended since the log was last cleared. Local entries keep their
    /// relative order and are renumbered after the history.
    pub fn merge_history(&mut self, history: ConversationHistory) {
        let local = std::mem::take(&mut self.messages);
        self.messages = history
            .messages
            .into_iter()
            .enumerate()
            .map(|(idx, entry)| {
                let timestamp = entry.timestamp().unwrap_or_else(|e| {
                    log::warn!("History entry {} has unreadable timestamp: {}", idx, e);
                    Utc::now()
                });
                let sender = entry.sender();
                ChatMessage::new(MessageId(idx as u64), entry.content, sender, timestamp)
            })
            .collect();
        self.next_id = self.messages.len() as u64;

        if !local.is_empty() {
            log::debug!("Re-appending {} local message(s) after history", local.len());
        }
        for mut message in local {
            message.id = self.mint_id();
            self.messages.push(message);
        }
    }

    /// Optimistically append the user's outgoing message.
    pub fn append_local(&mut self, content: impl Into<String>) -> &ChatMessage {
        let id = self.mint_id();
        self.push(ChatMessage::user(id, content))
    }

    /// Append a message received from the backend.
    pub fn append_remote(&mut self, content: impl Into<String>) -> &ChatMessage {
        let id = self.mint_id();
        self.push(ChatMessage::agent(id, content))
    }

    pub fn append_placeholder(&mut self) -> &ChatMessage {
        self.append_remote(FAILED_REPLY_TEXT)
    }

    pub fn clear(&mut self) {
        self.messages.clear();
        self.next_id = 0;
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of synthetic failure replies in the log.
    pub fn placeholder_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.sender == Sender::Agent && m.content == FAILED_REPLY_TEXT)
            .count()
    }

    fn mint_id(&mut self) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        id
    }

    fn push(&mut self, message: ChatMessage) -> &ChatMessage {
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }
}
