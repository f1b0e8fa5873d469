//! Port traits: the hexagonal architecture boundary.
//!
//! These traits are defined here in `campus-core` (pure Rust).
//! The HTTP implementation lives in `campus-platform`.
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use campus_types::{
    Result,
    analytics::AnalyticsReport,
    api::{ChatReply, ChatRequest, ConversationHistory},
    conversation::ConversationId,
    student::{NewStudent, Student, StudentId},
};

// ─── Chat Backend Port ───────────────────────────────────────

#[async_trait(?Send)]
pub trait ChatBackendPort {
    /// All conversation identifiers known to the backend, in backend order
    async fn list_conversations(&self) -> Result<Vec<ConversationId>>;

    /// Full stored history of one conversation
    async fn fetch_conversation(&self, id: &ConversationId) -> Result<ConversationHistory>;

    /// Send one user message; the backend assigns an id when none is given
    async fn send_message(&self, req: ChatRequest) -> Result<ChatReply>;
}

// ─── Student Service Port ────────────────────────────────────

#[async_trait(?Send)]
pub trait StudentServicePort {
    async fn list_students(&self) -> Result<Vec<Student>>;

    async fn create_student(&self, student: NewStudent) -> Result<Student>;

    async fn delete_student(&self, id: &StudentId) -> Result<()>;
}

// ─── Analytics Port ──────────────────────────────────────────

#[async_trait(?Send)]
pub trait AnalyticsPort {
    async fn fetch_analytics(&self) -> Result<AnalyticsReport>;
}
