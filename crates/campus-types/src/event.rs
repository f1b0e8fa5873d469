use crate::{
    Result,
    analytics::AnalyticsReport,
    api::{ChatReply, ConversationHistory},
    conversation::ConversationId,
    student::{Student, StudentId},
};

/// Identifies one in-flight chat send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TicketId(pub u64);

/// Dashboard pages reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Chat,
    Analytics,
    Students,
    AddStudent,
}

impl Route {
    pub fn all() -> &'static [Route] {
        &[Route::Chat, Route::Analytics, Route::Students, Route::AddStudent]
    }

    pub fn label(&self) -> &str {
        match self {
            Route::Chat => "Chat",
            Route::Analytics => "Analytics",
            Route::Students => "Students",
            Route::AddStudent => "Add Student",
        }
    }
}

/// Completions of backend calls, delivered to the UI through the event bus.
/// Spawned requests never touch UI state directly; they emit one of these.
#[derive(Debug, Clone)]
pub enum DashboardEvent {
    ConversationsLoaded(Result<Vec<ConversationId>>),

    HistoryLoaded {
        conversation_id: ConversationId,
        result: Result<ConversationHistory>,
    },

    ReplyReceived {
        ticket: TicketId,
        result: Result<ChatReply>,
    },

    StudentsLoaded(Result<Vec<Student>>),

    StudentCreated(Result<Student>),

    StudentDeleted {
        id: StudentId,
        result: Result<()>,
    },

    AnalyticsLoaded(Result<AnalyticsReport>),

    /// Deferred navigation, e.g. back to the list after adding a student
    Navigate(Route),
}
