//! UI-level state that drives rendering.
//!
//! Wraps the core models (session controller, roster, analytics view, form)
//! and turns user actions and drained bus events into [`UiCommand`]s. The
//! app layer runs each command on the browser executor and emits the result
//! back onto the EventBus.

use campus_core::analytics::AnalyticsView;
use campus_core::session::{OutgoingMessage, SendState, SessionController};
use campus_core::students::StudentRoster;
use campus_core::validation::StudentForm;
use campus_types::config::DashboardConfig;
use campus_types::conversation::ConversationId;
use campus_types::event::{DashboardEvent, Route};
use campus_types::student::{NewStudent, StudentId};

/// Work the app layer must start on behalf of the UI
#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    LoadConversations,
    FetchHistory(ConversationId),
    SendMessage(OutgoingMessage),
    LoadStudents,
    CreateStudent(NewStudent),
    DeleteStudent(StudentId),
    LoadAnalytics,
    /// Emit `DashboardEvent::Navigate(route)` after `delay_ms`
    NavigateLater { route: Route, delay_ms: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A toast shown until dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

/// State visible to UI panels
pub struct UiState {
    pub route: Route,
    pub session: SessionController,
    pub roster: StudentRoster,
    pub analytics: AnalyticsView,
    pub student_form: StudentForm,
    /// Set while a create-student request is outstanding
    pub submitting: bool,
    pub notifications: Vec<Notification>,
    pub show_settings: bool,
    pub redirect_delay_ms: u32,
}

impl UiState {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            route: Route::default(),
            session: SessionController::new(),
            roster: StudentRoster::new(),
            analytics: AnalyticsView::new(),
            student_form: StudentForm::default(),
            submitting: false,
            notifications: Vec::new(),
            show_settings: false,
            redirect_delay_ms: config.redirect_delay_ms,
        }
    }

    /// Commands to run once the app is mounted.
    pub fn startup(&mut self) -> Vec<UiCommand> {
        self.session.begin_directory_load();
        vec![UiCommand::LoadConversations]
    }

    /// Forget the chat session after the backend changed and reload
    /// whatever the current page shows. The app layer must also stop
    /// delivering events from requests issued before the switch.
    pub fn switch_backend(&mut self) -> Vec<UiCommand> {
        self.session.reset();
        // A create still in flight will never report back.
        self.submitting = false;
        let mut commands = self.startup();
        commands.extend(self.navigate(self.route));
        commands
    }

    pub fn status_text(&self) -> String {
        match self.session.state() {
            SendState::Idle if self.session.is_loading_directory() => {
                "Loading conversations...".to_string()
            }
            SendState::Idle => "Ready".to_string(),
            SendState::Sending | SendState::Reconciling => {
                format!("Waiting for {} reply(s)...", self.session.in_flight())
            }
        }
    }

    pub fn is_busy(&self) -> bool {
        self.session.state() != SendState::Idle
    }

    // ─── Navigation ──────────────────────────────────────────

    /// Switch pages. The students and analytics pages refetch on entry.
    pub fn navigate(&mut self, route: Route) -> Vec<UiCommand> {
        log::debug!("Navigating to {:?}", route);
        self.route = route;
        match route {
            Route::Chat => Vec::new(),
            Route::Students => {
                self.roster.begin_load();
                vec![UiCommand::LoadStudents]
            }
            Route::Analytics => {
                self.analytics.begin_load();
                vec![UiCommand::LoadAnalytics]
            }
            Route::AddStudent => {
                if !self.submitting {
                    self.student_form.clear();
                }
                Vec::new()
            }
        }
    }

    // ─── Chat ────────────────────────────────────────────────

    pub fn select_conversation(&mut self, id: ConversationId) -> Vec<UiCommand> {
        self.session
            .select_conversation(id)
            .map(UiCommand::FetchHistory)
            .into_iter()
            .collect()
    }

    pub fn new_conversation(&mut self) -> ConversationId {
        self.session.create_conversation()
    }

    /// Send the compose input, if it holds anything.
    pub fn submit_message(&mut self) -> Vec<UiCommand> {
        self.session
            .submit()
            .map(UiCommand::SendMessage)
            .into_iter()
            .collect()
    }

    // ─── Students ────────────────────────────────────────────

    /// Validate the add-student form. Only a valid form produces a request.
    pub fn submit_student_form(&mut self) -> Vec<UiCommand> {
        if self.submitting {
            return Vec::new();
        }
        match self.student_form.validate() {
            Ok(student) => {
                self.submitting = true;
                vec![UiCommand::CreateStudent(student)]
            }
            Err(e) => {
                log::debug!("Add-student form rejected: {}", e);
                self.notify(NoticeLevel::Error, "Error", e.to_string());
                Vec::new()
            }
        }
    }

    pub fn delete_student(&mut self, id: StudentId) -> Vec<UiCommand> {
        vec![UiCommand::DeleteStudent(id)]
    }

    // ─── Notifications ───────────────────────────────────────

    pub fn notify(&mut self, level: NoticeLevel, title: &str, message: impl Into<String>) {
        self.notifications.push(Notification {
            level,
            title: title.to_string(),
            message: message.into(),
        });
    }

    pub fn dismiss(&mut self, index: usize) {
        if index < self.notifications.len() {
            self.notifications.remove(index);
        }
    }

    // ─── Events ──────────────────────────────────────────────

    /// Apply drained EventBus events in order. Returns follow-up commands.
    pub fn process_events(&mut self, events: Vec<DashboardEvent>) -> Vec<UiCommand> {
        let mut commands = Vec::new();
        for event in events {
            match event {
                DashboardEvent::ConversationsLoaded(result) => {
                    if let Some(id) = self.session.apply_directory(result) {
                        commands.push(UiCommand::FetchHistory(id));
                    }
                }
                DashboardEvent::HistoryLoaded {
                    conversation_id,
                    result,
                } => {
                    self.session.apply_history(&conversation_id, result);
                }
                DashboardEvent::ReplyReceived { ticket, result } => {
                    let outcome = self.session.complete_send(ticket, result);
                    log::debug!("Send {:?} settled: {:?}", ticket, outcome);
                }
                DashboardEvent::StudentsLoaded(result) => {
                    self.roster.apply_loaded(result);
                }
                DashboardEvent::StudentCreated(result) => {
                    self.submitting = false;
                    match result {
                        Ok(student) => {
                            self.notify(
                                NoticeLevel::Info,
                                "Student Added Successfully!",
                                format!(
                                    "Student {} has been added with ID {}.",
                                    student.name, student.id
                                ),
                            );
                            self.student_form.clear();
                            commands.push(UiCommand::NavigateLater {
                                route: Route::Students,
                                delay_ms: self.redirect_delay_ms,
                            });
                        }
                        Err(e) => {
                            log::error!("Failed to add student: {}", e);
                            self.notify(
                                NoticeLevel::Error,
                                "Error",
                                "Failed to add student. Please try again.",
                            );
                        }
                    }
                }
                DashboardEvent::StudentDeleted { id, result } => {
                    if self.roster.apply_deleted(&id, result).is_err() {
                        self.notify(
                            NoticeLevel::Error,
                            "Error",
                            format!("Failed to delete student {}.", id),
                        );
                    }
                }
                DashboardEvent::AnalyticsLoaded(result) => {
                    self.analytics.apply_loaded(result);
                }
                DashboardEvent::Navigate(route) => {
                    commands.extend(self.navigate(route));
                }
            }
        }
        commands
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(&DashboardConfig::default())
    }
}
