//! Main egui application: composes all panels and runs backend requests.

use std::future::Future;
use std::rc::Rc;

use egui::{self, CentralPanel, RichText, SidePanel, TopBottomPanel};
use gloo_timers::future::TimeoutFuture;

use campus_core::event_bus::EventBus;
use campus_core::ports::{AnalyticsPort, ChatBackendPort, StudentServicePort};
use campus_platform::HttpBackend;
use campus_types::config::DashboardConfig;
use campus_types::event::{DashboardEvent, Route};
use campus_ui::panels::add_student::{self, AddStudentAction};
use campus_ui::panels::chat::{self, ChatAction};
use campus_ui::panels::settings::{self, ApplyFeedback, SettingsAction};
use campus_ui::panels::students::{self, StudentsAction};
use campus_ui::panels::{analytics, sidebar};
use campus_ui::state::{UiCommand, UiState};
use campus_ui::theme;

/// The backend behind each port. All three share one HTTP client.
struct Ports {
    chat: Rc<dyn ChatBackendPort>,
    students: Rc<dyn StudentServicePort>,
    analytics: Rc<dyn AnalyticsPort>,
}

impl Ports {
    fn http(config: &DashboardConfig) -> Self {
        let backend = Rc::new(HttpBackend::new(config));
        log::info!("Using backend at {}", backend.endpoints().base());
        Self {
            chat: backend.clone(),
            students: backend.clone(),
            analytics: backend,
        }
    }
}

/// The main application state
pub struct DashboardApp {
    ui_state: UiState,
    config: DashboardConfig,
    /// Settings being edited, applied on demand
    draft: DashboardConfig,
    apply_feedback: Option<ApplyFeedback>,
    event_bus: EventBus,
    ports: Ports,
    first_frame: bool,
}

impl DashboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = DashboardConfig::default();
        Self {
            ui_state: UiState::new(&config),
            draft: config.clone(),
            ports: Ports::http(&config),
            config,
            apply_feedback: None,
            event_bus: EventBus::new(),
            first_frame: true,
        }
    }

    /// Validate the settings draft and swap in a new backend client.
    fn apply_settings(&mut self, ctx: &egui::Context) {
        if let Err(e) = self.draft.validate() {
            log::warn!("Settings rejected: {}", e);
            self.apply_feedback = Some(ApplyFeedback {
                message: e.to_string(),
                success: false,
            });
            return;
        }

        let base_changed = self.draft.api_base.trim() != self.config.api_base.trim();
        self.config = self.draft.clone();
        self.ui_state.redirect_delay_ms = self.config.redirect_delay_ms;
        self.apply_feedback = Some(ApplyFeedback {
            message: "Settings applied".to_string(),
            success: true,
        });

        if base_changed {
            self.ports = Ports::http(&self.config);
            // Conversations from the old server mean nothing to the new one.
            self.event_bus.advance_generation();
            let commands = self.ui_state.switch_backend();
            self.dispatch(commands, ctx);
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            let commands = self.ui_state.startup();
            self.dispatch(commands, ctx);
            self.first_frame = false;
        }

        // Drain completions from spawned requests
        let events = self.event_bus.drain();
        if !events.is_empty() {
            let commands = self.ui_state.process_events(events);
            self.dispatch(commands, ctx);
            ctx.request_repaint();
        }

        let mut commands = Vec::new();

        // ── Top bar ──────────────────────────────────────────
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Campus Dashboard")
                        .strong()
                        .color(theme::ACCENT)
                        .size(16.0),
                );
                ui.separator();
                ui.label(
                    RichText::new(format!("Backend: {}", self.config.api_base))
                        .color(theme::TEXT_SECONDARY)
                        .small(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .selectable_label(self.ui_state.show_settings, "Settings")
                        .clicked()
                    {
                        self.ui_state.show_settings = !self.ui_state.show_settings;
                        self.draft = self.config.clone();
                        self.apply_feedback = None;
                    }
                });
            });
        });

        // ── Navigation ───────────────────────────────────────
        SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(180.0)
            .frame(egui::Frame::default().fill(theme::BG_SIDEBAR).inner_margin(8.0))
            .show(ctx, |ui| {
                if let Some(route) = sidebar::sidebar_panel(ui, &self.ui_state) {
                    commands.extend(self.ui_state.navigate(route));
                }
            });

        // ── Settings side panel ──────────────────────────────
        if self.ui_state.show_settings {
            let mut apply = false;
            SidePanel::right("settings_panel")
                .min_width(280.0)
                .max_width(350.0)
                .show(ctx, |ui| {
                    match settings::settings_panel(ui, &mut self.draft, self.apply_feedback.as_ref()) {
                        SettingsAction::ApplyClicked => apply = true,
                        SettingsAction::ResetClicked => {
                            self.draft = DashboardConfig::default();
                            self.apply_feedback = None;
                        }
                        SettingsAction::Changed => self.apply_feedback = None,
                        SettingsAction::None => {}
                    }
                });
            if apply {
                self.apply_settings(ctx);
            }
        }

        // ── Main content ─────────────────────────────────────
        CentralPanel::default().show(ctx, |ui| {
            let state = &mut self.ui_state;
            match state.route {
                Route::Chat => match chat::chat_panel(ui, state) {
                    Some(ChatAction::Select(id)) => commands.extend(state.select_conversation(id)),
                    Some(ChatAction::NewConversation) => {
                        state.new_conversation();
                    }
                    Some(ChatAction::Send) => commands.extend(state.submit_message()),
                    None => {}
                },
                Route::Students => match students::students_panel(ui, state) {
                    Some(StudentsAction::Add) => commands.extend(state.navigate(Route::AddStudent)),
                    Some(StudentsAction::Delete(id)) => commands.extend(state.delete_student(id)),
                    Some(StudentsAction::Refresh) => commands.extend(state.navigate(Route::Students)),
                    None => {}
                },
                Route::AddStudent => match add_student::add_student_panel(ui, state) {
                    Some(AddStudentAction::Submit) => commands.extend(state.submit_student_form()),
                    Some(AddStudentAction::Back) => commands.extend(state.navigate(Route::Students)),
                    None => {}
                },
                Route::Analytics => {
                    if analytics::analytics_panel(ui, state) {
                        commands.extend(state.navigate(Route::Analytics));
                    }
                }
            }
        });

        // ── Notifications ────────────────────────────────────
        if !self.ui_state.notifications.is_empty() {
            egui::Area::new(egui::Id::new("notifications"))
                .anchor(egui::Align2::RIGHT_TOP, [-12.0, 40.0])
                .show(ctx, |ui| {
                    if let Some(idx) = sidebar::notifications_panel(ui, &self.ui_state) {
                        self.ui_state.dismiss(idx);
                    }
                });
        }

        self.dispatch(commands, ctx);
    }
}

impl DashboardApp {
    /// Start each command on the browser executor
    fn dispatch(&self, commands: Vec<UiCommand>, ctx: &egui::Context) {
        for command in commands {
            match command {
                UiCommand::LoadConversations => {
                    let chat = self.ports.chat.clone();
                    self.spawn(ctx, async move {
                        DashboardEvent::ConversationsLoaded(chat.list_conversations().await)
                    });
                }
                UiCommand::FetchHistory(conversation_id) => {
                    let chat = self.ports.chat.clone();
                    self.spawn(ctx, async move {
                        let result = chat.fetch_conversation(&conversation_id).await;
                        DashboardEvent::HistoryLoaded {
                            conversation_id,
                            result,
                        }
                    });
                }
                UiCommand::SendMessage(outgoing) => {
                    let chat = self.ports.chat.clone();
                    self.spawn(ctx, async move {
                        DashboardEvent::ReplyReceived {
                            ticket: outgoing.ticket,
                            result: chat.send_message(outgoing.request).await,
                        }
                    });
                }
                UiCommand::LoadStudents => {
                    let students = self.ports.students.clone();
                    self.spawn(ctx, async move {
                        DashboardEvent::StudentsLoaded(students.list_students().await)
                    });
                }
                UiCommand::CreateStudent(student) => {
                    let students = self.ports.students.clone();
                    self.spawn(ctx, async move {
                        DashboardEvent::StudentCreated(students.create_student(student).await)
                    });
                }
                UiCommand::DeleteStudent(id) => {
                    let students = self.ports.students.clone();
                    self.spawn(ctx, async move {
                        let result = students.delete_student(&id).await;
                        DashboardEvent::StudentDeleted { id, result }
                    });
                }
                UiCommand::LoadAnalytics => {
                    let analytics = self.ports.analytics.clone();
                    self.spawn(ctx, async move {
                        DashboardEvent::AnalyticsLoaded(analytics.fetch_analytics().await)
                    });
                }
                UiCommand::NavigateLater { route, delay_ms } => {
                    self.spawn(ctx, async move {
                        TimeoutFuture::new(delay_ms).await;
                        DashboardEvent::Navigate(route)
                    });
                }
            }
        }
    }

    /// Run `task` to completion and publish its event under the generation
    /// current at dispatch time.
    fn spawn(&self, ctx: &egui::Context, task: impl Future<Output = DashboardEvent> + 'static) {
        let sender = self.event_bus.sender();
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            sender.emit(task.await);
            ctx.request_repaint();
        });
    }
}
