//! Chat panel: conversation list, message log and compose input.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};

use campus_core::message_log::FAILED_REPLY_TEXT;
use campus_types::conversation::ConversationId;
use campus_types::message::{ChatMessage, Sender};

use crate::state::UiState;
use crate::theme::*;

/// What the user asked for in this frame
#[derive(Debug, Clone, PartialEq)]
pub enum ChatAction {
    Select(ConversationId),
    NewConversation,
    Send,
}

/// Render the chat page. Returns an action for the caller to turn into commands.
pub fn chat_panel(ui: &mut egui::Ui, state: &mut UiState) -> Option<ChatAction> {
    let mut action = None;

    ui.horizontal_top(|ui| {
        let list_width = 220.0_f32.min(ui.available_width() * 0.3);
        ui.allocate_ui(Vec2::new(list_width, ui.available_height()), |ui| {
            if let Some(a) = conversation_list(ui, state) {
                action = Some(a);
            }
        });

        ui.separator();

        ui.vertical(|ui| {
            if let Some(a) = conversation_view(ui, state) {
                action = Some(a);
            }
        });
    });

    action
}

fn conversation_list(ui: &mut egui::Ui, state: &UiState) -> Option<ChatAction> {
    let mut action = None;

    ui.vertical(|ui| {
        let new_btn = ui.add(
            egui::Button::new(RichText::new("+ New Chat").color(TEXT_ON_ACCENT))
                .fill(ACCENT)
                .corner_radius(PANEL_ROUNDING)
                .min_size(Vec2::new(ui.available_width(), 28.0)),
        );
        if new_btn.clicked() {
            action = Some(ChatAction::NewConversation);
        }

        ui.add_space(6.0);

        if state.session.is_loading_directory() {
            ui.label(RichText::new("Loading...").color(TEXT_SECONDARY).italics());
            return;
        }

        let directory = state.session.directory();
        if directory.is_empty() {
            ui.label(
                RichText::new("No conversations yet")
                    .color(TEXT_SECONDARY)
                    .small(),
            );
            return;
        }

        ScrollArea::vertical()
            .id_salt("conversation_list")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for entry in directory.entries() {
                    let selected = state.session.selected() == Some(&entry.id);
                    let mut label = short_id(entry.id.as_str());
                    if entry.is_provisional() {
                        label.push_str(" (new)");
                    }
                    if ui
                        .selectable_label(selected, RichText::new(label).monospace())
                        .on_hover_text(entry.id.as_str())
                        .clicked()
                        && !selected
                    {
                        action = Some(ChatAction::Select(entry.id.clone()));
                    }
                }
            });
    });

    action
}

fn conversation_view(ui: &mut egui::Ui, state: &mut UiState) -> Option<ChatAction> {
    let mut action = None;

    // Header
    ui.horizontal(|ui| {
        ui.heading(RichText::new("Campus Assistant").color(TEXT_PRIMARY).strong());
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let status_color = if state.is_busy() { WARNING } else { SUCCESS };
            ui.label(
                RichText::new(state.status_text())
                    .color(status_color)
                    .small(),
            );
        });
    });

    ui.separator();

    // Messages area
    let available_height = ui.available_height() - 60.0;
    ScrollArea::vertical()
        .id_salt("message_log")
        .max_height(available_height)
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            if state.session.is_loading_history() {
                ui.label(RichText::new("Loading messages...").color(TEXT_SECONDARY).italics());
            } else if state.session.log().is_empty() {
                ui.label(
                    RichText::new("Start a conversation by sending a message.")
                        .color(TEXT_SECONDARY),
                );
            }
            for msg in state.session.log().messages() {
                render_message(ui, msg);
                ui.add_space(4.0);
            }
        });

    ui.add_space(8.0);

    // Input area
    ui.horizontal(|ui| {
        let input = egui::TextEdit::singleline(state.session.compose_mut())
            .hint_text("Ask about students, courses, campus...")
            .desired_width(ui.available_width() - 70.0)
            .font(egui::FontId::proportional(14.0));

        let response = ui.add(input);

        let send_enabled = state.session.can_send();
        let send_btn = ui.add_enabled(
            send_enabled,
            egui::Button::new(RichText::new("Send").color(TEXT_ON_ACCENT))
                .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                .corner_radius(PANEL_ROUNDING)
                .min_size(Vec2::new(60.0, 0.0)),
        );

        // Submit on Enter or button click
        if (response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) && send_enabled)
            || send_btn.clicked()
        {
            action = Some(ChatAction::Send);
            response.request_focus();
        }
    });

    action
}

fn render_message(ui: &mut egui::Ui, msg: &ChatMessage) {
    let failed = msg.sender == Sender::Agent && msg.content == FAILED_REPLY_TEXT;
    let (label_color, bg) = match msg.sender {
        Sender::User => (ACCENT, BG_SECONDARY),
        Sender::Agent if failed => (ERROR, ERROR_BG),
        Sender::Agent => (SUCCESS, BG_SURFACE),
    };

    let layout = match msg.sender {
        Sender::User => Layout::top_down(Align::Max),
        Sender::Agent => Layout::top_down(Align::Min),
    };

    ui.with_layout(layout, |ui| {
        egui::Frame::default()
            .fill(bg)
            .corner_radius(PANEL_ROUNDING)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.set_max_width(ui.available_width() * 0.8);
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(msg.sender.label())
                            .color(label_color)
                            .strong()
                            .small(),
                    );
                    ui.label(
                        RichText::new(msg.timestamp.format("%H:%M").to_string())
                            .color(TEXT_SECONDARY)
                            .small(),
                    );
                });
                ui.label(RichText::new(&msg.content).color(TEXT_PRIMARY));
            });
    });
}

/// First segment of a UUID-style id, for the sidebar list
fn short_id(id: &str) -> String {
    id.split('-').next().unwrap_or(id).chars().take(12).collect()
}
