//! Students panel: searchable roster table with delete buttons.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};

use campus_types::student::StudentId;

use crate::state::UiState;
use crate::theme::*;

pub enum StudentsAction {
    Add,
    Delete(StudentId),
    Refresh,
}

pub fn students_panel(ui: &mut egui::Ui, state: &mut UiState) -> Option<StudentsAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.heading(RichText::new("Students").color(TEXT_PRIMARY).strong());
            ui.label(
                RichText::new("Manage student registrations and information")
                    .color(TEXT_SECONDARY)
                    .small(),
            );
        });
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let add_btn = ui.add(
                egui::Button::new(RichText::new("Add Student").color(TEXT_ON_ACCENT))
                    .fill(ACCENT)
                    .corner_radius(PANEL_ROUNDING),
            );
            if add_btn.clicked() {
                action = Some(StudentsAction::Add);
            }
            if ui.button("Refresh").clicked() {
                action = Some(StudentsAction::Refresh);
            }
        });
    });

    ui.separator();

    if state.roster.is_loading() {
        ui.label(RichText::new("Loading students...").color(TEXT_SECONDARY).italics());
        return action;
    }

    let visible = state.roster.filtered().len();
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(format!("All Students ({})", visible))
                .color(TEXT_PRIMARY)
                .strong(),
        );
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.add(
                egui::TextEdit::singleline(state.roster.search_mut())
                    .hint_text("Search students...")
                    .desired_width(240.0),
            );
        });
    });

    ui.add_space(6.0);

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            let rows = state.roster.filtered();
            if rows.is_empty() {
                ui.add_space(24.0);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("No students found.").color(TEXT_SECONDARY));
                });
                ui.add_space(24.0);
                return;
            }

            ScrollArea::vertical()
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    egui::Grid::new("students_table")
                        .striped(true)
                        .num_columns(6)
                        .spacing(Vec2::new(16.0, 8.0))
                        .show(ui, |ui| {
                            for header in ["ID", "Name", "Department", "Email", "Last Active", ""] {
                                ui.label(RichText::new(header).color(TEXT_SECONDARY).small().strong());
                            }
                            ui.end_row();

                            for student in rows {
                                ui.label(RichText::new(student.id.to_string()).monospace());
                                ui.label(RichText::new(&student.name).color(TEXT_PRIMARY));
                                ui.label(RichText::new(&student.department).color(ACCENT));
                                ui.label(RichText::new(&student.email).color(TEXT_SECONDARY));
                                ui.label(
                                    RichText::new(
                                        student.last_active_date().unwrap_or_else(|| "-".to_string()),
                                    )
                                    .color(TEXT_SECONDARY),
                                );
                                let delete = ui.add(
                                    egui::Button::new(RichText::new("Delete").color(ERROR).small())
                                        .corner_radius(PANEL_ROUNDING),
                                );
                                if delete.clicked() {
                                    action = Some(StudentsAction::Delete(student.id.clone()));
                                }
                                ui.end_row();
                            }
                        });
                });
        });

    action
}
