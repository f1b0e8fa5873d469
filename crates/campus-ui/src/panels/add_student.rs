//! Add-student form.

use egui::{self, RichText, Vec2};

use crate::state::UiState;
use crate::theme::*;

pub enum AddStudentAction {
    Submit,
    Back,
}

pub fn add_student_panel(ui: &mut egui::Ui, state: &mut UiState) -> Option<AddStudentAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        if ui.button("< Back to Students").clicked() {
            action = Some(AddStudentAction::Back);
        }
        ui.vertical(|ui| {
            ui.heading(RichText::new("Add New Student").color(TEXT_PRIMARY).strong());
            ui.label(
                RichText::new("Enter student information to add them to the system")
                    .color(TEXT_SECONDARY)
                    .small(),
            );
        });
    });

    ui.separator();

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.set_max_width(560.0);
            ui.label(RichText::new("Student Information").color(ACCENT).strong());
            ui.add_space(4.0);

            let form = &mut state.student_form;
            egui::Grid::new("add_student_form")
                .num_columns(2)
                .spacing(Vec2::new(12.0, 8.0))
                .show(ui, |ui| {
                    field(ui, "Full Name *", "Enter full name", &mut form.name);
                    field(ui, "Student ID *", "Enter student ID", &mut form.id);
                    field(ui, "Department *", "e.g. Computer Science", &mut form.department);
                    field(ui, "Email *", "student@university.edu", &mut form.email);
                });

            ui.add_space(12.0);

            let label = if state.submitting { "Adding Student..." } else { "Add Student" };
            let submit = ui.add_enabled(
                !state.submitting,
                egui::Button::new(RichText::new(label).color(TEXT_ON_ACCENT).strong())
                    .fill(ACCENT)
                    .corner_radius(PANEL_ROUNDING)
                    .min_size(Vec2::new(140.0, 28.0)),
            );
            if submit.clicked() {
                action = Some(AddStudentAction::Submit);
            }
        });

    action
}

fn field(ui: &mut egui::Ui, label: &str, hint: &str, value: &mut String) {
    ui.label(RichText::new(label).color(TEXT_SECONDARY));
    ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(320.0),
    );
    ui.end_row();
}
