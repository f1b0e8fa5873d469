//! Analytics panel: stat cards, department breakdown and recent activity.

use egui::{self, Align, Layout, RichText, Vec2};

use campus_core::analytics::AnalyticsSummary;

use crate::state::UiState;
use crate::theme::*;

/// Returns true when the user asked for a refresh.
pub fn analytics_panel(ui: &mut egui::Ui, state: &UiState) -> bool {
    let mut refresh = false;

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.heading(RichText::new("Analytics").color(TEXT_PRIMARY).strong());
            ui.label(
                RichText::new("Campus overview and student activity")
                    .color(TEXT_SECONDARY)
                    .small(),
            );
        });
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            refresh = ui.button("Refresh").clicked();
        });
    });

    ui.separator();

    if state.analytics.is_loading() {
        ui.label(RichText::new("Loading analytics...").color(TEXT_SECONDARY).italics());
        return refresh;
    }

    match state.analytics.summary() {
        Some(summary) => {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| render_summary(ui, summary));
        }
        None => {
            ui.label(RichText::new("Failed to load analytics.").color(ERROR));
        }
    }

    refresh
}

fn render_summary(ui: &mut egui::Ui, summary: &AnalyticsSummary) {
    ui.horizontal_wrapped(|ui| {
        for card in &summary.stats {
            egui::Frame::default()
                .fill(BG_SECONDARY)
                .corner_radius(PANEL_ROUNDING)
                .inner_margin(PANEL_PADDING)
                .show(ui, |ui| {
                    ui.set_min_size(Vec2::new(160.0, 56.0));
                    ui.vertical(|ui| {
                        ui.label(RichText::new(card.title).color(TEXT_SECONDARY).small());
                        ui.label(
                            RichText::new(&card.value)
                                .color(TEXT_PRIMARY)
                                .size(22.0)
                                .strong(),
                        );
                    });
                });
        }
    });

    ui.add_space(12.0);
    section(ui, "Students by Department", |ui| {
        if summary.departments.is_empty() {
            ui.label(RichText::new("No departments yet").color(TEXT_SECONDARY));
        }
        for slice in &summary.departments {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&slice.department).color(TEXT_PRIMARY));
                ui.add(
                    egui::ProgressBar::new(slice.share)
                        .fill(rgb(slice.color))
                        .desired_width(ui.available_width())
                        .text(format!("{} ({:.0}%)", slice.count, slice.share * 100.0)),
                );
            });
        }
    });

    ui.add_space(12.0);
    section(ui, "Active in the Last 7 Days", |ui| {
        if summary.activity.is_empty() {
            ui.label(RichText::new("No recent activity").color(TEXT_SECONDARY));
        }
        let max = summary.activity.iter().map(|a| a.logins).max().unwrap_or(1).max(1);
        for bar in &summary.activity {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&bar.name).color(TEXT_PRIMARY));
                ui.add(
                    egui::ProgressBar::new(bar.logins as f32 / max as f32)
                        .fill(ACCENT)
                        .desired_width(ui.available_width())
                        .text(format!("{} login(s)", bar.logins)),
                );
            });
        }
    });

    ui.add_space(12.0);
    section(ui, "Recently Onboarded", |ui| {
        egui::Grid::new("recent_students")
            .striped(true)
            .num_columns(3)
            .show(ui, |ui| {
                for student in &summary.recent {
                    ui.label(RichText::new(&student.name).color(TEXT_PRIMARY));
                    ui.label(RichText::new(&student.department).color(ACCENT));
                    ui.label(RichText::new(&student.email).color(TEXT_SECONDARY));
                    ui.end_row();
                }
            });
    });
}

fn section(ui: &mut egui::Ui, title: &str, body: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(title).color(ACCENT).strong());
            ui.add_space(4.0);
            body(ui);
        });
}
