//! Settings panel: backend URL and redirect delay.
//! Edits apply to a draft; the Apply button hands it back for validation.

use egui::{self, RichText, Vec2};
use campus_types::config::{DashboardConfig, DEFAULT_API_BASE};
use crate::theme::*;

/// What the caller should do after rendering the settings panel
pub enum SettingsAction {
    /// Nothing changed
    None,
    /// A field was edited but not applied yet
    Changed,
    /// The user clicked Apply
    ApplyClicked,
    /// The user asked for the built-in defaults
    ResetClicked,
}

/// Apply feedback passed in from the app layer
#[derive(Clone)]
pub struct ApplyFeedback {
    pub message: String,
    pub success: bool,
}

/// Render the settings panel. Returns an action for the caller to handle.
pub fn settings_panel(
    ui: &mut egui::Ui,
    draft: &mut DashboardConfig,
    feedback: Option<&ApplyFeedback>,
) -> SettingsAction {
    let mut changed = false;
    let mut apply_clicked = false;
    let mut reset_clicked = false;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.heading(RichText::new("Settings").color(TEXT_PRIMARY));
            ui.separator();

            // ── Backend Section ──────────────────────────────
            ui.label(RichText::new("Backend").color(ACCENT).strong());
            ui.add_space(2.0);

            ui.label(RichText::new("API Base URL").color(TEXT_SECONDARY).small());
            if ui
                .add(egui::TextEdit::singleline(&mut draft.api_base).hint_text(DEFAULT_API_BASE))
                .changed()
            {
                changed = true;
            }

            ui.add_space(4.0);
            ui.label(
                RichText::new("Conversations, students and analytics are all fetched from this server.")
                    .color(TEXT_SECONDARY)
                    .small()
                    .italics(),
            );

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(4.0);

            // ── Behaviour Section ────────────────────────────
            ui.label(RichText::new("Behaviour").color(ACCENT).strong());
            ui.add_space(2.0);

            ui.label(
                RichText::new("Return to list after adding a student (ms)")
                    .color(TEXT_SECONDARY)
                    .small(),
            );
            if ui
                .add(egui::Slider::new(&mut draft.redirect_delay_ms, 0..=5000))
                .changed()
            {
                changed = true;
            }

            // ── Apply Button ─────────────────────────────────
            ui.add_space(16.0);
            ui.separator();
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn = ui.add(
                    egui::Button::new(RichText::new("Apply").color(TEXT_ON_ACCENT).strong())
                        .fill(ACCENT)
                        .corner_radius(PANEL_ROUNDING)
                        .min_size(Vec2::new(100.0, 28.0)),
                );
                if btn.clicked() {
                    apply_clicked = true;
                }
                if ui.button("Defaults").clicked() {
                    reset_clicked = true;
                }
            });

            if let Some(fb) = feedback {
                let color = if fb.success { SUCCESS } else { ERROR };
                ui.label(RichText::new(&fb.message).color(color).small());
            }
        });

    if apply_clicked {
        SettingsAction::ApplyClicked
    } else if reset_clicked {
        SettingsAction::ResetClicked
    } else if changed {
        SettingsAction::Changed
    } else {
        SettingsAction::None
    }
}
