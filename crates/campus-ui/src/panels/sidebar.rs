//! Sidebar navigation and notification toasts.

use egui::{self, RichText, Vec2};
use campus_types::event::Route;

use crate::state::{NoticeLevel, UiState};
use crate::theme::*;

/// Render the route list. Returns the route the user clicked, if any.
pub fn sidebar_panel(ui: &mut egui::Ui, state: &UiState) -> Option<Route> {
    let mut picked = None;

    ui.add_space(8.0);
    ui.label(RichText::new("Campus Admin").color(ACCENT).strong().size(18.0));
    ui.add_space(12.0);

    for route in Route::all() {
        let selected = state.route == *route;
        let text = RichText::new(route.label()).color(if selected { TEXT_ON_ACCENT } else { BORDER });
        let btn = ui.add(
            egui::Button::new(text)
                .fill(if selected { ACCENT } else { BG_SIDEBAR })
                .corner_radius(PANEL_ROUNDING)
                .min_size(Vec2::new(ui.available_width(), 30.0)),
        );
        if btn.clicked() && !selected {
            picked = Some(*route);
        }
    }

    picked
}

/// Render pending notifications. Returns the index the user dismissed.
pub fn notifications_panel(ui: &mut egui::Ui, state: &UiState) -> Option<usize> {
    let mut dismissed = None;

    for (idx, notice) in state.notifications.iter().enumerate() {
        let (accent, bg) = match notice.level {
            NoticeLevel::Info => (SUCCESS, BG_SECONDARY),
            NoticeLevel::Error => (ERROR, ERROR_BG),
        };
        egui::Frame::default()
            .fill(bg)
            .corner_radius(PANEL_ROUNDING)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.set_width(260.0);
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&notice.title).color(accent).strong());
                    if ui.small_button("x").clicked() {
                        dismissed = Some(idx);
                    }
                });
                ui.label(RichText::new(&notice.message).color(TEXT_PRIMARY).small());
            });
        ui.add_space(4.0);
    }

    dismissed
}
