//! Dashboard colors and spacing. Light surfaces with a violet accent.

use egui::{Color32, CornerRadius, Stroke, Vec2};

pub const BG_PRIMARY: Color32 = Color32::from_rgb(248, 250, 252);
pub const BG_SECONDARY: Color32 = Color32::from_rgb(255, 255, 255);
pub const BG_SURFACE: Color32 = Color32::from_rgb(241, 245, 249);
pub const BG_SIDEBAR: Color32 = Color32::from_rgb(30, 27, 75);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(15, 23, 42);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(100, 116, 139);
pub const TEXT_ON_ACCENT: Color32 = Color32::WHITE;
pub const ACCENT: Color32 = Color32::from_rgb(0x8B, 0x5C, 0xF6);
pub const SUCCESS: Color32 = Color32::from_rgb(0x10, 0xB9, 0x81);
pub const ERROR: Color32 = Color32::from_rgb(0xEF, 0x44, 0x44);
pub const WARNING: Color32 = Color32::from_rgb(0xF5, 0x9E, 0x0B);
pub const ERROR_BG: Color32 = Color32::from_rgb(254, 226, 226);
pub const BORDER: Color32 = Color32::from_rgb(226, 232, 240);

pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(8);
pub const PANEL_PADDING: Vec2 = Vec2::new(14.0, 10.0);

/// Palette entries from campus-core are plain RGB triples
pub fn rgb(color: [u8; 3]) -> Color32 {
    Color32::from_rgb(color[0], color[1], color[2])
}

pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();

    visuals.panel_fill = BG_PRIMARY;
    visuals.window_fill = BG_SECONDARY;
    visuals.faint_bg_color = BG_SURFACE;
    visuals.window_stroke = Stroke::new(1.0, BORDER);

    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, BORDER);
    visuals.widgets.inactive.bg_fill = BG_SURFACE;
    visuals.widgets.inactive.weak_bg_fill = BG_SURFACE;
    visuals.widgets.hovered.bg_fill = BORDER;
    visuals.widgets.active.bg_fill = ACCENT;
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, TEXT_ON_ACCENT);

    visuals.selection.bg_fill = ACCENT.linear_multiply(0.25);
    visuals.selection.stroke = Stroke::new(1.0, ACCENT);
    visuals.hyperlink_color = ACCENT;

    ctx.set_visuals(visuals);
    ctx.style_mut(|style| style.spacing.item_spacing = Vec2::new(8.0, 6.0));
}
