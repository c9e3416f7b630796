use bevy_egui::{egui, EguiContexts};

/// Light theme with green selection accents.
pub fn apply_calculator_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();

    let accent = egui::Color32::from_rgb(46, 139, 87);
    let hover = egui::Color32::from_rgb(200, 230, 210);

    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.weak_bg_fill = accent;
    style.visuals.selection.bg_fill = accent;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, accent);
    style.visuals.slider_trailing_fill = true;

    // egui 0.31+ uses CornerRadius with u8 values
    style.visuals.window_corner_radius = egui::CornerRadius::same(8);
    style.visuals.widgets.inactive.corner_radius = egui::CornerRadius::same(6);
    style.visuals.widgets.hovered.corner_radius = egui::CornerRadius::same(6);
    style.visuals.widgets.active.corner_radius = egui::CornerRadius::same(6);

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.slider_width = 220.0;

    ctx.set_style(style);
}
