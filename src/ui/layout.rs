use crate::model::ThemeIntent;
use egui::{CentralPanel, Context, Frame, Margin, Ui, Visuals};

/// Applies a theme intent to the global egui visuals. This is the only
/// place the theme side channel is written.
pub fn apply_theme(ctx: &Context, intent: ThemeIntent) {
    match intent {
        ThemeIntent::Dark => ctx.set_visuals(Visuals::dark()),
        ThemeIntent::Light => ctx.set_visuals(Visuals::light()),
    }
}

/// Panel centered vertically, with a bounded content width and an inner
/// content block.
pub fn centered_panel(
    ctx: &Context,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(Margin::symmetric(16, 16))
            .show(ui, |ui| {
                let w = ui.available_width().min(max_width);
                ui.set_width(w);
                inner(ui);
            });
        ui.add_space(extra);
    });
}
