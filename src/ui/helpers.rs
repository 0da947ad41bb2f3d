// src/ui/helpers.rs
use egui::{Button, SelectableLabel, Ui, Vec2};

/// Full-width selectable row for one answer option. Returns true on click.
pub fn option_button(ui: &mut Ui, label: &str, selected: bool, width: f32, height: f32) -> bool {
    ui.add_sized([width, height], SelectableLabel::new(selected, label))
        .clicked()
}

/// Draws two equally sized buttons in one row, each with its own enabled
/// flag. Returns (left clicked, right clicked).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left: (&str, bool),
    right: (&str, bool),
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        // space to center the row inside its panel
        ui.add_space((ui.available_width() - panel_width) / 2.0);
        clicked_left = ui
            .add_enabled(left.1, Button::new(left.0).min_size(Vec2::new(btn_w, 36.0)))
            .clicked();
        clicked_right = ui
            .add_enabled(right.1, Button::new(right.0).min_size(Vec2::new(btn_w, 36.0)))
            .clicked();
    });
    (clicked_left, clicked_right)
}
