use crate::QuizApp;
use crate::ui::layout::centered_panel;
use egui::{Button, Context};

pub fn ui_result(app: &mut QuizApp, ctx: &Context) {
    let card = app.result_card();

    centered_panel(ctx, 240.0, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Quiz result");
            ui.add_space(12.0);
            ui.label(&card.score_line);
            ui.label(format!("({}%)", card.percentage_label));
            ui.add_space(16.0);

            let button_width = ui.available_width().min(240.0);
            if ui
                .add_sized([button_width, 36.0], Button::new("🔄 Restart quiz"))
                .clicked()
            {
                app.restart_quiz();
            }
        });
    });
}
