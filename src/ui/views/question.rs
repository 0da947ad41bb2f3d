use crate::QuizApp;
use crate::ui::helpers::{option_button, two_button_row};
use crate::ui::layout::centered_panel;
use egui::{Color32, Context, RichText};

pub fn ui_question(app: &mut QuizApp, ctx: &Context) {
    let card = app.question_card();

    centered_panel(ctx, 420.0, 540.0, |ui| {
        ui.vertical_centered(|ui| {
            let panel_width = ui.available_width().min(480.0);

            ui.heading("Quiz");
            ui.add_space(6.0);
            ui.label(&card.header);
            ui.add_space(10.0);

            let title = if card.highlighted {
                RichText::new(&card.title).strong().color(Color32::YELLOW)
            } else {
                RichText::new(&card.title).strong()
            };
            ui.label(title);
            ui.add_space(12.0);

            let mut clicked_option = None;
            for row in &card.options {
                if option_button(ui, &row.label, row.selected, panel_width, 32.0) {
                    clicked_option = Some(row.id);
                }
                ui.add_space(4.0);
            }

            ui.add_space(10.0);
            let (highlight, remove_highlight) = two_button_row(
                ui,
                panel_width,
                ("Highlight", !card.highlighted),
                ("Remove highlight", card.highlighted),
            );
            ui.add_space(6.0);
            let toggle_theme = ui
                .add_sized([panel_width, 32.0], egui::Button::new(card.theme_label))
                .clicked();

            if let Some(option_id) = clicked_option {
                app.select_option(option_id);
            }
            if highlight {
                app.highlight();
            }
            if remove_highlight {
                app.remove_highlight();
            }
            if toggle_theme {
                app.toggle_theme();
            }
        });
    });
}
