mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use eframe::{App, Frame};
use egui::Context;
use layout::apply_theme;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Apply a theme switch requested by the last transition before
        // drawing this frame.
        if let Some(intent) = self.take_theme_intent() {
            apply_theme(ctx, intent);
        }

        // Dispatch by completion flag to the view functions in views/
        if self.is_completed() {
            views::result::ui_result(self, ctx);
        } else {
            views::question::ui_question(self, ctx);
        }
    }
}
