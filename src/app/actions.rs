use super::*;
use crate::model::QuizAction;

impl QuizApp {
    /// Runs one action through the pure transition and replaces the snapshot.
    pub fn dispatch(&mut self, action: QuizAction) {
        log::debug!("dispatch: {action:?}");
        let transition = self.state.apply(action, &self.questions);
        self.state = transition.state;
        if let Some(intent) = transition.theme {
            self.pending_theme = Some(intent);
        }
    }

    pub fn select_option(&mut self, option_id: usize) {
        self.dispatch(QuizAction::SelectOption(option_id));
    }

    pub fn restart_quiz(&mut self) {
        self.dispatch(QuizAction::Restart);
    }

    pub fn highlight(&mut self) {
        self.dispatch(QuizAction::Highlight);
    }

    pub fn remove_highlight(&mut self) {
        self.dispatch(QuizAction::RemoveHighlight);
    }

    pub fn toggle_theme(&mut self) {
        self.dispatch(QuizAction::ToggleTheme);
    }

    /// Hands the pending theme switch to the rendering boundary.
    /// Each toggle produces exactly one intent to apply.
    pub fn take_theme_intent(&mut self) -> Option<ThemeIntent> {
        self.pending_theme.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ThemeIntent;

    #[test]
    fn toggle_theme_leaves_one_intent_for_the_boundary() {
        let mut app = QuizApp::new();
        app.toggle_theme();
        assert_eq!(app.take_theme_intent(), Some(ThemeIntent::Dark));
        assert_eq!(app.take_theme_intent(), None);
    }

    #[test]
    fn restart_resets_everything() {
        let mut app = QuizApp::new();
        app.select_option(1);
        app.highlight();
        app.restart_quiz();
        assert_eq!(app.state, crate::model::QuizState::default());
    }
}
