use crate::model::{Question, QuizAction, QuizState, ThemeIntent};

/// Result of applying one action: the replacement snapshot plus an optional
/// request for the rendering boundary to switch the global theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: QuizState,
    pub theme: Option<ThemeIntent>,
}

impl Transition {
    fn state_only(state: QuizState) -> Self {
        Self { state, theme: None }
    }
}

impl QuizState {
    /// Pure transition `(state, action) -> state`. `questions` is the fixed
    /// bank the indices refer to; callers guarantee the current index is in
    /// range and that no selection arrives on a completed quiz.
    pub fn apply(&self, action: QuizAction, questions: &[Question]) -> Transition {
        match action {
            QuizAction::SelectOption(option_id) => self.select_option(option_id, questions),
            QuizAction::Restart => self.restart(),
            QuizAction::Highlight => Transition::state_only(QuizState {
                highlighted: true,
                ..self.clone()
            }),
            QuizAction::RemoveHighlight => Transition::state_only(QuizState {
                highlighted: false,
                ..self.clone()
            }),
            QuizAction::ToggleTheme => self.toggle_theme(),
        }
    }

    fn select_option(&self, option_id: usize, questions: &[Question]) -> Transition {
        let chosen_is_correct = questions[self.current_question]
            .options
            .iter()
            .find(|o| o.id == option_id)
            .map(|o| o.is_correct)
            .unwrap_or(false);

        // Completion and the advance check are both evaluated against the
        // pre-transition index: answering the last question completes the
        // quiz on that same submission, with the index left unchanged.
        let on_last_question = self.current_question == questions.len() - 1;

        Transition::state_only(QuizState {
            selected_option: Some(option_id),
            correct_answers: self.correct_answers + usize::from(chosen_is_correct),
            current_question: if on_last_question {
                self.current_question
            } else {
                self.current_question + 1
            },
            completed: on_last_question,
            ..self.clone()
        })
    }

    fn restart(&self) -> Transition {
        // The visible theme has to follow dark_theme back to its default,
        // otherwise the screen stays dark over a state that says light.
        let theme = self.dark_theme.then_some(ThemeIntent::Light);
        Transition {
            state: QuizState::default(),
            theme,
        }
    }

    fn toggle_theme(&self) -> Transition {
        let dark_theme = !self.dark_theme;
        Transition {
            state: QuizState {
                dark_theme,
                ..self.clone()
            },
            // Intent carries the post-toggle value.
            theme: Some(if dark_theme {
                ThemeIntent::Dark
            } else {
                ThemeIntent::Light
            }),
        }
    }
}
