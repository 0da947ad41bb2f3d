use serde::{Deserialize, Serialize};

/// One selectable answer inside a question.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AnswerOption {
    pub id: usize,
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

/// A question from the bank. Exactly one option is expected to be correct;
/// the core does not validate this.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Question {
    pub id: usize,
    pub text: String,
    pub options: Vec<AnswerOption>,
}

/// Full snapshot of quiz progress plus the two UI toggles.
/// Replaced wholesale on every transition, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuizState {
    pub current_question: usize,
    pub selected_option: Option<usize>,
    pub highlighted: bool,
    pub dark_theme: bool,
    pub correct_answers: usize,
    pub completed: bool,
}

/// User interactions the quiz reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAction {
    SelectOption(usize),
    Restart,
    Highlight,
    RemoveHighlight,
    ToggleTheme,
}

/// Request for the rendering boundary to switch the global visuals.
/// The core never touches the visuals itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeIntent {
    Dark,
    Light,
}
