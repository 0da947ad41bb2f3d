use crate::data::read_questions_embedded;
use crate::model::{Question, QuizState, ThemeIntent};

// Submodules
pub mod actions;
pub mod queries;
pub mod transitions;
pub mod view_models;

/// Owns the immutable question bank and the single mutable state snapshot.
/// All interaction goes through the dispatch methods in `actions`.
pub struct QuizApp {
    pub questions: Vec<Question>,
    pub state: QuizState,
    /// Theme switch requested by the last transition, not yet applied
    /// by the rendering boundary.
    pub pending_theme: Option<ThemeIntent>,
}

impl QuizApp {
    pub fn new() -> Self {
        Self::with_questions(read_questions_embedded())
    }

    /// Builds the app over an externally supplied bank. The displayed
    /// question total always follows the length of this sequence.
    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            questions,
            state: QuizState::default(),
            pending_theme: None,
        }
    }
}

impl Default for QuizApp {
    fn default() -> Self {
        Self::new()
    }
}
