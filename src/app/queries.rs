use super::*;

impl QuizApp {
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// The question the snapshot points at. In range by construction while
    /// the quiz is in progress.
    pub fn current_question(&self) -> &Question {
        &self.questions[self.state.current_question]
    }

    pub fn is_completed(&self) -> bool {
        self.state.completed
    }
}
