use super::*;
use crate::view_models::{OptionRow, QuestionCard, ResultCard, option_letter};

impl QuizApp {
    /// Snapshot of everything the question view needs to draw.
    pub fn question_card(&self) -> QuestionCard {
        let question = self.current_question();
        let number = self.state.current_question + 1;

        let options = question
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| OptionRow {
                id: option.id,
                label: format!("{}. {}", option_letter(i), option.text),
                selected: self.state.selected_option == Some(option.id),
            })
            .collect();

        QuestionCard {
            header: format!("Question {} of {}", number, self.total_questions()),
            title: format!("Question {}: {}", number, question.text),
            options,
            highlighted: self.state.highlighted,
            theme_label: if self.state.dark_theme {
                "🌙 Dark mode"
            } else {
                "☀ Light mode"
            },
        }
    }

    pub fn result_card(&self) -> ResultCard {
        let correct = self.state.correct_answers;
        let total = self.total_questions();
        let percentage = if total == 0 {
            0.0
        } else {
            (correct as f64 / total as f64) * 100.0
        };
        ResultCard {
            correct,
            total,
            score_line: format!("You got {correct} out of {total} correct!"),
            percentage_label: format!("{percentage:.2}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnswerOption, Question};

    fn bank(n: usize) -> Vec<Question> {
        (0..n)
            .map(|i| Question {
                id: i + 1,
                text: format!("Prompt {}", i + 1),
                options: vec![
                    AnswerOption {
                        id: 7,
                        text: "first".into(),
                        is_correct: true,
                    },
                    AnswerOption {
                        id: 3,
                        text: "second".into(),
                        is_correct: false,
                    },
                ],
            })
            .collect()
    }

    #[test]
    fn header_total_follows_bank_length() {
        let app = QuizApp::with_questions(bank(7));
        assert_eq!(app.question_card().header, "Question 1 of 7");
    }

    #[test]
    fn option_letters_ignore_option_ids() {
        let app = QuizApp::with_questions(bank(2));
        let card = app.question_card();
        assert_eq!(card.options[0].label, "A. first");
        assert_eq!(card.options[1].label, "B. second");
    }

    #[test]
    fn selected_option_is_marked() {
        let mut app = QuizApp::with_questions(bank(3));
        app.select_option(3);
        let card = app.question_card();
        assert!(!card.options[0].selected);
        assert!(card.options[1].selected);
        assert_eq!(card.header, "Question 2 of 3");
    }

    #[test]
    fn theme_label_reflects_current_theme() {
        let mut app = QuizApp::with_questions(bank(2));
        assert_eq!(app.question_card().theme_label, "☀ Light mode");
        app.toggle_theme();
        assert_eq!(app.question_card().theme_label, "🌙 Dark mode");
    }

    #[test]
    fn result_card_formats_percentage_to_two_decimals() {
        let mut app = QuizApp::with_questions(bank(5));
        for _ in 0..3 {
            app.select_option(7);
        }
        for _ in 0..2 {
            app.select_option(3);
        }
        assert!(app.is_completed());
        let card = app.result_card();
        assert_eq!(card.correct, 3);
        assert_eq!(card.total, 5);
        assert_eq!(card.percentage_label, "60.00");
        assert_eq!(card.score_line, "You got 3 out of 5 correct!");
    }

    #[test]
    fn result_card_handles_uneven_fractions() {
        let mut app = QuizApp::with_questions(bank(3));
        app.select_option(7);
        app.select_option(3);
        app.select_option(3);
        assert_eq!(app.result_card().percentage_label, "33.33");
    }
}
