// src/view_models.rs

/// Row for one option of the current question, ready to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionRow {
    pub id: usize,
    pub label: String, // "A. Mars"
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionCard {
    pub header: String, // "Question 2 of 5"
    pub title: String,  // "Question 2: ..."
    pub options: Vec<OptionRow>,
    pub highlighted: bool,
    pub theme_label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultCard {
    pub correct: usize,
    pub total: usize,
    pub score_line: String,
    pub percentage_label: String, // "60.00"
}

/// Sequential letter for a zero-based option position (A, B, C, ...).
/// Derived from the position, never from the option id.
pub fn option_letter(index: usize) -> char {
    (b'A' + index as u8) as char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_letters_follow_position() {
        assert_eq!(option_letter(0), 'A');
        assert_eq!(option_letter(1), 'B');
        assert_eq!(option_letter(3), 'D');
    }
}
